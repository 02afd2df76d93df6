use async_graphql::{ComplexObject, Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::planner::core::user::{User, UserChanges};
use crate::modules::planner::use_cases::manage_events::inbound::graphql::GqlEvent;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(complex, name = "User")]
pub struct GqlUser {
    pub id: ID,
    pub username: String,
}

impl From<User> for GqlUser {
    fn from(u: User) -> Self {
        Self {
            id: ID(u.id),
            username: u.username,
        }
    }
}

#[ComplexObject]
impl GqlUser {
    /// Events owned by this user, read fresh from the store.
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state.store.events_by_user(self.id.as_str()).await?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    async fn users(&self, context: &Context<'_>) -> GqlResult<Vec<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        let users = state.store.users().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    async fn user(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.user(id.as_str()).await?.map(Into::into))
    }
}

#[derive(Default)]
pub struct UserMutations;

#[Object]
impl UserMutations {
    async fn add_user(&self, context: &Context<'_>, username: String) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.add_user(username).await?.into())
    }

    async fn update_user(
        &self,
        context: &Context<'_>,
        id: ID,
        username: String,
    ) -> GqlResult<Option<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        let changes = UserChanges {
            username: Some(username),
        };
        Ok(state
            .store
            .update_user(id.as_str(), changes)
            .await?
            .map(Into::into))
    }

    async fn delete_user(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.delete_user(id.as_str()).await?.map(Into::into))
    }

    async fn delete_all_users(&self, context: &Context<'_>) -> GqlResult<Vec<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        let deleted = state.store.delete_all_users().await?;
        Ok(deleted.into_iter().map(Into::into).collect())
    }
}
