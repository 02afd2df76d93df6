use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::planner::core::location::{Location, LocationChanges};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Location")]
pub struct GqlLocation {
    pub id: ID,
    pub name: String,
}

impl From<Location> for GqlLocation {
    fn from(l: Location) -> Self {
        Self {
            id: ID(l.id),
            name: l.name,
        }
    }
}

#[derive(Default)]
pub struct LocationQueries;

#[Object]
impl LocationQueries {
    async fn locations(&self, context: &Context<'_>) -> GqlResult<Vec<GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        let locations = state.store.locations().await?;
        Ok(locations.into_iter().map(Into::into).collect())
    }

    async fn location(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.location(id.as_str()).await?.map(Into::into))
    }
}

#[derive(Default)]
pub struct LocationMutations;

#[Object]
impl LocationMutations {
    async fn add_location(&self, context: &Context<'_>, name: String) -> GqlResult<GqlLocation> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.add_location(name).await?.into())
    }

    async fn update_location(
        &self,
        context: &Context<'_>,
        id: ID,
        name: String,
    ) -> GqlResult<Option<GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        let changes = LocationChanges { name: Some(name) };
        Ok(state
            .store
            .update_location(id.as_str(), changes)
            .await?
            .map(Into::into))
    }

    async fn delete_location(
        &self,
        context: &Context<'_>,
        id: ID,
    ) -> GqlResult<Option<GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.delete_location(id.as_str()).await?.map(Into::into))
    }

    async fn delete_all_locations(&self, context: &Context<'_>) -> GqlResult<Vec<GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        let deleted = state.store.delete_all_locations().await?;
        Ok(deleted.into_iter().map(Into::into).collect())
    }
}
