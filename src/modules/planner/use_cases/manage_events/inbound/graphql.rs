use async_graphql::{ComplexObject, Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::planner::core::event::{Event, EventChanges};
use crate::modules::planner::use_cases::manage_events::command::AddEvent;
use crate::modules::planner::use_cases::manage_locations::inbound::graphql::GqlLocation;
use crate::modules::planner::use_cases::manage_participants::inbound::graphql::GqlParticipant;
use crate::modules::planner::use_cases::manage_users::inbound::graphql::GqlUser;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(complex, name = "Event")]
pub struct GqlEvent {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub time: String,
    pub user_id: ID,
    pub location_id: ID,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: ID(e.id),
            title: e.title,
            description: e.description,
            time: e.time,
            user_id: ID(e.user_id),
            location_id: ID(e.location_id),
        }
    }
}

// Relations are looked up on every read. A deleted user or location resolves to null.
#[ComplexObject]
impl GqlEvent {
    async fn user(&self, context: &Context<'_>) -> GqlResult<Option<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.user(self.user_id.as_str()).await?.map(Into::into))
    }

    async fn location(&self, context: &Context<'_>) -> GqlResult<Option<GqlLocation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state
            .store
            .location(self.location_id.as_str())
            .await?
            .map(Into::into))
    }

    async fn participants(&self, context: &Context<'_>) -> GqlResult<Vec<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        let participants = state.store.participants_of_event(self.id.as_str()).await?;
        Ok(participants.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct EventQueries;

#[Object]
impl EventQueries {
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state.store.events().await?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    async fn event(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.event(id.as_str()).await?.map(Into::into))
    }
}

#[derive(Default)]
pub struct EventMutations;

#[Object]
impl EventMutations {
    async fn add_event(
        &self,
        context: &Context<'_>,
        title: String,
        user_id: ID,
        location_id: ID,
        description: String,
        time: String,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();

        let command = AddEvent {
            title,
            user_id: user_id.0,
            location_id: location_id.0,
            description,
            time,
        };

        Ok(state.store.add_event(command).await?.into())
    }

    async fn update_event(
        &self,
        context: &Context<'_>,
        id: ID,
        title: Option<String>,
        description: Option<String>,
        time: Option<String>,
        user_id: Option<ID>,
        location_id: Option<ID>,
    ) -> GqlResult<Option<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let changes = EventChanges {
            title,
            description,
            time,
            user_id: user_id.map(|id| id.0),
            location_id: location_id.map(|id| id.0),
        };
        Ok(state
            .store
            .update_event(id.as_str(), changes)
            .await?
            .map(Into::into))
    }

    async fn delete_event(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.delete_event(id.as_str()).await?.map(Into::into))
    }

    async fn delete_all_events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let deleted = state.store.delete_all_events().await?;
        Ok(deleted.into_iter().map(Into::into).collect())
    }
}
