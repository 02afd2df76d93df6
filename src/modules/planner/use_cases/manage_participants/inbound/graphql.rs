use async_graphql::{ComplexObject, Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::planner::core::participant::{Participant, ParticipantChanges};
use crate::modules::planner::use_cases::manage_events::inbound::graphql::GqlEvent;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(complex, name = "Participant")]
pub struct GqlParticipant {
    pub id: ID,
    pub username: String,
    pub event_id: Option<ID>,
}

impl From<Participant> for GqlParticipant {
    fn from(p: Participant) -> Self {
        Self {
            id: ID(p.id),
            username: p.username,
            event_id: p.event_id.map(ID),
        }
    }
}

#[ComplexObject]
impl GqlParticipant {
    async fn event(&self, context: &Context<'_>) -> GqlResult<Option<GqlEvent>> {
        let Some(event_id) = &self.event_id else {
            return Ok(None);
        };
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.event(event_id.as_str()).await?.map(Into::into))
    }
}

#[derive(Default)]
pub struct ParticipantQueries;

#[Object]
impl ParticipantQueries {
    async fn participants(&self, context: &Context<'_>) -> GqlResult<Vec<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        let participants = state.store.participants().await?;
        Ok(participants.into_iter().map(Into::into).collect())
    }

    async fn participant(
        &self,
        context: &Context<'_>,
        id: ID,
    ) -> GqlResult<Option<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.participant(id.as_str()).await?.map(Into::into))
    }
}

#[derive(Default)]
pub struct ParticipantMutations;

#[Object]
impl ParticipantMutations {
    async fn add_participant(
        &self,
        context: &Context<'_>,
        username: String,
        event_id: Option<ID>,
    ) -> GqlResult<GqlParticipant> {
        let state = context.data_unchecked::<AppState>();
        let participant = state
            .store
            .add_participant(username, event_id.map(|id| id.0))
            .await?;
        Ok(participant.into())
    }

    async fn update_participant(
        &self,
        context: &Context<'_>,
        id: ID,
        username: Option<String>,
        event_id: Option<ID>,
    ) -> GqlResult<Option<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        let changes = ParticipantChanges {
            username,
            event_id: event_id.map(|id| id.0),
        };
        Ok(state
            .store
            .update_participant(id.as_str(), changes)
            .await?
            .map(Into::into))
    }

    async fn delete_participant(
        &self,
        context: &Context<'_>,
        id: ID,
    ) -> GqlResult<Option<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state
            .store
            .delete_participant(id.as_str())
            .await?
            .map(Into::into))
    }

    async fn delete_all_participants(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<Vec<GqlParticipant>> {
        let state = context.data_unchecked::<AppState>();
        let deleted = state.store.delete_all_participants().await?;
        Ok(deleted.into_iter().map(Into::into).collect())
    }
}
