use async_graphql::{Context, Subscription};
use futures::{Stream, StreamExt, future};

use crate::modules::planner::core::notifications::{Notification, Topic};
use crate::modules::planner::use_cases::manage_events::inbound::graphql::GqlEvent;
use crate::modules::planner::use_cases::manage_participants::inbound::graphql::GqlParticipant;
use crate::modules::planner::use_cases::manage_users::inbound::graphql::GqlUser;
use crate::shell::state::AppState;

/// Subscribes right away, so the stream only carries what is published from now on.
fn watch<T: Send + 'static>(
    context: &Context<'_>,
    topic: Topic,
    pick: fn(Notification) -> Option<T>,
) -> impl Stream<Item = T> + Send + use<T> {
    let state = context.data_unchecked::<AppState>();
    state
        .store
        .subscribe(topic)
        .into_stream()
        .filter_map(move |notification| future::ready(pick(notification)))
}

#[derive(Default)]
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    async fn user_created(&self, context: &Context<'_>) -> impl Stream<Item = GqlUser> {
        watch(context, Topic::UserCreated, |n| match n {
            Notification::UserCreated(user) => Some(GqlUser::from(user)),
            _ => None,
        })
    }

    async fn user_deleted(&self, context: &Context<'_>) -> impl Stream<Item = GqlUser> {
        watch(context, Topic::UserDeleted, |n| match n {
            Notification::UserDeleted(user) => Some(GqlUser::from(user)),
            _ => None,
        })
    }

    async fn event_created(&self, context: &Context<'_>) -> impl Stream<Item = GqlEvent> {
        watch(context, Topic::EventCreated, |n| match n {
            Notification::EventCreated(event) => Some(GqlEvent::from(event)),
            _ => None,
        })
    }

    async fn event_deleted(&self, context: &Context<'_>) -> impl Stream<Item = GqlEvent> {
        watch(context, Topic::EventDeleted, |n| match n {
            Notification::EventDeleted(event) => Some(GqlEvent::from(event)),
            _ => None,
        })
    }

    async fn participant_added(
        &self,
        context: &Context<'_>,
    ) -> impl Stream<Item = GqlParticipant> {
        watch(context, Topic::ParticipantAdded, |n| match n {
            Notification::ParticipantAdded(participant) => Some(GqlParticipant::from(participant)),
            _ => None,
        })
    }

    async fn participant_deleted(
        &self,
        context: &Context<'_>,
    ) -> impl Stream<Item = GqlParticipant> {
        watch(context, Topic::ParticipantDeleted, |n| match n {
            Notification::ParticipantDeleted(participant) => Some(GqlParticipant::from(participant)),
            _ => None,
        })
    }
}
