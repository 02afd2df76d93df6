use async_graphql::{MergedObject, Schema};

use crate::modules::planner::use_cases::manage_events::inbound::graphql::{
    EventMutations, EventQueries,
};
use crate::modules::planner::use_cases::manage_locations::inbound::graphql::{
    LocationMutations, LocationQueries,
};
use crate::modules::planner::use_cases::manage_participants::inbound::graphql::{
    ParticipantMutations, ParticipantQueries,
};
use crate::modules::planner::use_cases::manage_users::inbound::graphql::{
    UserMutations, UserQueries,
};
pub use crate::modules::planner::use_cases::watch_notifications::inbound::graphql::SubscriptionRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQueries, EventQueries, LocationQueries, ParticipantQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    UserMutations,
    EventMutations,
    LocationMutations,
    ParticipantMutations,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot,
    )
    .data(state)
    .finish()
}
