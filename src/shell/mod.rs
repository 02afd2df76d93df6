// Composition root for the planner.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the id generator, the event bus and the store.
// - Build the GraphQL schema and the HTTP router around them.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
