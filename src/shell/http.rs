use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};
use axum::{Extension, Router, response::Html, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";
pub const SUBSCRIPTION_PATH: &str = "/ws";

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state);

    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .route_service(SUBSCRIPTION_PATH, GraphQLSubscription::new(schema.clone()))
        .route("/health", get(health))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .subscription_endpoint(SUBSCRIPTION_PATH)
            .finish(),
    )
}

async fn health() -> &'static str {
    "ok"
}
