//! GraphQL server for a single-list todo manager.
//!
//! # Overview
//! One `/graphql` route carries the whole API: POST executes GraphQL
//! requests, GET serves the GraphiQL explorer for development use. State
//! is an in-memory [`store::TodoStore`] handed to the resolver layer when
//! the schema is built; nothing survives the process.
//!
//! # Design
//! - `app(store)` builds the router so tests can run requests in-process
//!   with `tower::ServiceExt::oneshot` against an isolated store.
//! - `run(listener, store)` takes an already-bound listener so callers
//!   (and the integration tests) choose the port.
//! - Cross-origin requests are allowed from any origin, so a browser
//!   client served from elsewhere can reach the API.

pub mod graphql;
pub mod store;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;

pub use graphql::{build_schema, MutationRoot, QueryRoot, TodoInput, TodoSchema};
pub use store::{Priority, SharedStore, StoreError, Todo, TodoFilter, TodoStore};

/// Build the router over an explicitly owned store.
pub fn app(store: TodoStore) -> Router {
    let shared: SharedStore = Arc::new(RwLock::new(store));
    let schema = build_schema(shared);
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(CorsLayer::permissive())
        .with_state(schema)
}

/// Serve the app on an already-bound listener.
pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn graphql_handler(
    State(schema): State<TodoSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
