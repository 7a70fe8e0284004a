use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use todo_server::TodoStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "4000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("GraphQL endpoint at http://{addr}/graphql");
    todo_server::run(listener, TodoStore::with_demo_items()).await
}
