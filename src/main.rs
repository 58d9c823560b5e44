use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::config::AppConfig;
use todo_api::http::routing;
use todo_api::infrastructure::memory_repo::InMemoryTodoRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    let repo = if config.seed_todos { InMemoryTodoRepository::seeded() } else { InMemoryTodoRepository::default() };
    let service = TodoServiceImpl::new(repo);
    let router = routing::todo_app(service);

    let addr = config.bind_addr;
    tracing::info!(%addr, seeded = config.seed_todos, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
