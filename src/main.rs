// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use dashboard_graph_fold::application::category_service::CategoryService;
use dashboard_graph_fold::application::fold_service::FoldService;
use dashboard_graph_fold::infrastructure::category_store::ConfigCategoryRepository;
use dashboard_graph_fold::infrastructure::config::load_graph_config;
use dashboard_graph_fold::presentation::app_state::AppState;
use dashboard_graph_fold::presentation::router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let graph_config = load_graph_config()?;
    tracing::info!(
        "Loaded {} categories ({} with folds)",
        graph_config.categories.len(),
        graph_config
            .categories
            .values()
            .filter(|c| c.fold.is_some())
            .count()
    );

    // Create repository (infrastructure layer)
    let repository = Arc::new(ConfigCategoryRepository::new(graph_config.categories));

    // Create services (application layer)
    let category_service = CategoryService::new(repository.clone());
    let fold_service = FoldService::new(repository);

    let state = Arc::new(AppState {
        category_service,
        fold_service,
    });

    // Build router (presentation layer)
    let app = router(state);

    let addr: SocketAddr = graph_config.server.bind.parse()?;
    tracing::info!("Starting dashboard-graph-fold service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
