// AnimalDex Web Server - server-rendered discovery, ecosystem and conservation pages

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use animaldex_web::{app_state::AppState, config::Config, web::create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("animaldex_web=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("🚀 Starting AnimalDex Web against {}", config.api.base_url);

    // Initialize application state
    let app_state = AppState::new(config.clone())?;
    let app = create_router(app_state);

    // Start server
    let addr = config.server_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("🌐 Server listening on http://{}", addr);
    info!("  GET /                            - Discovery");
    info!("  GET /animals/{{id}}                - Animal detail");
    info!("  GET /ecosystem-builder           - Ecosystem builder");
    info!("  GET /conservation-action-center  - Conservation action center");
    info!("  GET /demo                        - Card demo");

    axum::serve(listener, app).await?;

    Ok(())
}
