//! Server: reads settings from env, seeds the store, mounts common, dish and order routes.

use grubdash::{app, load_seed, AppState, Seed, Settings, Store};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grubdash=info,tower_http=debug")),
        )
        .init();

    let settings = Settings::from_env()?;
    let seed = match &settings.seed_dir {
        Some(dir) => load_seed(dir).await?,
        None => Seed::default(),
    };
    let store = Store::with_seed(settings.id_strategy.generator(), seed)?;
    let router = app(AppState::new(store), settings.body_limit);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
