use std::error::Error;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::from_filename(".env.local").ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::read_config()?;
    let app_state = factory::build_app_state(&settings);
    let app = router::create(app_state, settings.application.app_url.clone());

    let addr = format!("{}:{}", settings.application.host, settings.application.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
