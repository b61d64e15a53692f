use exolines_models::sample_catalog;
use exolines_server::{HttpServer, Settings};
use exolines_views::app::routes;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let settings = Settings::from_env()?;

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(settings.log_filter.clone())),
		)
		.init();

	let catalog = Arc::new(sample_catalog());
	let router = routes(catalog);

	let server = HttpServer::new(Arc::new(router)).bind(settings.addr()?).await?;

	tokio::select! {
		result = server.serve() => result?,
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("shutdown signal received");
		}
	}

	Ok(())
}
