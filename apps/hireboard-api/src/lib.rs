pub mod auth;
pub mod pages;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
	version = hireboard_cli::VERSION,
	rename_all = "kebab",
	styles = hireboard_cli::styles(),
)]
pub struct Args {
	/// Listen address override; defaults to the HTTP_BIND environment
	/// variable.
	#[arg(long, value_name = "ADDR")]
	pub bind: Option<String>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = hireboard_config::from_env()?;

	init_tracing(&config);

	let bind = args.bind.unwrap_or_else(|| config.service.http_bind.clone());
	let http_addr: SocketAddr = bind.parse()?;
	let state = AppState::new(config);
	let app = routes::router(state);
	let listener = TcpListener::bind(http_addr).await?;

	tracing::info!(%http_addr, "HTTP server listening.");

	axum::serve(listener, app).await?;

	Ok(())
}

fn init_tracing(config: &hireboard_config::Config) {
	let filter = EnvFilter::try_new(&config.service.log_level)
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
