use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = hireboard_api::Args::parse();
	hireboard_api::run(args).await
}
