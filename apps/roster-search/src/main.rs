use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = roster_search::Args::parse();
	roster_search::run(args).await
}
