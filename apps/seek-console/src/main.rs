use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = seek_console::Args::parse();
	seek_console::run(args).await
}
