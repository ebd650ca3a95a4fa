pub mod console;

mod error;

pub use console::{Command, Session};
pub use error::{Error, Result};

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

use seek_service::{DefaultSources, SearchController};

#[derive(Debug, Parser)]
#[command(
	version = seek_cli::VERSION,
	rename_all = "kebab",
	styles = seek_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Run a single query, print its results, and exit.
	#[arg(long, short = 'q', value_name = "TEXT")]
	pub query: Option<String>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = seek_config::load(&args.config)?;
	let filter = EnvFilter::new(config.service.log_level.clone());

	// Stdout carries the JSON replies.
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let sources = DefaultSources::from_config(&config)?;
	let controller = SearchController::from_config(&config, sources.collaborators())?;
	let session = Session::new(controller, sources.history.clone());
	let mut stdout = io::stdout();

	if let Some(query) = args.query {
		session.handle(Command::Query(query), &mut stdout).await?;

		return Ok(());
	}

	tracing::info!(config = %args.config.display(), "Console ready.");

	session.run(BufReader::new(io::stdin()), &mut stdout).await?;

	Ok(())
}
