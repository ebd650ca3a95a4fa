//! Line-oriented driver for the search controller.
//!
//! Every input line is either a query, typed exactly as a launcher search box would receive
//! it, or a `:`-prefixed command. Each line produces one JSON reply on the output.

use std::{path::PathBuf, sync::Arc};

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use seek_domain::FileHistoryItem;
use seek_service::{PresentedResults, SearchController};
use seek_sources::HistoryFile;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// The raw line, whitespace included.
	Query(String),
	Refresh,
	Open(PathBuf),
	Quit,
}
impl Command {
	pub fn parse(line: &str) -> Result<Self> {
		let Some(command) = line.strip_prefix(':') else {
			return Ok(Self::Query(line.to_string()));
		};
		let (name, argument) = match command.split_once(char::is_whitespace) {
			Some((name, argument)) => (name, argument.trim()),
			None => (command.trim_end(), ""),
		};

		match name {
			// `::text` searches for `:text`.
			_ if command.starts_with(':') => Ok(Self::Query(command.to_string())),
			"refresh" => Ok(Self::Refresh),
			"quit" | "q" => Ok(Self::Quit),
			"open" if argument.is_empty() => Err(Error::MissingArgument { command: ":open" }),
			"open" => Ok(Self::Open(PathBuf::from(argument))),
			_ => Err(Error::UnknownCommand { command: name.to_string() }),
		}
	}
}

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Reply<'a> {
	Results { generation: u64, query: &'a str, results: &'a PresentedResults },
	Refreshed { entries: Option<usize> },
	Opened { record: &'a FileHistoryItem },
	Error { message: String },
}

pub struct Session {
	controller: SearchController,
	history: Arc<HistoryFile>,
}
impl Session {
	pub fn new(controller: SearchController, history: Arc<HistoryFile>) -> Self {
		Self { controller, history }
	}

	pub fn controller(&self) -> &SearchController {
		&self.controller
	}

	/// Processes lines until `:quit` or end of input. Bad commands are reported and skipped.
	pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<()>
	where
		R: AsyncBufRead + Unpin,
		W: AsyncWrite + Unpin,
	{
		let mut lines = input.lines();

		while let Some(line) = lines.next_line().await? {
			let command = match Command::parse(&line) {
				Ok(command) => command,
				Err(err) => {
					write_reply(output, &Reply::Error { message: err.to_string() }).await?;

					continue;
				},
			};

			if command == Command::Quit {
				break;
			}

			self.handle(command, output).await?;
		}

		output.flush().await?;

		Ok(())
	}

	/// Runs one command and writes its reply. Only output failures are returned.
	pub async fn handle<W>(&self, command: Command, output: &mut W) -> Result<()>
	where
		W: AsyncWrite + Unpin,
	{
		match command {
			Command::Query(text) => {
				let fan_out = self.controller.set_query(&text);
				let generation = fan_out.generation();

				fan_out.settled().await;

				let results = self.controller.snapshot();

				write_reply(output, &Reply::Results { generation, query: &text, results: &results })
					.await?;
			},
			Command::Refresh => {
				self.controller.refresh_file_history_cache().await;

				let entries = self.controller.cached_file_history().map(|items| items.len());

				write_reply(output, &Reply::Refreshed { entries }).await?;
			},
			Command::Open(path) => match self.history.record_use(&path).await {
				Ok(record) => {
					tracing::info!(path = %record.path, uses = record.use_count, "Recorded file open.");

					self.controller.refresh_file_history_cache().await;

					write_reply(output, &Reply::Opened { record: &record }).await?;
				},
				Err(err) => {
					tracing::warn!(error = %err, path = %path.display(), "Failed to record file open.");

					write_reply(output, &Reply::Error { message: err.to_string() }).await?;
				},
			},
			Command::Quit => {},
		}

		output.flush().await?;

		Ok(())
	}
}

async fn write_reply<W>(output: &mut W, reply: &Reply<'_>) -> Result<()>
where
	W: AsyncWrite + Unpin,
{
	let mut line = serde_json::to_vec(reply)?;

	line.push(b'\n');
	output.write_all(&line).await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_lines_are_queries_verbatim() {
		assert_eq!(
			Command::parse("  notes ").expect("Parse failed."),
			Command::Query("  notes ".into())
		);
		assert_eq!(Command::parse("").expect("Parse failed."), Command::Query(String::new()));
		assert_eq!(Command::parse("::memo").expect("Parse failed."), Command::Query(":memo".into()));
	}

	#[test]
	fn commands_parse_with_arguments() {
		assert_eq!(Command::parse(":refresh").expect("Parse failed."), Command::Refresh);
		assert_eq!(Command::parse(":q").expect("Parse failed."), Command::Quit);
		assert_eq!(
			Command::parse(":open  /tmp/a b.txt ").expect("Parse failed."),
			Command::Open(PathBuf::from("/tmp/a b.txt"))
		);
	}

	#[test]
	fn bad_commands_are_rejected() {
		assert!(matches!(Command::parse(":open"), Err(Error::MissingArgument { .. })));
		assert!(matches!(
			Command::parse(":launch rockets"),
			Err(Error::UnknownCommand { command }) if command == "launch"
		));
	}
}
