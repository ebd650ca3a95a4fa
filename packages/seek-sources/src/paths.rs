use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use tokio::fs;

use seek_domain::FileHistoryItem;

use crate::history::file_name_or_path;

/// Interprets raw text as a filesystem path.
#[derive(Debug, Clone, Default)]
pub struct FsPathResolver {
	home: Option<PathBuf>,
}
impl FsPathResolver {
	pub fn new() -> Self {
		Self { home: dirs::home_dir() }
	}

	/// Returns a record for an existing file or directory. Only a leading `~` is expanded;
	/// surrounding whitespace is part of the path.
	pub async fn check(&self, raw: &str) -> Option<FileHistoryItem> {
		let path = self.expand(raw)?;
		let metadata = fs::metadata(&path).await.ok()?;
		let last_used = metadata
			.modified()
			.ok()
			.map(OffsetDateTime::from)
			.map(|modified| modified.unix_timestamp().max(0) as u64)
			.unwrap_or_default();

		Some(FileHistoryItem {
			name: file_name_or_path(&path),
			path: path.to_string_lossy().into_owned(),
			last_used,
			use_count: 0,
		})
	}

	fn expand(&self, raw: &str) -> Option<PathBuf> {
		if raw.is_empty() {
			return None;
		}

		match (raw.strip_prefix('~'), self.home.as_deref()) {
			(Some(""), Some(home)) => Some(home.to_path_buf()),
			(Some(rest), Some(home)) if rest.starts_with(['/', '\\']) => {
				Some(home.join(&rest[1..]))
			},
			_ => Some(Path::new(raw).to_path_buf()),
		}
	}
}
