use std::{
	collections::HashMap,
	io::ErrorKind,
	path::{Path, PathBuf},
};

use serde_json::Value;
use time::OffsetDateTime;
use tokio::{fs, sync::Mutex};

use seek_domain::FileHistoryItem;

use crate::{Error, Result};

/// File-open history persisted as a JSON object keyed by absolute path.
#[derive(Debug)]
pub struct HistoryFile {
	path: PathBuf,
	// Serializes read-modify-write cycles from this process.
	write_lock: Mutex<()>,
}
impl HistoryFile {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into(), write_lock: Mutex::new(()) }
	}

	/// Every entry, most recently used first. A missing file is an empty history.
	pub async fn load_all(&self) -> Result<Vec<FileHistoryItem>> {
		let entries = self.read_entries().await?;
		let mut items: Vec<FileHistoryItem> = entries.into_values().collect();

		items.sort_by(|a, b| b.last_used.cmp(&a.last_used).then_with(|| a.path.cmp(&b.path)));

		Ok(items)
	}

	/// Records that `target` was opened. Relative paths resolve against the working
	/// directory; the file must exist.
	pub async fn record_use(&self, target: &Path) -> Result<FileHistoryItem> {
		let absolute = if target.is_absolute() {
			target.to_path_buf()
		} else {
			std::env::current_dir()
				.map_err(|err| Error::Read { path: target.to_path_buf(), source: err })?
				.join(target)
		};

		if fs::metadata(&absolute).await.is_err() {
			return Err(Error::NotFound { path: absolute });
		}

		let key = absolute.to_string_lossy().into_owned();
		let name = file_name_or_path(&absolute);
		let now = OffsetDateTime::now_utc().unix_timestamp().max(0) as u64;
		let _guard = self.write_lock.lock().await;
		let mut entries = self.read_entries().await?;
		let item = entries
			.entry(key.clone())
			.and_modify(|item| {
				item.last_used = now;
				item.use_count += 1;
			})
			.or_insert_with(|| FileHistoryItem { path: key, name, last_used: now, use_count: 1 })
			.clone();

		self.write_entries(&entries).await?;

		Ok(item)
	}

	async fn read_entries(&self) -> Result<HashMap<String, FileHistoryItem>> {
		let raw = match fs::read_to_string(&self.path).await {
			Ok(raw) => raw,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
			Err(err) => return Err(Error::Read { path: self.path.clone(), source: err }),
		};

		decode_entries(&raw, &self.path)
	}

	async fn write_entries(&self, entries: &HashMap<String, FileHistoryItem>) -> Result<()> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)
				.await
				.map_err(|err| Error::Write { path: parent.to_path_buf(), source: err })?;
		}

		let raw = serde_json::to_string_pretty(entries)?;

		fs::write(&self.path, raw)
			.await
			.map_err(|err| Error::Write { path: self.path.clone(), source: err })
	}
}

/// Decodes the history map, skipping entries that do not have the expected shape.
pub fn decode_entries(raw: &str, path: &Path) -> Result<HashMap<String, FileHistoryItem>> {
	let map: HashMap<String, Value> = serde_json::from_str(raw)
		.map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })?;
	let mut entries = HashMap::with_capacity(map.len());

	for (key, value) in map {
		match serde_json::from_value::<FileHistoryItem>(value) {
			Ok(item) => {
				entries.insert(key, item);
			},
			Err(err) => {
				tracing::warn!(error = %err, entry = %key, "Skipping malformed history entry.");
			},
		}
	}

	Ok(entries)
}

pub fn file_name_or_path(path: &Path) -> String {
	path.file_name()
		.and_then(|name| name.to_str())
		.map(str::to_string)
		.unwrap_or_else(|| path.to_string_lossy().into_owned())
}
