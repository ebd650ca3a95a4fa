use std::{io::ErrorKind, path::Path, sync::Arc};

use seek_domain::MemoItem;

use crate::{Error, Result};

/// Notes held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoBook {
	memos: Arc<Vec<MemoItem>>,
}
impl MemoBook {
	pub fn from_items(items: Vec<MemoItem>) -> Self {
		Self { memos: Arc::new(items) }
	}

	/// Loads a JSON array of memos. A missing file is an empty book.
	pub fn load(path: &Path) -> Result<Self> {
		let raw = match std::fs::read_to_string(path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
			Err(err) => return Err(Error::Read { path: path.to_path_buf(), source: err }),
		};
		let items: Vec<MemoItem> = serde_json::from_str(&raw)
			.map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })?;

		Ok(Self::from_items(items))
	}

	pub fn snapshot(&self) -> Arc<Vec<MemoItem>> {
		self.memos.clone()
	}
}
