use std::{
	collections::HashMap,
	future::Future,
	path::Path,
	sync::{Arc, Mutex},
};

use tokio::sync::Mutex as FillLock;

use seek_domain::IconHandle;

use crate::{IconResolver, Result};

/// Extensions whose icon belongs to the individual file rather than to its type.
const PER_FILE_ICON_EXTENSIONS: &[&str] = &["app", "appimage", "desktop", "exe", "ico", "lnk"];

#[derive(Debug)]
pub struct CacheEntry<T> {
	pub items: Arc<Vec<T>>,
	pub loaded: bool,
}
impl<T> Default for CacheEntry<T> {
	fn default() -> Self {
		Self { items: Arc::new(Vec::new()), loaded: false }
	}
}

/// A lazily populated collection fetched from one backing store.
///
/// Fills and refreshes are serialized by a fill lock, so concurrent queries that all find
/// the cache unloaded trigger one fetch between them. Items are swapped in whole, so a
/// loaded cache never exposes a partial fetch.
#[derive(Debug)]
pub struct CacheStore<T> {
	label: &'static str,
	entry: Mutex<CacheEntry<T>>,
	fill: FillLock<()>,
}
impl<T> CacheStore<T> {
	pub fn new(label: &'static str) -> Self {
		Self { label, entry: Mutex::new(CacheEntry::default()), fill: FillLock::new(()) }
	}

	pub fn is_loaded(&self) -> bool {
		self.entry.lock().unwrap_or_else(|err| err.into_inner()).loaded
	}

	/// The cached items, if a fetch has completed.
	pub fn snapshot(&self) -> Option<Arc<Vec<T>>> {
		let entry = self.entry.lock().unwrap_or_else(|err| err.into_inner());

		entry.loaded.then(|| entry.items.clone())
	}

	/// Returns the cached items, fetching them first if no fetch has completed yet. A failed
	/// fetch leaves the cache unloaded.
	pub async fn get_or_fill<F, Fut>(&self, fetch: F) -> Result<Arc<Vec<T>>>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<Vec<T>>>,
	{
		if let Some(items) = self.snapshot() {
			return Ok(items);
		}

		let _fill = self.fill.lock().await;

		// Another caller may have filled the cache while this one waited.
		if let Some(items) = self.snapshot() {
			return Ok(items);
		}

		let items = Arc::new(fetch().await?);

		self.store(items.clone());

		tracing::debug!(cache = self.label, count = items.len(), "Cache filled.");

		Ok(items)
	}

	/// Re-fetches unconditionally. A failed fetch leaves the previous contents in place.
	pub async fn refresh<F, Fut>(&self, fetch: F) -> Result<Arc<Vec<T>>>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<Vec<T>>>,
	{
		let _fill = self.fill.lock().await;
		let items = Arc::new(fetch().await?);

		self.store(items.clone());

		Ok(items)
	}

	fn store(&self, items: Arc<Vec<T>>) {
		let mut entry = self.entry.lock().unwrap_or_else(|err| err.into_inner());

		entry.items = items;
		entry.loaded = true;
	}
}

/// Icons keyed by file type, or by path for files that carry their own icon. Entries are
/// never evicted.
#[derive(Debug, Default)]
pub struct IconCache {
	entries: Mutex<HashMap<String, Option<IconHandle>>>,
}
impl IconCache {
	pub fn key_for(path: &str) -> String {
		let extension = Path::new(path)
			.extension()
			.and_then(|ext| ext.to_str())
			.map(|ext| ext.to_ascii_lowercase());

		match extension {
			Some(ext) if !PER_FILE_ICON_EXTENSIONS.contains(&ext.as_str()) => format!("ext:{ext}"),
			_ => format!("path:{path}"),
		}
	}

	pub fn len(&self) -> usize {
		self.entries.lock().unwrap_or_else(|err| err.into_inner()).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Looks up the icon for `path`, asking the resolver on a miss. Resolver errors are not
	/// cached; a confirmed "no icon" is.
	pub async fn resolve(&self, resolver: &dyn IconResolver, path: &str) -> Option<IconHandle> {
		let key = Self::key_for(path);

		let cached = self.entries.lock().unwrap_or_else(|err| err.into_inner()).get(&key).cloned();

		if let Some(hit) = cached {
			return hit;
		}

		match resolver.extract_icon(path).await {
			Ok(icon) => {
				self.entries
					.lock()
					.unwrap_or_else(|err| err.into_inner())
					.insert(key, icon.clone());

				icon
			},
			Err(err) => {
				tracing::debug!(error = %err, path, "Icon lookup failed.");

				None
			},
		}
	}
}
