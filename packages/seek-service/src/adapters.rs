//! One adapter per source. Each captures its ticket before any slow work and commits the
//! outcome, or an empty result, through the gate. Failures never leave the adapter.

mod applications;
mod direct_path;
mod file_history;
mod folders;
mod memos;
mod plugins;

use std::{future::Future, sync::Arc};

use crate::{Result, SourceId, cache::CacheStore, controller::Shared};

impl Shared {
	/// Cached items for `source`, filling the cache on first use. A failed fetch is logged
	/// and yields `None`; the cache stays unloaded so the next query retries.
	pub(crate) async fn load_cached<T, F, Fut>(
		&self,
		source: SourceId,
		cache: &CacheStore<T>,
		fetch: F,
	) -> Option<Arc<Vec<T>>>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<Vec<T>>>,
	{
		match cache.get_or_fill(fetch).await {
			Ok(items) => Some(items),
			Err(err) => {
				tracing::warn!(error = %err, source = source.as_str(), "Source fetch failed.");

				None
			},
		}
	}
}
