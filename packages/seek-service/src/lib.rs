//! Query-driven search across the launcher's sources.
//!
//! [`SearchController`] owns the live query. Every keystroke fans out to one adapter per
//! source; each adapter may fill its cache, filters, and hands its result to the
//! [`CommitGate`], which drops anything computed for a query that is no longer live.

pub mod cache;
pub mod gate;
pub mod plugins;
pub mod presented;
pub mod settings;
pub mod sources;

mod adapters;
mod controller;
mod error;

use std::{future::Future, pin::Pin, sync::Arc};

pub use cache::{CacheEntry, CacheStore, IconCache};
pub use controller::{FanOut, SearchController};
pub use error::{Error, Result};
pub use gate::{CommitGate, Ticket};
pub use plugins::PluginRegistry;
pub use presented::{PresentedResults, SourceId};
pub use settings::{DEFAULT_MAX_RESULTS, SearchSettings};
pub use sources::DefaultSources;

use seek_domain::{AppInfo, FileHistoryItem, IconHandle, MemoItem, SystemFolderItem};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Notes are resident in memory; reading them never fails.
pub trait NotesStore
where
	Self: Send + Sync,
{
	fn memos(&self) -> Arc<Vec<MemoItem>>;
}

pub trait FolderStore
where
	Self: Send + Sync,
{
	fn list_system_folders<'a>(&'a self) -> BoxFuture<'a, Result<Vec<SystemFolderItem>>>;
}

pub trait ApplicationStore
where
	Self: Send + Sync,
{
	fn scan_applications<'a>(&'a self) -> BoxFuture<'a, Result<Vec<AppInfo>>>;
}

pub trait HistoryStore
where
	Self: Send + Sync,
{
	fn get_all_file_history<'a>(&'a self) -> BoxFuture<'a, Result<Vec<FileHistoryItem>>>;
}

pub trait PathResolver
where
	Self: Send + Sync,
{
	fn check_path_exists<'a>(
		&'a self,
		path: &'a str,
	) -> BoxFuture<'a, Result<Option<FileHistoryItem>>>;
}

pub trait IconResolver
where
	Self: Send + Sync,
{
	fn extract_icon<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Option<IconHandle>>>;
}

/// The backing stores the controller consults.
#[derive(Clone)]
pub struct Collaborators {
	pub notes: Arc<dyn NotesStore>,
	pub folders: Arc<dyn FolderStore>,
	pub applications: Arc<dyn ApplicationStore>,
	pub history: Arc<dyn HistoryStore>,
	pub paths: Arc<dyn PathResolver>,
	pub icons: Arc<dyn IconResolver>,
}
