//! Wires the filesystem-backed stores from `seek-sources` into the collaborator traits.

use std::sync::Arc;

use seek_config::Config;
use seek_domain::{AppInfo, FileHistoryItem, IconHandle, MemoItem, SystemFolderItem};
use seek_sources::{
	AppScanner, FsPathResolver, HistoryFile, MemoBook, SystemFolders, ThemeIconResolver,
};

use crate::{
	ApplicationStore, BoxFuture, Collaborators, FolderStore, HistoryStore, IconResolver,
	NotesStore, PathResolver, Result,
};

impl NotesStore for MemoBook {
	fn memos(&self) -> Arc<Vec<MemoItem>> {
		self.snapshot()
	}
}

impl FolderStore for SystemFolders {
	fn list_system_folders<'a>(&'a self) -> BoxFuture<'a, Result<Vec<SystemFolderItem>>> {
		Box::pin(async move { Ok(self.list().await?) })
	}
}

impl ApplicationStore for AppScanner {
	fn scan_applications<'a>(&'a self) -> BoxFuture<'a, Result<Vec<AppInfo>>> {
		Box::pin(async move { Ok(self.scan().await?) })
	}
}

impl HistoryStore for HistoryFile {
	fn get_all_file_history<'a>(&'a self) -> BoxFuture<'a, Result<Vec<FileHistoryItem>>> {
		Box::pin(async move { Ok(self.load_all().await?) })
	}
}

impl PathResolver for FsPathResolver {
	fn check_path_exists<'a>(
		&'a self,
		path: &'a str,
	) -> BoxFuture<'a, Result<Option<FileHistoryItem>>> {
		Box::pin(async move { Ok(self.check(path).await) })
	}
}

impl IconResolver for ThemeIconResolver {
	fn extract_icon<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Option<IconHandle>>> {
		Box::pin(async move { Ok(self.icon_for(path).await) })
	}
}

/// The default stores, kept as concrete handles so callers can also write to them (for
/// example recording a file open).
#[derive(Clone)]
pub struct DefaultSources {
	pub notes: Arc<MemoBook>,
	pub folders: Arc<SystemFolders>,
	pub applications: Arc<AppScanner>,
	pub history: Arc<HistoryFile>,
	pub paths: Arc<FsPathResolver>,
	pub icons: Arc<ThemeIconResolver>,
}
impl DefaultSources {
	/// Loads notes eagerly; every other store is only touched on first query.
	pub fn from_config(cfg: &Config) -> Result<Self> {
		let notes = MemoBook::load(&cfg.notes_path())?;
		let applications = AppScanner::new(
			cfg.applications.scan_roots.clone(),
			cfg.applications.max_depth,
			cfg.applications.max_apps,
		);

		Ok(Self {
			notes: Arc::new(notes),
			folders: Arc::new(SystemFolders),
			applications: Arc::new(applications),
			history: Arc::new(HistoryFile::new(cfg.file_history_path())),
			paths: Arc::new(FsPathResolver::new()),
			icons: Arc::new(ThemeIconResolver),
		})
	}

	pub fn collaborators(&self) -> Collaborators {
		Collaborators {
			notes: self.notes.clone(),
			folders: self.folders.clone(),
			applications: self.applications.clone(),
			history: self.history.clone(),
			paths: self.paths.clone(),
			icons: self.icons.clone(),
		}
	}
}
