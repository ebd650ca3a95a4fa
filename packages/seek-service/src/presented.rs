use serde::Serialize;

use seek_domain::{
	AppInfo, DirectPathResult, FileHistoryMatch, MemoItem, PluginDescriptor, SystemFolderItem,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
	Memos,
	Folders,
	Applications,
	FileHistory,
	Plugins,
	DirectPath,
}
impl SourceId {
	pub const ALL: [Self; 6] = [
		Self::Memos,
		Self::Folders,
		Self::Applications,
		Self::FileHistory,
		Self::Plugins,
		Self::DirectPath,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Memos => "memos",
			Self::Folders => "folders",
			Self::Applications => "applications",
			Self::FileHistory => "file_history",
			Self::Plugins => "plugins",
			Self::DirectPath => "direct_path",
		}
	}
}

/// What the rendering layer shows, one collection per source. Each source is replaced
/// independently of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PresentedResults {
	pub memos: Vec<MemoItem>,
	pub folders: Vec<SystemFolderItem>,
	pub applications: Vec<AppInfo>,
	pub file_history: Vec<FileHistoryMatch>,
	pub plugins: Vec<PluginDescriptor>,
	pub direct_path: DirectPathResult,
}
impl PresentedResults {
	pub fn count(&self, source: SourceId) -> usize {
		match source {
			SourceId::Memos => self.memos.len(),
			SourceId::Folders => self.folders.len(),
			SourceId::Applications => self.applications.len(),
			SourceId::FileHistory => self.file_history.len(),
			SourceId::Plugins => self.plugins.len(),
			SourceId::DirectPath => usize::from(self.direct_path.is_present()),
		}
	}

	pub fn is_empty(&self) -> bool {
		SourceId::ALL.into_iter().all(|source| self.count(source) == 0)
	}
}
