pub mod matching;
pub mod phonetic;
pub mod records;

pub use matching::{Matchable, QueryMatcher};
pub use phonetic::PhoneticKeys;
pub use records::{
	AppInfo, DirectPathResult, FileHistoryItem, FileHistoryMatch, IconHandle, MemoItem,
	PluginDescriptor, SystemFolderItem,
};
