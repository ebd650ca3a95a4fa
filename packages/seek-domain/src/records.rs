use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::phonetic::PhoneticKeys;

/// A saved note. Notes are always resident in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoItem {
	pub id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub content: String,
	/// Unix seconds.
	#[serde(default)]
	pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFolderItem {
	pub name: String,
	pub path: String,
	pub display_name: String,
	pub is_folder: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_pinyin: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_pinyin_initials: Option<String>,
}
impl SystemFolderItem {
	pub fn new(name: &str, display_name: String, path: String) -> Self {
		let PhoneticKeys { full, initials } = PhoneticKeys::of(name);

		Self {
			name: name.to_string(),
			path,
			display_name,
			is_folder: true,
			name_pinyin: full,
			name_pinyin_initials: initials,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
	pub name: String,
	pub path: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_pinyin: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_pinyin_initials: Option<String>,
}
impl AppInfo {
	pub fn new(name: String, path: String, description: Option<String>) -> Self {
		let PhoneticKeys { full, initials } = PhoneticKeys::of(&name);

		Self { name, path, description, name_pinyin: full, name_pinyin_initials: initials }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHistoryItem {
	pub path: String,
	pub name: String,
	/// Unix seconds.
	pub last_used: u64,
	pub use_count: u64,
}

/// Opaque icon reference produced by an icon resolver, e.g. a theme icon name or an encoded
/// image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconHandle(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHistoryMatch {
	#[serde(flatten)]
	pub item: FileHistoryItem,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<IconHandle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
	pub id: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default)]
	pub keywords: BTreeSet<String>,
}
impl PluginDescriptor {
	pub fn new(id: &str, name: &str, description: Option<&str>, keywords: &[&str]) -> Self {
		Self {
			id: id.to_string(),
			name: name.to_string(),
			description: description.map(str::to_string),
			keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
		}
	}
}

/// Outcome of reading the raw query as a literal path. "Not yet resolved" and "confirmed
/// absent" are both represented as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectPathResult {
	pub record: Option<FileHistoryItem>,
}
impl DirectPathResult {
	pub fn absent() -> Self {
		Self { record: None }
	}

	pub fn found(record: FileHistoryItem) -> Self {
		Self { record: Some(record) }
	}

	pub fn is_present(&self) -> bool {
		self.record.is_some()
	}
}
