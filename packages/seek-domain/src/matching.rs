use unicode_normalization::UnicodeNormalization;

use crate::records::{AppInfo, FileHistoryItem, MemoItem, PluginDescriptor, SystemFolderItem};

/// A record the stateful sources can filter by name and alias.
pub trait Matchable {
	fn primary_name(&self) -> &str;

	/// Lowercase alias keys (full pinyin, initials, acronyms). Most records have none.
	fn aliases(&self) -> [Option<&str>; 2] {
		[None, None]
	}

	/// Extra text searched like the primary name.
	fn secondary_text(&self) -> Option<&str> {
		None
	}
}

impl Matchable for MemoItem {
	fn primary_name(&self) -> &str {
		self.title.as_deref().unwrap_or_default()
	}

	fn secondary_text(&self) -> Option<&str> {
		Some(&self.content)
	}
}

impl Matchable for SystemFolderItem {
	fn primary_name(&self) -> &str {
		&self.display_name
	}

	fn aliases(&self) -> [Option<&str>; 2] {
		[self.name_pinyin.as_deref(), self.name_pinyin_initials.as_deref()]
	}
}

impl Matchable for AppInfo {
	fn primary_name(&self) -> &str {
		&self.name
	}

	fn aliases(&self) -> [Option<&str>; 2] {
		[self.name_pinyin.as_deref(), self.name_pinyin_initials.as_deref()]
	}
}

impl Matchable for FileHistoryItem {
	fn primary_name(&self) -> &str {
		&self.name
	}
}

/// A normalized query needle. Blank queries never match anything.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
	needle: String,
}
impl QueryMatcher {
	pub fn new(query: &str) -> Self {
		Self { needle: fold(query.trim()) }
	}

	pub fn is_blank(&self) -> bool {
		self.needle.is_empty()
	}

	pub fn needle(&self) -> &str {
		&self.needle
	}

	pub fn contains(&self, haystack: &str) -> bool {
		!self.is_blank() && fold(haystack).contains(&self.needle)
	}

	pub fn matches<T>(&self, record: &T) -> bool
	where
		T: Matchable,
	{
		if self.is_blank() {
			return false;
		}
		if self.contains(record.primary_name()) {
			return true;
		}
		if record.secondary_text().is_some_and(|text| self.contains(text)) {
			return true;
		}

		record.aliases().into_iter().flatten().any(|alias| alias.contains(&self.needle))
	}

	pub fn matches_plugin(&self, plugin: &PluginDescriptor) -> bool {
		self.contains(&plugin.name)
			|| plugin.description.as_deref().is_some_and(|text| self.contains(text))
			|| plugin.keywords.iter().any(|keyword| self.contains(keyword))
	}

	/// Filters in source order and stops after `limit` hits.
	pub fn filter<'a, T>(&self, items: &'a [T], limit: usize) -> Vec<T>
	where
		T: 'a + Matchable + Clone,
	{
		items.iter().filter(|item| self.matches(*item)).take(limit).cloned().collect()
	}
}

fn fold(input: &str) -> String {
	input.nfkc().flat_map(char::to_lowercase).collect()
}
