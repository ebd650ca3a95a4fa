use std::sync::Arc;

use seek_domain::{PluginDescriptor, QueryMatcher};

/// The static plugin catalogue. Searching it has no side effects.
#[derive(Debug, Clone)]
pub struct PluginRegistry {
	descriptors: Arc<[PluginDescriptor]>,
}
impl PluginRegistry {
	pub fn new(descriptors: Vec<PluginDescriptor>) -> Self {
		Self { descriptors: descriptors.into() }
	}

	pub fn builtin() -> Self {
		Self::new(vec![
			PluginDescriptor::new(
				"memo",
				"Memo Center",
				Some("Capture and browse quick notes"),
				&["memo", "note", "notes", "beiwanglu", "bwl"],
			),
			PluginDescriptor::new(
				"clipboard",
				"Clipboard History",
				Some("Recently copied text and images"),
				&["clipboard", "paste", "jianqieban", "jqb"],
			),
			PluginDescriptor::new(
				"translation",
				"Translate",
				Some("Translate the selected text"),
				&["translate", "fanyi", "fy"],
			),
			PluginDescriptor::new(
				"wordbook",
				"Word Book",
				Some("Saved vocabulary with review"),
				&["word", "vocabulary", "danci", "dc"],
			),
			PluginDescriptor::new(
				"replay",
				"Macro Replay",
				Some("Record and replay keyboard and mouse input"),
				&["record", "replay", "macro", "luzhi"],
			),
			PluginDescriptor::new(
				"calculator",
				"Calculator",
				Some("Evaluate arithmetic expressions"),
				&["calc", "math", "jisuan"],
			),
			PluginDescriptor::new(
				"web_search",
				"Web Search",
				Some("Search the web with a configured engine"),
				&["web", "search", "google", "bing"],
			),
			PluginDescriptor::new(
				"app_center",
				"App Center",
				Some("Browse every installed plugin"),
				&["apps", "plugins", "center"],
			),
			PluginDescriptor::new(
				"settings",
				"Settings",
				None,
				&["settings", "preferences", "shezhi"],
			),
		])
	}

	/// Drops descriptors whose id is listed.
	pub fn without(self, disabled: &[String]) -> Self {
		if disabled.is_empty() {
			return self;
		}

		Self::new(
			self.descriptors
				.iter()
				.filter(|plugin| !disabled.iter().any(|id| id == &plugin.id))
				.cloned()
				.collect(),
		)
	}

	pub fn descriptors(&self) -> &[PluginDescriptor] {
		&self.descriptors
	}

	pub fn search(&self, query: &str) -> Vec<PluginDescriptor> {
		let matcher = QueryMatcher::new(query);

		if matcher.is_blank() {
			return Vec::new();
		}

		self.descriptors.iter().filter(|plugin| matcher.matches_plugin(plugin)).cloned().collect()
	}
}
impl Default for PluginRegistry {
	fn default() -> Self {
		Self::builtin()
	}
}
