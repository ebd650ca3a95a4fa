use regex::Regex;

use seek_config::Config;
use seek_domain::AppInfo;

use crate::Result;

pub const DEFAULT_MAX_RESULTS: usize = 10;

#[cfg(target_os = "windows")]
const PLATFORM_APP_EXCLUDES: &[&str] =
	&[r"(?i)\bun-?install", r"(?i)^(read ?me|license|release notes)\b"];
#[cfg(target_os = "macos")]
const PLATFORM_APP_EXCLUDES: &[&str] = &[r"(?i)^com\.apple\.", r"/System/Library/CoreServices/"];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const PLATFORM_APP_EXCLUDES: &[&str] = &[r"(?i)^org\.freedesktop\.", r"(?i)^com\.android\."];

#[derive(Debug, Clone)]
pub struct SearchSettings {
	pub max_results: usize,
	/// Applications whose name or path matches any pattern never surface.
	pub app_excludes: Vec<Regex>,
}
impl SearchSettings {
	pub fn from_config(cfg: &Config) -> Result<Self> {
		let app_excludes = if cfg.applications.exclude_patterns.is_empty() {
			compile(PLATFORM_APP_EXCLUDES.iter().copied())?
		} else {
			compile(cfg.applications.exclude_patterns.iter().map(String::as_str))?
		};

		Ok(Self { max_results: cfg.search.max_results, app_excludes })
	}

	pub fn with_app_excludes<'a>(
		mut self,
		patterns: impl IntoIterator<Item = &'a str>,
	) -> Result<Self> {
		self.app_excludes = compile(patterns)?;

		Ok(self)
	}

	pub fn is_excluded(&self, app: &AppInfo) -> bool {
		self.app_excludes
			.iter()
			.any(|pattern| pattern.is_match(&app.name) || pattern.is_match(&app.path))
	}
}
impl Default for SearchSettings {
	fn default() -> Self {
		Self {
			max_results: DEFAULT_MAX_RESULTS,
			app_excludes: PLATFORM_APP_EXCLUDES
				.iter()
				.filter_map(|pattern| Regex::new(pattern).ok())
				.collect(),
		}
	}
}

fn compile<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<Vec<Regex>> {
	Ok(patterns.into_iter().map(Regex::new).collect::<Result<Vec<_>, _>>()?)
}
