use std::{
	collections::HashSet,
	ffi::OsStr,
	fs,
	path::{Path, PathBuf},
};

use walkdir::WalkDir;

use seek_domain::AppInfo;

use crate::Result;

/// Walks the platform's application directories for launchable entries.
#[derive(Debug, Clone)]
pub struct AppScanner {
	roots: Vec<PathBuf>,
	max_depth: usize,
	max_apps: usize,
}
impl AppScanner {
	/// Empty `roots` selects the platform defaults.
	pub fn new(roots: Vec<PathBuf>, max_depth: usize, max_apps: usize) -> Self {
		let roots = if roots.is_empty() { default_roots() } else { roots };

		Self { roots, max_depth, max_apps }
	}

	pub async fn scan(&self) -> Result<Vec<AppInfo>> {
		let scanner = self.clone();

		Ok(tokio::task::spawn_blocking(move || scanner.scan_blocking()).await?)
	}

	/// Unique names only; the first root listing a name wins. Stops once `max_apps` unique
	/// entries are found.
	pub fn scan_blocking(&self) -> Vec<AppInfo> {
		let mut seen = HashSet::new();
		let mut apps = Vec::new();

		for root in &self.roots {
			if apps.len() >= self.max_apps {
				break;
			}
			if !root.is_dir() {
				continue;
			}

			self.scan_root(root, &mut seen, &mut apps);
		}

		apps.sort_by(|a, b| a.name.cmp(&b.name));

		tracing::debug!(count = apps.len(), "Application scan finished.");

		apps
	}

	fn scan_root(&self, root: &Path, seen: &mut HashSet<String>, apps: &mut Vec<AppInfo>) {
		// Depth counts directory levels below the root, so files one level deeper are allowed.
		let mut walker = WalkDir::new(root).max_depth(self.max_depth + 1).into_iter();

		while let Some(entry) = walker.next() {
			if apps.len() >= self.max_apps {
				break;
			}

			let entry = match entry {
				Ok(entry) => entry,
				Err(err) => {
					tracing::debug!(error = %err, "Skipping unreadable application entry.");

					continue;
				},
			};
			let path = entry.path();
			let extension =
				path.extension().and_then(OsStr::to_str).map(|ext| ext.to_ascii_lowercase());
			let is_dir = entry.file_type().is_dir();
			let found = match extension.as_deref() {
				Some("app") if is_dir => {
					walker.skip_current_dir();

					app_from_stem(path)
				},
				Some("lnk" | "exe") if !is_dir => app_from_stem(path),
				Some("desktop") if !is_dir => match fs::read_to_string(path) {
					Ok(raw) => parse_desktop_entry(&raw, path),
					Err(err) => {
						tracing::warn!(error = %err, path = %path.display(), "Failed to read desktop entry.");

						None
					},
				},
				_ => None,
			};

			if let Some(app) = found
				&& seen.insert(app.name.clone())
			{
				apps.push(app);
			}
		}
	}
}

fn app_from_stem(path: &Path) -> Option<AppInfo> {
	let name = path.file_stem().and_then(OsStr::to_str)?;

	Some(AppInfo::new(name.to_string(), path.to_string_lossy().into_owned(), None))
}

/// Reads the `[Desktop Entry]` group of a freedesktop `.desktop` file. Hidden entries and
/// entries without a name yield nothing.
pub fn parse_desktop_entry(raw: &str, path: &Path) -> Option<AppInfo> {
	let mut in_entry = false;
	let mut name = None;
	let mut comment = None;

	for line in raw.lines() {
		let line = line.trim();

		if line.starts_with('[') {
			in_entry = line == "[Desktop Entry]";

			continue;
		}
		if !in_entry || line.starts_with('#') {
			continue;
		}

		let Some((key, value)) = line.split_once('=') else {
			continue;
		};
		let value = value.trim();

		match key.trim() {
			"Name" => name = Some(value.to_string()),
			"Comment" => comment = Some(value.to_string()),
			"NoDisplay" | "Hidden" if value.eq_ignore_ascii_case("true") => return None,
			"Type" if value != "Application" => return None,
			_ => {},
		}
	}

	let Some(name) = name.filter(|name| !name.is_empty()) else {
		tracing::warn!(path = %path.display(), "Desktop entry has no name.");

		return None;
	};

	Some(AppInfo::new(name, path.to_string_lossy().into_owned(), comment))
}

#[cfg(target_os = "windows")]
fn default_roots() -> Vec<PathBuf> {
	["APPDATA", "PROGRAMDATA"]
		.into_iter()
		.filter_map(|var| std::env::var_os(var))
		.map(|base| PathBuf::from(base).join("Microsoft/Windows/Start Menu/Programs"))
		.collect()
}

#[cfg(target_os = "macos")]
fn default_roots() -> Vec<PathBuf> {
	let mut roots = vec![PathBuf::from("/Applications"), PathBuf::from("/System/Applications")];

	roots.extend(dirs::home_dir().map(|home| home.join("Applications")));

	roots
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn default_roots() -> Vec<PathBuf> {
	let mut roots = vec![
		PathBuf::from("/usr/share/applications"),
		PathBuf::from("/usr/local/share/applications"),
		PathBuf::from("/var/lib/flatpak/exports/share/applications"),
	];

	roots.extend(dirs::data_dir().map(|data| data.join("applications")));

	roots
}
