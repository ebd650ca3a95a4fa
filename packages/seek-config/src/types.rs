use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub search: Search,
	pub applications: Applications,
	pub file_history: FileHistory,
	pub notes: Notes,
	#[serde(default)]
	pub plugins: Plugins,
}
impl Config {
	pub fn file_history_path(&self) -> PathBuf {
		resolve_in(&self.service.data_dir, &self.file_history.path)
	}

	pub fn notes_path(&self) -> PathBuf {
		resolve_in(&self.service.data_dir, &self.notes.path)
	}
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
	/// Base directory for relative store paths.
	pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	/// Cap applied to every interactive source.
	#[serde(default = "default_max_results")]
	pub max_results: usize,
}

#[derive(Debug, Deserialize)]
pub struct Applications {
	/// Empty means the platform's default application directories.
	#[serde(default)]
	pub scan_roots: Vec<PathBuf>,
	#[serde(default = "default_max_depth")]
	pub max_depth: usize,
	#[serde(default = "default_max_apps")]
	pub max_apps: usize,
	/// Regular expressions matched against application names and paths. Empty means the
	/// platform's default exclusions.
	#[serde(default)]
	pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FileHistory {
	pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Notes {
	pub path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub struct Plugins {
	/// Plugin ids hidden from the registry.
	#[serde(default)]
	pub disabled: Vec<String>,
}

fn default_max_results() -> usize {
	10
}

fn default_max_depth() -> usize {
	3
}

fn default_max_apps() -> usize {
	2_000
}

fn resolve_in(base: &Path, path: &Path) -> PathBuf {
	if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
