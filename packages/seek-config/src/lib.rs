mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Applications, Config, FileHistory, Notes, Plugins, Search, Service};

use std::{fs, path::Path};

use regex::Regex;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw).map_err(|err| match err {
		Error::ParseConfig { source, .. } => {
			Error::ParseConfig { path: path.to_path_buf(), source }
		},
		other => other,
	})
}

pub fn parse(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: Default::default(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.search.max_results == 0 {
		return Err(Error::Validation {
			message: "search.max_results must be greater than zero.".to_string(),
		});
	}
	if cfg.applications.max_depth == 0 {
		return Err(Error::Validation {
			message: "applications.max_depth must be greater than zero.".to_string(),
		});
	}
	if cfg.applications.max_apps == 0 {
		return Err(Error::Validation {
			message: "applications.max_apps must be greater than zero.".to_string(),
		});
	}

	for pattern in &cfg.applications.exclude_patterns {
		if let Err(err) = Regex::new(pattern) {
			return Err(Error::Validation {
				message: format!("applications.exclude_patterns entry {pattern:?} is invalid: {err}"),
			});
		}
	}

	for (label, path) in
		[("file_history.path", &cfg.file_history.path), ("notes.path", &cfg.notes.path)]
	{
		if path.as_os_str().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.applications.exclude_patterns.retain(|pattern| !pattern.trim().is_empty());
	cfg.applications.scan_roots.retain(|root| !root.as_os_str().is_empty());
	cfg.plugins.disabled.retain(|id| !id.trim().is_empty());

	for id in &mut cfg.plugins.disabled {
		*id = id.trim().to_string();
	}
}
