use std::{ffi::OsStr, path::Path};

use tokio::fs;

use seek_domain::IconHandle;

/// Maps paths to freedesktop theme icon names by extension.
#[derive(Debug, Clone, Default)]
pub struct ThemeIconResolver;
impl ThemeIconResolver {
	pub async fn icon_for(&self, path: &str) -> Option<IconHandle> {
		if fs::metadata(path).await.is_ok_and(|meta| meta.is_dir()) {
			return Some(IconHandle("folder".to_string()));
		}

		self.icon_for_extension(path)
	}

	/// Theme icon for the file type alone, without touching the filesystem.
	pub fn icon_for_extension(&self, path: &str) -> Option<IconHandle> {
		let extension = Path::new(path).extension().and_then(OsStr::to_str)?.to_ascii_lowercase();
		let name = match extension.as_str() {
			"txt" | "md" | "log" | "csv" => "text-x-generic",
			"rs" | "py" | "js" | "ts" | "c" | "cpp" | "h" | "go" | "java" | "sh" | "toml"
			| "json" | "yaml" | "yml" => "text-x-script",
			"pdf" => "application-pdf",
			"doc" | "docx" | "odt" | "rtf" => "x-office-document",
			"xls" | "xlsx" | "ods" => "x-office-spreadsheet",
			"ppt" | "pptx" | "odp" => "x-office-presentation",
			"png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp" => "image-x-generic",
			"mp3" | "flac" | "wav" | "ogg" | "m4a" => "audio-x-generic",
			"mp4" | "mkv" | "avi" | "mov" | "webm" => "video-x-generic",
			"zip" | "tar" | "gz" | "xz" | "7z" | "rar" => "package-x-generic",
			"exe" | "msi" | "appimage" | "lnk" | "desktop" => "application-x-executable",
			"html" | "htm" => "text-html",
			_ => return None,
		};

		Some(IconHandle(name.to_string()))
	}
}
