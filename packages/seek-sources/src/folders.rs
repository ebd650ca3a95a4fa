use std::path::PathBuf;

use seek_domain::SystemFolderItem;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderKind {
	Home,
	Desktop,
	Documents,
	Downloads,
	Pictures,
	Music,
	Videos,
	RecycleBin,
	ControlPanel,
	Settings,
}

/// Localized name, English name, kind.
const SPECIAL_FOLDERS: &[(&str, &str, FolderKind)] = &[
	("主文件夹", "Home", FolderKind::Home),
	("桌面", "Desktop", FolderKind::Desktop),
	("文档", "Documents", FolderKind::Documents),
	("下载", "Downloads", FolderKind::Downloads),
	("图片", "Pictures", FolderKind::Pictures),
	("音乐", "Music", FolderKind::Music),
	("视频", "Videos", FolderKind::Videos),
	("回收站", "Recycle Bin", FolderKind::RecycleBin),
	("控制面板", "Control Panel", FolderKind::ControlPanel),
	("设置", "Settings", FolderKind::Settings),
];

/// The catalogue of well-known folders available on this machine.
#[derive(Debug, Clone, Default)]
pub struct SystemFolders;
impl SystemFolders {
	pub async fn list(&self) -> Result<Vec<SystemFolderItem>> {
		Ok(tokio::task::spawn_blocking(list_system_folders).await?)
	}
}

pub fn list_system_folders() -> Vec<SystemFolderItem> {
	let mut folders = Vec::with_capacity(SPECIAL_FOLDERS.len());

	for (localized, english, kind) in SPECIAL_FOLDERS {
		let Some(path) = resolve(*kind) else {
			tracing::debug!(folder = english, "Special folder is unavailable on this system.");

			continue;
		};

		folders.push(SystemFolderItem::new(localized, format!("{localized} ({english})"), path));
	}

	folders
}

fn resolve(kind: FolderKind) -> Option<String> {
	let dir = match kind {
		FolderKind::Home => dirs::home_dir(),
		FolderKind::Desktop => dirs::desktop_dir(),
		FolderKind::Documents => dirs::document_dir(),
		FolderKind::Downloads => dirs::download_dir(),
		FolderKind::Pictures => dirs::picture_dir(),
		FolderKind::Music => dirs::audio_dir(),
		FolderKind::Videos => dirs::video_dir(),
		FolderKind::RecycleBin | FolderKind::ControlPanel | FolderKind::Settings => {
			return virtual_folder(kind);
		},
	};

	existing(dir?)
}

fn existing(path: PathBuf) -> Option<String> {
	path.is_dir().then(|| path.to_string_lossy().into_owned())
}

#[cfg(target_os = "windows")]
fn virtual_folder(kind: FolderKind) -> Option<String> {
	let target = match kind {
		FolderKind::RecycleBin => "::{645FF040-5081-101B-9F08-00AA002F954E}",
		FolderKind::ControlPanel => "control",
		FolderKind::Settings => "ms-settings:",
		_ => return None,
	};

	Some(target.to_string())
}

#[cfg(not(target_os = "windows"))]
fn virtual_folder(_kind: FolderKind) -> Option<String> {
	None
}
