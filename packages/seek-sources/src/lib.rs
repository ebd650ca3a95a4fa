pub mod applications;
pub mod folders;
pub mod history;
pub mod icons;
pub mod notes;
pub mod paths;

mod error;

pub use applications::AppScanner;
pub use error::{Error, Result};
pub use folders::SystemFolders;
pub use history::HistoryFile;
pub use icons::ThemeIconResolver;
pub use notes::MemoBook;
pub use paths::FsPathResolver;
