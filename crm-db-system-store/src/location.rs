use std::path::{Path, PathBuf};

// file hierarchy
// home
// - Desktop
//   - CRM Data
//     - database.db

pub const DEFAULT_DB_SUBDIRS: [&str; 2] = ["Desktop", "CRM Data"];
pub const DEFAULT_DB_FILE_NAME: &str = "database.db";

/// Where the database blob lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbLocation {
    pub folder: PathBuf,
    pub file_name: String,
}

impl DbLocation {
    pub fn new(folder: PathBuf, file_name: String) -> Self {
        Self { folder, file_name }
    }

    pub fn from_home(home: &Path) -> Self {
        let mut folder = home.to_path_buf();
        for dir in DEFAULT_DB_SUBDIRS {
            folder.push(dir);
        }
        Self {
            folder,
            file_name: DEFAULT_DB_FILE_NAME.to_string(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.folder.join(&self.file_name)
    }
}

/// `HOME`, then `USERPROFILE`. Falls back to the empty path, which leaves the
/// default location relative to the working directory.
pub fn home_dir_from_env() -> PathBuf {
    home_dir_from_vars(std::env::var_os("HOME"), std::env::var_os("USERPROFILE"))
}

fn home_dir_from_vars(
    home: Option<std::ffi::OsString>,
    user_profile: Option<std::ffi::OsString>,
) -> PathBuf {
    home.filter(|v| !v.is_empty())
        .or(user_profile.filter(|v| !v.is_empty()))
        .map(PathBuf::from)
        .unwrap_or_default()
}
