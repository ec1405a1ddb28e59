use crate::app::error::{IndexError, Result};
use crate::app::models::Buckets;
use std::ffi::{OsStr, OsString};
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

/// An opened target directory whose entries have not been read yet.
pub struct Scanner {
    root: PathBuf,
    dir: ReadDir,
}

impl Scanner {
    /// Opens `root` for listing. Fails if it is missing, unreadable or not a directory.
    pub fn open(root: &Path) -> Result<Self> {
        let dir = fs::read_dir(root).map_err(|source| IndexError::DirectoryAccess {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            dir,
        })
    }

    /// Consumes the directory handle and returns the child names in read order.
    ///
    /// Names are kept as the platform gives them so entries that are not
    /// valid UTF-8 can still be stat-ed. `skip` is the output file's name,
    /// left out unless the caller wants the index to list itself.
    pub fn read_content(self, skip: Option<&OsStr>) -> Result<Vec<OsString>> {
        let mut content = Vec::new();

        for entry in self.dir {
            let entry = entry.map_err(|source| IndexError::DirectoryAccess {
                path: self.root.clone(),
                source,
            })?;
            let name = entry.file_name();

            // not produced by read_dir on any supported platform
            if name == "." || name == ".." {
                continue;
            }
            if skip == Some(name.as_os_str()) {
                log::debug!("skipping output file '{}'", name.to_string_lossy());
                continue;
            }
            content.push(name);
        }

        Ok(content)
    }
}

/// Splits names into files and directories by their type on disk.
///
/// Symlinks are not followed. Anything that is not a regular file or a
/// directory is dropped with a warning. Bucketed names are converted for
/// display; invalid UTF-8 sequences become U+FFFD.
pub fn classify(root: &Path, content: Vec<OsString>) -> Buckets {
    let mut buckets = Buckets::default();

    for name in content {
        let object = root.join(&name);
        let display = || name.to_string_lossy().into_owned();
        match fs::symlink_metadata(&object) {
            Ok(meta) if meta.is_dir() => buckets.directories.push(display()),
            Ok(meta) if meta.is_file() => buckets.files.push(display()),
            _ => log::warn!(
                "{} could not be identified as file or directory",
                object.display()
            ),
        }
    }

    buckets
}

pub fn sort_buckets(buckets: &mut Buckets) {
    log::info!("sorting files and directories alphabetically...");
    buckets.files.sort();
    buckets.directories.sort();
}
