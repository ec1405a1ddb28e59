use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to open directory '{}'", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to access file '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load presets from '{}': {reason}", path.display())]
    PresetFile { path: PathBuf, reason: String },

    #[error("preset '{0}' is not defined")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;
