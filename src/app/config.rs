use crate::app::cli::Cli;
use crate::app::error::{IndexError, Result};
use crate::app::models::{ListType, RuntimeConfig};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Server";
pub const DEFAULT_CHARSET: &str = "utf-8";
pub const DEFAULT_HEADLINE_FILES: &str = "Downloadable files";
pub const DEFAULT_HEADLINE_DIRECTORIES: &str = "Browseable directories";
pub const DEFAULT_OUTFILE: &str = "index.html";

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig {
    pub title: Option<String>,
    pub charset: Option<String>,
    pub headline_files: Option<String>,
    pub headline_directories: Option<String>,
    pub list_type: Option<ListType>,
    pub outfile: Option<PathBuf>,
    pub exfile: Option<PathBuf>,
    #[serde(default)]
    pub include_index: bool,
    #[serde(default)]
    pub sort: bool,
    #[serde(default)]
    pub raw: bool,
}

/// `~/.config/rhindex/presets.toml`, if a home directory is known.
pub fn presets_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("rhindex").join("presets.toml"))
}

/// Reads the presets file. A missing file means no presets.
pub fn load_presets_file(path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(path).map_err(|e| IndexError::PresetFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    parse_presets(&content).map_err(|reason| IndexError::PresetFile {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_presets(content: &str) -> std::result::Result<HashMap<String, PresetConfig>, String> {
    let parsed: PresetsFile = toml::from_str(content).map_err(|e| e.message().to_string())?;
    Ok(parsed.presets)
}

/// Merges CLI flags over the selected preset over the built-in defaults.
///
/// The preset is `--preset` when given, otherwise the one named after the
/// target directory. Switches are OR-ed: a preset can turn `sort` on but the
/// command line cannot turn it back off.
pub fn resolve_config(
    cli: Cli,
    current_dir: PathBuf,
    presets: &HashMap<String, PresetConfig>,
) -> Result<RuntimeConfig> {
    let path = cli.path.unwrap_or(current_dir);

    let preset = match cli.preset.as_deref() {
        Some(name) => presets
            .get(name)
            .cloned()
            .ok_or_else(|| IndexError::UnknownPreset(name.to_string()))?,
        None => directory_name(&path)
            .and_then(|name| presets.get(&name))
            .cloned()
            .unwrap_or_default(),
    };

    Ok(RuntimeConfig {
        title: pick(cli.title, preset.title, DEFAULT_TITLE),
        charset: pick(cli.charset, preset.charset, DEFAULT_CHARSET),
        headline_files: pick(cli.headline_files, preset.headline_files, DEFAULT_HEADLINE_FILES),
        headline_directories: pick(
            cli.headline_directories,
            preset.headline_directories,
            DEFAULT_HEADLINE_DIRECTORIES,
        ),
        outfile: cli
            .outfile
            .or(preset.outfile)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTFILE)),
        exfile: cli.exfile.or(preset.exfile),
        list_type: cli.list_type.or(preset.list_type).unwrap_or_default(),
        include_index: cli.include_index || preset.include_index,
        sort: cli.sort || preset.sort,
        raw: cli.raw || preset.raw,
        verbose: cli.verbose,
        path,
    })
}

fn pick(cli: Option<String>, preset: Option<String>, default: &str) -> String {
    cli.or(preset).unwrap_or_else(|| default.to_string())
}

/// Last component of the target, resolving `.` and friends first.
fn directory_name(path: &Path) -> Option<String> {
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    resolved
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}
