use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

/// HTML list element used for both sections of the page.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    /// `<ol>`
    #[value(name = "ol")]
    #[serde(rename = "ol")]
    Ordered,
    /// `<ul>`
    #[default]
    #[value(name = "ul")]
    #[serde(rename = "ul")]
    Unordered,
}

impl ListType {
    pub fn tag(self) -> &'static str {
        match self {
            ListType::Ordered => "ol",
            ListType::Unordered => "ul",
        }
    }
}

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub charset: String,
    pub headline_files: String,
    pub headline_directories: String,
    pub path: PathBuf,
    pub outfile: PathBuf,
    pub exfile: Option<PathBuf>,
    pub list_type: ListType,
    pub include_index: bool,
    pub verbose: bool,
    pub sort: bool,
    pub raw: bool,
}

/// Directory children split by type, in the order they will be rendered.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Buckets {
    pub files: Vec<String>,
    pub directories: Vec<String>,
}
