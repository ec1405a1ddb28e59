use crate::app::models::ListType;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Create an index.html of a directory so it can be served as-is",
    long_about = "Create an index.html of the specified path (the calling directory by default) \
so its files and subdirectories are simply available from a static file server.\n\n\
Names listed in the file given with --exfile are left out of the index. \
The exclude file itself is only left out if it lists its own name."
)]
pub struct Cli {
    /// The content of the title tag
    #[arg(short, long)]
    pub title: Option<String>,

    /// The charset to use in the meta tag
    #[arg(short, long)]
    pub charset: Option<String>,

    /// The headline of the files section
    #[arg(short = 'f', long)]
    pub headline_files: Option<String>,

    /// The headline of the directories section
    #[arg(short = 'd', long)]
    pub headline_directories: Option<String>,

    /// The path to index (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Location of the resulting file (default: index.html)
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// A file listing names, one per line, to leave out of the index
    #[arg(short, long)]
    pub exfile: Option<PathBuf>,

    /// The list element to use (default: ul)
    #[arg(short, long, value_enum)]
    pub list_type: Option<ListType>,

    /// Include the index file itself in the list of files
    #[arg(short, long)]
    pub include_index: bool,

    /// Sort the files and directories sections alphabetically
    #[arg(short, long)]
    pub sort: bool,

    /// Print what's currently going on
    #[arg(short, long)]
    pub verbose: bool,

    /// Write names, title and headlines without HTML escaping
    #[arg(short, long)]
    pub raw: bool,

    /// Use a named set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_flags_map_to_fields() {
        let cli = Cli::try_parse_from([
            "rhindex", "-t", "Files", "-l", "ol", "-s", "-i", "-e", "skip.txt", "-o", "out.html",
        ])
        .unwrap();
        assert_eq!(cli.title.as_deref(), Some("Files"));
        assert_eq!(cli.list_type, Some(ListType::Ordered));
        assert!(cli.sort);
        assert!(cli.include_index);
        assert!(!cli.verbose);
        assert_eq!(cli.exfile, Some(PathBuf::from("skip.txt")));
        assert_eq!(cli.outfile, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn sort_does_not_imply_verbose() {
        let cli = Cli::try_parse_from(["rhindex", "--sort"]).unwrap();
        assert!(cli.sort);
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_unknown_list_type() {
        let err = Cli::try_parse_from(["rhindex", "--list-type", "dl"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
        let msg = err.to_string();
        assert!(msg.contains("ol"));
        assert!(msg.contains("ul"));
    }

    #[test]
    fn long_headline_flags() {
        let cli = Cli::try_parse_from([
            "rhindex",
            "--headline-files",
            "Files",
            "--headline-directories",
            "Dirs",
        ])
        .unwrap();
        assert_eq!(cli.headline_files.as_deref(), Some("Files"));
        assert_eq!(cli.headline_directories.as_deref(), Some("Dirs"));
    }
}
