use crate::app::error::{IndexError, Result};
use crate::app::models::{Buckets, RuntimeConfig};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct OutputGenerator<'a> {
    config: &'a RuntimeConfig,
}

impl<'a> OutputGenerator<'a> {
    pub fn new(config: &'a RuntimeConfig) -> Self {
        Self { config }
    }

    /// Builds the complete index page.
    pub fn render(&self, buckets: &Buckets) -> String {
        let cfg = self.config;
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str(&format!("  <title>{}</title>\n", self.text(&cfg.title)));
        out.push_str(&format!("  <meta charset=\"{}\"/>\n", self.text(&cfg.charset)));
        out.push_str("</head>\n<body>\n");
        out.push_str(&self.section(&cfg.headline_files, &buckets.files, true));
        out.push_str(&self.section(&cfg.headline_directories, &buckets.directories, false));
        out.push_str("</body>\n</html>\n");
        out
    }

    fn section(&self, headline: &str, names: &[String], download: bool) -> String {
        let tag = self.config.list_type.tag();
        let mut out = format!("  <h1>{}</h1>\n<{}>\n", self.text(headline), tag);

        for name in names {
            let name = self.text(name);
            let attr = if download { " download" } else { "" };
            out.push_str(&format!("<li><a href=\"{}\"{}>{}</a></li>\n", name, attr, name));
        }

        out.push_str(&format!("</{}>\n", tag));
        out
    }

    fn text<'s>(&self, s: &'s str) -> Cow<'s, str> {
        if self.config.raw {
            Cow::Borrowed(s)
        } else {
            escape_html(s)
        }
    }
}

/// Escapes the characters that would break element text or a quoted attribute.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Truncating writer for the output file, created before the page is built.
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| IndexError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn write_document(mut self, document: &str) -> Result<()> {
        log::info!("writing generated file to {}", self.path.display());
        self.writer
            .write_all(document.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|source| IndexError::FileAccess {
                path: self.path.clone(),
                source,
            })
    }
}
