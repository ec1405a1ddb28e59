use crate::app::error::{IndexError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Reads the exclude list, one entry name per line.
///
/// Lines are raw bytes split on `\n` (a trailing `\r` is dropped), so names
/// in any encoding match directory entries byte for byte. Nothing else is
/// trimmed: a name with stray whitespace will not match anything.
pub fn read_exclude_file(path: &Path) -> Result<Vec<OsString>> {
    let data = fs::read(path).map_err(|source| IndexError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines: Vec<&[u8]> = data.split(|b| *b == b'\n').collect();
    // text after the last terminator is a line only if it is non-empty
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let exclude: Vec<OsString> = lines
        .into_iter()
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .map(name_from_bytes)
        .collect();

    if exclude.is_empty() {
        log::warn!("the specified exclude file is empty!");
    }

    Ok(exclude)
}

#[cfg(unix)]
fn name_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
fn name_from_bytes(bytes: &[u8]) -> OsString {
    String::from_utf8_lossy(bytes).into_owned().into()
}

/// Removes one instance of every excluded name from `content`.
///
/// Returns the excluded names that matched nothing, in their original order.
pub fn remove_excluded(content: &mut Vec<OsString>, exclude: Vec<OsString>) -> Vec<OsString> {
    let mut unmatched = Vec::new();

    for name in exclude {
        match content.iter().position(|entry| *entry == name) {
            Some(idx) => {
                content.remove(idx);
            }
            None => unmatched.push(name),
        }
    }

    unmatched
}

/// Reads `exfile` and drops its names from `content`, warning about leftovers.
pub fn apply_exclude_file(content: &mut Vec<OsString>, exfile: &Path) -> Result<()> {
    let exclude = read_exclude_file(exfile)?;
    if exclude.is_empty() {
        return Ok(());
    }

    let unmatched = remove_excluded(content, exclude);
    if !unmatched.is_empty() {
        log::warn!("not all files listed in '{}' exist", exfile.display());
        for name in &unmatched {
            log::debug!("no entry named '{}'", name.to_string_lossy());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<OsString> {
        names.iter().map(|s| OsString::from(*s)).collect()
    }

    #[test]
    fn removes_matches_and_reports_leftovers() {
        let mut content = strings(&["a", "b", "c"]);
        let unmatched = remove_excluded(&mut content, strings(&["b", "d"]));
        assert_eq!(content, vec!["a", "c"]);
        assert_eq!(unmatched, vec!["d"]);
    }

    #[test]
    fn removes_one_instance_per_exclude_line() {
        let mut content = strings(&["dup", "x", "dup"]);
        let unmatched = remove_excluded(&mut content, strings(&["dup"]));
        assert_eq!(content, vec!["x", "dup"]);
        assert!(unmatched.is_empty());
    }

    #[test]
    fn matching_is_exact() {
        let mut content = strings(&["notes.txt"]);
        let unmatched = remove_excluded(&mut content, strings(&["notes.txt ", "*.txt", "NOTES.TXT"]));
        assert_eq!(content, vec!["notes.txt"]);
        assert_eq!(unmatched.len(), 3);
    }

    #[test]
    fn reads_one_name_per_line_untrimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exclude");
        fs::write(&path, "secret.txt\n tmp\r\nlast").unwrap();
        let exclude = read_exclude_file(&path).unwrap();
        assert_eq!(exclude, vec!["secret.txt", " tmp", "last"]);
    }

    #[test]
    fn blank_lines_inside_the_file_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exclude");
        fs::write(&path, "a\n\nb\n").unwrap();
        assert_eq!(read_exclude_file(&path).unwrap(), vec!["a", "", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn latin1_line_matches_entry_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exclude");
        fs::write(&path, b"a.txt\ncaf\xe9.txt\n").unwrap();

        let exclude = read_exclude_file(&path).unwrap();
        assert_eq!(exclude.len(), 2);
        assert_eq!(exclude[1].as_bytes(), b"caf\xe9.txt");

        let latin1 = std::ffi::OsStr::from_bytes(b"caf\xe9.txt").to_os_string();
        let mut content = vec![OsString::from("a.txt"), latin1, OsString::from("keep.txt")];
        let unmatched = remove_excluded(&mut content, exclude);
        assert!(unmatched.is_empty());
        assert_eq!(content, vec!["keep.txt"]);
    }

    #[test]
    fn empty_file_yields_no_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exclude");
        fs::write(&path, "").unwrap();
        assert!(read_exclude_file(&path).unwrap().is_empty());

        let mut content = strings(&["a"]);
        apply_exclude_file(&mut content, &path).unwrap();
        assert_eq!(content, vec!["a"]);
    }

    #[test]
    fn missing_file_is_an_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");
        let err = read_exclude_file(&path).unwrap_err();
        assert!(matches!(err, IndexError::FileAccess { path: ref p, .. } if *p == path));
    }

    #[test]
    fn apply_filters_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exclude");
        fs::write(&path, "b\nd\n").unwrap();
        let mut content = strings(&["a", "b", "c"]);
        apply_exclude_file(&mut content, &path).unwrap();
        assert_eq!(content, vec!["a", "c"]);
    }
}
