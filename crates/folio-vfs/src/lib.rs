//! folio-vfs: the simulated filesystem behind the portfolio terminal.
//!
//! The tree is a fixed, finite table: a handful of named directories under
//! root, each with an ordered entry list, plus literal file contents. There
//! is no real I/O and nothing is ever created, renamed, or removed after
//! construction. Entry names ending in `/` denote subdirectories.
//!
//! The hierarchy is intentionally flat: directory names look nested but
//! `..` always resolves to root. `resolve`/`rooted` encode exactly that
//! model instead of general path-stack semantics.

use std::collections::BTreeMap;

/// A fixed in-memory site filesystem.
#[derive(Debug, Default)]
pub struct SiteFs {
    /// Normalized directory path -> ordered entry names (`foo/` = subdir).
    dirs: BTreeMap<String, Vec<String>>,
    /// Normalized file path -> literal content lines.
    files: BTreeMap<String, Vec<String>>,
}

impl SiteFs {
    /// Create an empty filesystem containing only the root directory.
    pub fn new() -> Self {
        let mut dirs = BTreeMap::new();
        dirs.insert("/".to_string(), Vec::new());
        Self {
            dirs,
            files: BTreeMap::new(),
        }
    }

    /// Register a directory with its ordered entry list.
    ///
    /// Replaces any existing listing for the same path.
    pub fn add_dir(&mut self, path: &str, entries: &[&str]) {
        self.dirs.insert(
            path.to_string(),
            entries.iter().map(|e| (*e).to_string()).collect(),
        );
    }

    /// Register a file with its literal content lines.
    pub fn add_file(&mut self, path: &str, lines: Vec<String>) {
        self.files.insert(path.to_string(), lines);
    }

    /// Whether `path` names one of the fixed directories.
    pub fn is_dir(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }

    /// Ordered entry list of a directory, or `None` for an unknown path.
    pub fn entries(&self, path: &str) -> Option<&[String]> {
        self.dirs.get(path).map(Vec::as_slice)
    }

    /// Literal lines of a file, or `None` for an unknown path.
    pub fn file_lines(&self, path: &str) -> Option<&[String]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Names of the top-level directories (no trailing slash, root order).
    ///
    /// This is the candidate set for `cd`/`ls` tab-completion.
    pub fn dir_names(&self) -> Vec<String> {
        self.entries("/")
            .unwrap_or(&[])
            .iter()
            .filter_map(|e| e.strip_suffix('/'))
            .map(str::to_string)
            .collect()
    }

    /// File names (no subdirectories) listed in `dir`, in listing order.
    ///
    /// This is the candidate set for `cat` tab-completion.
    pub fn files_in(&self, dir: &str) -> Vec<String> {
        self.entries(dir)
            .unwrap_or(&[])
            .iter()
            .filter(|e| !e.ends_with('/'))
            .cloned()
            .collect()
    }
}

/// Resolve a possibly-relative path against the current directory.
///
/// Flat-model rules: absolute paths pass through, `..` is always root, and a
/// relative name concatenates onto `cwd` (root-relative).
pub fn resolve(cwd: &str, input: &str) -> String {
    if input == ".." {
        return "/".to_string();
    }
    if input.starts_with('/') {
        return input.to_string();
    }
    if cwd == "/" {
        format!("/{input}")
    } else {
        format!("{cwd}/{input}")
    }
}

/// Normalize a `cd` target to absolute form.
///
/// Empty, `~`, `/`, and `..` all mean root; anything else gets a leading `/`
/// (the hierarchy is one level deep, so `cd` targets are always top-level).
pub fn rooted(input: &str) -> String {
    match input {
        "" | "~" | "/" | ".." => "/".to_string(),
        other if other.starts_with('/') => other.to_string(),
        other => format!("/{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_fs() -> SiteFs {
        let mut fs = SiteFs::new();
        fs.add_dir("/", &["projects/", "goals/", "notes.txt", "README.md"]);
        fs.add_dir("/projects", &["portfolio.rs", "demos/"]);
        fs.add_dir("/goals", &["completed.json"]);
        fs.add_file("/README.md", vec!["# Hello".into(), "".into(), "world".into()]);
        fs.add_file("/projects/portfolio.rs", vec!["fn main() {}".into()]);
        fs
    }

    #[test]
    fn new_has_only_root() {
        let fs = SiteFs::new();
        assert!(fs.is_dir("/"));
        assert_eq!(fs.entries("/").unwrap().len(), 0);
        assert!(!fs.is_dir("/anything"));
    }

    #[test]
    fn entries_preserve_order() {
        let fs = sample_fs();
        let entries = fs.entries("/").unwrap();
        assert_eq!(entries, &["projects/", "goals/", "notes.txt", "README.md"]);
    }

    #[test]
    fn unknown_dir_is_none() {
        let fs = sample_fs();
        assert!(fs.entries("/nope").is_none());
        assert!(!fs.is_dir("/nope"));
    }

    #[test]
    fn file_lines_literal() {
        let fs = sample_fs();
        let lines = fs.file_lines("/README.md").unwrap();
        assert_eq!(lines, &["# Hello", "", "world"]);
    }

    #[test]
    fn file_lines_stable_across_reads() {
        let fs = sample_fs();
        let first = fs.file_lines("/README.md").unwrap().to_vec();
        let second = fs.file_lines("/README.md").unwrap().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn dir_names_strips_slashes() {
        let fs = sample_fs();
        assert_eq!(fs.dir_names(), vec!["projects", "goals"]);
    }

    #[test]
    fn files_in_skips_subdirs() {
        let fs = sample_fs();
        assert_eq!(fs.files_in("/"), vec!["notes.txt", "README.md"]);
        assert_eq!(fs.files_in("/projects"), vec!["portfolio.rs"]);
        assert!(fs.files_in("/unknown").is_empty());
    }

    #[test]
    fn resolve_absolute_passthrough() {
        assert_eq!(resolve("/projects", "/goals"), "/goals");
    }

    #[test]
    fn resolve_relative_at_root() {
        assert_eq!(resolve("/", "projects"), "/projects");
    }

    #[test]
    fn resolve_relative_in_subdir() {
        assert_eq!(resolve("/projects", "portfolio.rs"), "/projects/portfolio.rs");
    }

    #[test]
    fn resolve_dotdot_is_root() {
        assert_eq!(resolve("/projects", ".."), "/");
        assert_eq!(resolve("/", ".."), "/");
    }

    #[test]
    fn rooted_aliases_for_root() {
        for input in ["", "~", "/", ".."] {
            assert_eq!(rooted(input), "/");
        }
    }

    #[test]
    fn rooted_prefixes_bare_names() {
        assert_eq!(rooted("projects"), "/projects");
        assert_eq!(rooted("/projects"), "/projects");
    }

    proptest! {
        /// Resolution always yields an absolute path.
        #[test]
        fn resolve_is_absolute(name in "[a-z0-9._-]{1,12}") {
            for cwd in ["/", "/projects", "/goals"] {
                prop_assert!(resolve(cwd, &name).starts_with('/'));
            }
        }

        /// `rooted` is idempotent: normalizing twice changes nothing.
        #[test]
        fn rooted_idempotent(name in "[a-z0-9._-]{1,12}") {
            let once = rooted(&name);
            prop_assert_eq!(rooted(&once), once.clone());
            prop_assert!(once.starts_with('/'));
        }
    }
}
