//! Repository-to-URL mapping.
//!
//! The mapping file has one repository per line:
//!
//! ```text
//! fedora   http://mirror.example.org/fedora/  http://backup.example.org/fedora
//! updates  http://mirror.example.org/updates
//! ```
//!
//! The first token names the repository, every following token is a base URL.
//! A repository may appear on several lines; its URLs accumulate.

use anyhow::{Context, Result};
use log::debug;
use std::collections::HashMap;
use std::path::Path;

use crate::runtime::Runtime;

/// Separator between URL path segments.
pub const URL_SEP: char = '/';

/// In-memory mapping from repository name to its base URLs.
///
/// URLs are kept in first-seen order without duplicates and never end with
/// [`URL_SEP`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RepoMap {
    repos: HashMap<String, Vec<String>>,
}

impl RepoMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a mapping file.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime + ?Sized>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read repository mapping file {:?}", path))?;
        Ok(Self::parse(&content))
    }

    /// Parse mapping text. Blank lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut map = Self::new();

        for line in content.lines() {
            let mut tokens = line.split_ascii_whitespace();
            let Some(repo) = tokens.next() else {
                debug!("Empty line encountered!");
                continue;
            };

            let urls: Vec<&str> = tokens.collect();
            debug!("Found for repository {} URL's {:?}", repo, urls);
            map.insert(repo, urls);
        }

        map
    }

    /// Bind additional base URLs to `repo`, keeping any already bound.
    ///
    /// Trailing separators are stripped and URLs the repo already has are
    /// ignored.
    pub fn insert<I, S>(&mut self, repo: &str, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bound = self.repos.entry(repo.to_string()).or_default();
        for url in urls {
            let url = url.as_ref().trim_end_matches(URL_SEP);
            if !bound.iter().any(|u| u == url) {
                bound.push(url.to_string());
            }
        }
    }

    /// Base URLs bound to `repo`, or `None` if the repo is unknown.
    pub fn urls(&self, repo: &str) -> Option<&[String]> {
        self.repos.get(repo).map(Vec::as_slice)
    }

    /// Number of repositories.
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    #[test]
    fn test_parse_strips_trailing_separator() {
        let map = RepoMap::parse("repo1 http://a/ http://b\n");
        assert_eq!(
            map.urls("repo1").unwrap(),
            &["http://a".to_string(), "http://b".to_string()]
        );
    }

    #[test]
    fn test_parse_strips_repeated_trailing_separators() {
        let map = RepoMap::parse("repo1 http://a/fedora///\n");
        assert_eq!(map.urls("repo1").unwrap(), &["http://a/fedora".to_string()]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let map = RepoMap::parse("\nrepo1 http://a\n\n   \n\trepo2 http://b\n");
        assert_eq!(map.len(), 2);
        assert_eq!(map.urls("repo2").unwrap(), &["http://b".to_string()]);
    }

    #[test]
    fn test_parse_accepts_crlf() {
        let map = RepoMap::parse("repo1 http://a/\r\nrepo2 http://b\r\n");
        assert_eq!(map.urls("repo1").unwrap(), &["http://a".to_string()]);
        assert_eq!(map.urls("repo2").unwrap(), &["http://b".to_string()]);
    }

    #[test]
    fn test_duplicate_repo_lines_accumulate() {
        let map = RepoMap::parse("repo1 http://a\nrepo2 http://c\nrepo1 http://b http://a/\n");
        assert_eq!(
            map.urls("repo1").unwrap(),
            &["http://a".to_string(), "http://b".to_string()]
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_repo_without_urls_is_known() {
        let map = RepoMap::parse("lonely\n");
        assert_eq!(map.urls("lonely"), Some(&[][..]));
    }

    #[test]
    fn test_parse_separator_only_url() {
        let map = RepoMap::parse("r / //\n");
        // Both collapse to the same empty URL.
        assert_eq!(map.urls("r"), Some(&["".to_string()][..]));
    }

    #[test]
    fn test_parse_non_ascii_space_stays_in_url() {
        let map = RepoMap::parse("repo1 http://a/x\u{00a0}y/\n");
        assert_eq!(
            map.urls("repo1").unwrap(),
            &["http://a/x\u{00a0}y".to_string()]
        );
    }

    #[test]
    fn test_unknown_repo() {
        let map = RepoMap::parse("repo1 http://a\n");
        assert!(map.urls("repo2").is_none());
    }

    #[test]
    fn test_empty_input() {
        let map = RepoMap::parse("");
        assert!(map.is_empty());
        assert_eq!(map, RepoMap::new());
    }

    #[test]
    fn test_load_reads_through_runtime() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/etc/repos.txt");

        runtime
            .expect_read_to_string()
            .with(eq(path.clone()))
            .returning(|_| Ok("updates http://mirror/updates/\n".to_string()));

        let map = RepoMap::load(&runtime, &path).unwrap();
        assert_eq!(
            map.urls("updates").unwrap(),
            &["http://mirror/updates".to_string()]
        );
    }

    #[test]
    fn test_load_error_names_the_file() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Err(anyhow::anyhow!("No such file or directory")));

        let err = RepoMap::load(&runtime, Path::new("/missing/repos.txt")).unwrap_err();
        assert!(format!("{:#}", err).contains("/missing/repos.txt"));
    }
}
