use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{GlobBuilder, GlobMatcher};
use indexmap::IndexSet;
use intlxml_types::RepoPath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Expand a target's patterns into an ordered, de-duplicated list of files under `root`.
///
/// Behavior:
/// - patterns are applied in order; each pattern's matches are appended in sorted order
/// - a `!`-prefixed pattern removes everything it matches from the list so far
/// - `*` does not cross `/`; use `**` to descend into directories
/// - a pattern that matches nothing is logged and otherwise ignored
pub fn expand_patterns(root: &Utf8Path, patterns: &[String]) -> anyhow::Result<Vec<RepoPath>> {
    let files = list_files(root);
    let mut out: IndexSet<RepoPath> = IndexSet::new();

    for pattern in patterns {
        let (negate, glob) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern.as_str()),
        };
        let matcher = compile(glob).with_context(|| format!("compile pattern {pattern}"))?;

        if negate {
            out.retain(|p| !matcher.is_match(p.as_str()));
            continue;
        }

        let before = out.len();
        let mut matched = false;
        for file in files.iter().filter(|f| matcher.is_match(f.as_str())) {
            matched = true;
            out.insert(file.clone());
        }
        if !matched {
            tracing::warn!(pattern = %pattern, "pattern matched no files");
        } else {
            tracing::debug!(pattern = %pattern, added = out.len() - before, "expanded pattern");
        }
    }

    Ok(out.into_iter().collect())
}

fn compile(glob: &str) -> anyhow::Result<GlobMatcher> {
    let normalized = RepoPath::new(glob);
    let matcher = GlobBuilder::new(normalized.as_str())
        .literal_separator(true)
        .build()?
        .compile_matcher();
    Ok(matcher)
}

/// All files under `root` as sorted root-relative paths.
fn list_files(root: &Utf8Path) -> Vec<RepoPath> {
    let mut files: Vec<RepoPath> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
        .map(|abs| {
            let rel = abs.strip_prefix(root).unwrap_or(&abs);
            RepoPath::new(rel.as_str())
        })
        .collect();
    files.sort();
    files
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    fn paths(found: &[RepoPath]) -> Vec<&str> {
        found.iter().map(|p| p.as_str()).collect()
    }

    #[test]
    fn star_does_not_cross_directories() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("ui/a.xml"), "<a/>");
        write_file(&root.join("ui/nested/b.xml"), "<b/>");
        write_file(&root.join("ui/readme.txt"), "");

        let shallow = expand_patterns(&root, &["ui/*.xml".to_string()]).expect("expand");
        assert_eq!(paths(&shallow), vec!["ui/a.xml"]);

        let deep = expand_patterns(&root, &["ui/**/*.xml".to_string()]).expect("expand");
        assert_eq!(paths(&deep), vec!["ui/a.xml", "ui/nested/b.xml"]);
    }

    #[test]
    fn patterns_apply_in_order_with_negation_and_dedup() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("pages/home.xml"), "<a/>");
        write_file(&root.join("pages/legacy/old.xml"), "<a/>");
        write_file(&root.join("macros/m.xml"), "<a/>");

        let patterns = vec![
            "macros/m.xml".to_string(),
            "pages/**/*.xml".to_string(),
            "!pages/legacy/**".to_string(),
            "./macros/*.xml".to_string(),
        ];
        let found = expand_patterns(&root, &patterns).expect("expand");
        assert_eq!(paths(&found), vec!["macros/m.xml", "pages/home.xml"]);
    }

    #[test]
    fn missing_literal_path_is_skipped() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("a.xml"), "<a/>");

        let found = expand_patterns(&root, &["nope.xml".to_string(), "a.xml".to_string()])
            .expect("expand");
        assert_eq!(paths(&found), vec!["a.xml"]);
    }

    #[test]
    fn invalid_pattern_returns_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = expand_patterns(&root, &["[".to_string()]).unwrap_err();
        assert!(err.to_string().contains("compile pattern ["));
    }
}
