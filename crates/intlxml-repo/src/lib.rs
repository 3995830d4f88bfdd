//! Repository adapters: expand target patterns into files, read and parse XML documents.
//!
//! This crate is allowed to do filesystem IO. A document that cannot be read or parsed is
//! still returned, carrying a load failure instead of a tree, so one bad file never aborts
//! the batch.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use intlxml_domain::model::{BatchModel, DocumentModel, LoadFailure, LoadFailureKind, Node};
use intlxml_types::RepoPath;
use rayon::prelude::*;

pub use discover::expand_patterns;
pub use parse::{ParseError, ParseErrorKind, parse_document};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as an XML document tree.
    ///
    /// Returns `Ok(...)` on well-formed input, `Err(...)` otherwise. **Never panics** on any input.
    pub fn parse_xml(text: &str) -> anyhow::Result<()> {
        let _ = parse::parse_document(text)?;
        Ok(())
    }

    /// Decode arbitrary bytes the way files are decoded before parsing.
    ///
    /// **Never panics** on any input.
    pub fn load_bytes(bytes: &[u8]) -> Option<LoadFailure> {
        decode_and_parse(bytes).err()
    }
}

/// Named, ordered list of files to check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileGroup {
    pub target: String,
    pub paths: Vec<RepoPath>,
}

/// Expand one target's patterns under `root`.
pub fn discover_group(
    root: &Utf8Path,
    target: &str,
    patterns: &[String],
) -> anyhow::Result<FileGroup> {
    let paths =
        expand_patterns(root, patterns).with_context(|| format!("expand target {target}"))?;
    tracing::debug!(target_name = target, files = paths.len(), "discovered files");
    Ok(FileGroup {
        target: target.to_string(),
        paths,
    })
}

/// Read and parse one document. Never fails: IO and parse problems become a load failure.
pub fn load_document(root: &Utf8Path, path: &RepoPath, target: &str) -> DocumentModel {
    let abs = root.join(path.as_str());
    let loaded = match std::fs::read(&abs) {
        Ok(bytes) => decode_and_parse(&bytes),
        Err(err) => Err(LoadFailure {
            kind: LoadFailureKind::Read,
            message: format!("read {abs}: {err}"),
            line: None,
            col: None,
        }),
    };

    let (tree, failure) = match loaded {
        Ok(tree) => (tree, None),
        Err(failure) => {
            tracing::warn!(path = %path, error = %failure.message, "document not loaded");
            (Node::Null, Some(failure))
        }
    };

    DocumentModel {
        path: path.clone(),
        target: target.to_string(),
        tree,
        failure,
    }
}

/// Load every document of every group. Documents keep group order, then file order.
pub fn build_batch_model(root: &Utf8Path, groups: &[FileGroup]) -> BatchModel {
    let work: Vec<(&str, &RepoPath)> = groups
        .iter()
        .flat_map(|g| g.paths.iter().map(move |p| (g.target.as_str(), p)))
        .collect();

    let documents: Vec<DocumentModel> = work
        .par_iter()
        .map(|(target, path)| load_document(root, path, target))
        .collect();

    BatchModel {
        root: RepoPath::from(root),
        targets: groups.iter().map(|g| g.target.clone()).collect(),
        documents,
    }
}

fn decode_and_parse(bytes: &[u8]) -> Result<Node, LoadFailure> {
    let text = std::str::from_utf8(bytes).map_err(|err| LoadFailure {
        kind: LoadFailureKind::Read,
        message: format!("document is not valid UTF-8: {err}"),
        line: None,
        col: None,
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    parse::parse_document(text).map_err(|err| LoadFailure {
        kind: LoadFailureKind::Parse,
        message: err.to_string(),
        line: Some(err.line),
        col: Some(err.col),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &[u8]) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn load_document_parses_and_strips_bom() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("ui/page.xml"), "\u{feff}<page>Hello</page>".as_bytes());

        let doc = load_document(&root, &RepoPath::new("ui/page.xml"), "ui");
        assert!(doc.failure.is_none());
        assert_eq!(doc.target, "ui");
        assert_eq!(doc.tree, Node::mapping([("page", Node::leaf("Hello"))]));
    }

    #[test]
    fn load_document_reports_parse_failure_with_position() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("bad.xml"), b"<page>\n<a></b>\n</page>");

        let doc = load_document(&root, &RepoPath::new("bad.xml"), "ui");
        assert!(doc.tree.is_null());
        let failure = doc.failure.expect("failure");
        assert_eq!(failure.kind, LoadFailureKind::Parse);
        assert_eq!(failure.line, Some(2));
    }

    #[test]
    fn load_document_reports_missing_and_non_utf8_files() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("latin1.xml"), b"<p>caf\xe9</p>");

        let missing = load_document(&root, &RepoPath::new("missing.xml"), "ui");
        assert_eq!(missing.failure.expect("failure").kind, LoadFailureKind::Read);

        let latin1 = load_document(&root, &RepoPath::new("latin1.xml"), "ui");
        let failure = latin1.failure.expect("failure");
        assert_eq!(failure.kind, LoadFailureKind::Read);
        assert!(failure.message.contains("UTF-8"));
    }

    #[test]
    fn build_batch_model_keeps_group_then_file_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        for name in ["pages/a.xml", "pages/b.xml", "macros/m.xml"] {
            write_file(&root.join(name), b"<x>{{ok}}</x>");
        }

        let groups = vec![
            discover_group(&root, "macros", &["macros/*.xml".to_string()]).expect("macros"),
            discover_group(&root, "pages", &["pages/*.xml".to_string()]).expect("pages"),
        ];
        let model = build_batch_model(&root, &groups);

        assert_eq!(model.targets, vec!["macros".to_string(), "pages".to_string()]);
        let docs: Vec<(&str, &str)> = model
            .documents
            .iter()
            .map(|d| (d.target.as_str(), d.path.as_str()))
            .collect();
        assert_eq!(
            docs,
            vec![
                ("macros", "macros/m.xml"),
                ("pages", "pages/a.xml"),
                ("pages", "pages/b.xml"),
            ]
        );
        assert!(model.documents.iter().all(|d| d.failure.is_none()));
    }

    #[test]
    fn discover_group_wraps_pattern_errors() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = discover_group(&root, "ui", &["[".to_string()]).unwrap_err();
        assert!(format!("{err:#}").contains("expand target ui"));
    }

    proptest! {
        #[test]
        fn fuzz_parsers_never_panic(input in ".*") {
            let _ = fuzz::parse_xml(&input);
            let _ = fuzz::load_bytes(input.as_bytes());
        }

        #[test]
        fn byte_loader_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = fuzz::load_bytes(&bytes);
        }
    }
}
