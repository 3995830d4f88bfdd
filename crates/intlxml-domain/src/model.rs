use indexmap::IndexMap;
use intlxml_types::RepoPath;

/// Reserved mapping key holding an element's attributes.
pub const ATTRIBUTE_KEY: &str = "$";

/// Reserved mapping key holding an element's text when it also has attributes or children.
pub const TEXT_KEY: &str = "_";

/// Parsed shape of one document.
///
/// Mirrors the object/array shape produced by the common XML-to-object converters: repeated
/// child tags become a `Sequence`, everything keyed becomes a `Mapping` in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Node {
    #[default]
    Null,
    Leaf(String),
    Sequence(Vec<Node>),
    Mapping(IndexMap<String, Node>),
}

impl Node {
    pub fn leaf(text: impl Into<String>) -> Self {
        Node::Leaf(text.into())
    }

    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }
}

impl Drop for Node {
    /// Tears nested containers down through a heap stack so deep documents drop without
    /// recursing once per level.
    fn drop(&mut self) {
        let mut pending = match self {
            Node::Sequence(items) => std::mem::take(items),
            Node::Mapping(entries) => std::mem::take(entries).into_values().collect(),
            Node::Null | Node::Leaf(_) => return,
        };
        while let Some(mut node) = pending.pop() {
            match &mut node {
                Node::Sequence(items) => pending.append(items),
                Node::Mapping(entries) => pending.extend(std::mem::take(entries).into_values()),
                Node::Null | Node::Leaf(_) => {}
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadFailureKind {
    Read,
    Parse,
}

/// Why a document has no tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: LoadFailureKind,
    pub message: String,
    pub line: Option<u32>,
    pub col: Option<u32>,
}

/// One document as handed to the engine.
///
/// When `failure` is set the tree is `Node::Null`, so collection yields nothing.
#[derive(Clone, Debug, Default)]
pub struct DocumentModel {
    pub path: RepoPath,
    pub target: String,
    pub tree: Node,
    pub failure: Option<LoadFailure>,
}

/// All documents in scope for one run, in enumeration order.
#[derive(Clone, Debug, Default)]
pub struct BatchModel {
    pub root: RepoPath,
    pub targets: Vec<String>,
    pub documents: Vec<DocumentModel>,
}
