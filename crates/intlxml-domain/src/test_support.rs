use crate::model::{BatchModel, DocumentModel, LoadFailure, LoadFailureKind, Node};
use crate::policy::EffectiveConfig;
use intlxml_types::RepoPath;

pub fn leaf(text: &str) -> Node {
    Node::leaf(text)
}

pub fn map(entries: Vec<(&str, Node)>) -> Node {
    Node::mapping(entries)
}

pub fn seq(items: Vec<Node>) -> Node {
    Node::Sequence(items)
}

pub fn attrs(pairs: &[(&str, &str)]) -> Node {
    Node::mapping(pairs.iter().map(|(k, v)| (*k, Node::leaf(*v))))
}

pub fn document(path: &str, tree: Node) -> DocumentModel {
    DocumentModel {
        path: RepoPath::new(path),
        target: "ui".to_string(),
        tree,
        failure: None,
    }
}

pub fn broken_document(path: &str, message: &str) -> DocumentModel {
    DocumentModel {
        path: RepoPath::new(path),
        target: "ui".to_string(),
        tree: Node::Null,
        failure: Some(LoadFailure {
            kind: LoadFailureKind::Parse,
            message: message.to_string(),
            line: Some(3),
            col: Some(7),
        }),
    }
}

pub fn batch(documents: Vec<DocumentModel>) -> BatchModel {
    BatchModel {
        root: RepoPath::new("."),
        targets: vec!["ui".to_string()],
        documents,
    }
}

pub fn config() -> EffectiveConfig {
    EffectiveConfig::default()
}
