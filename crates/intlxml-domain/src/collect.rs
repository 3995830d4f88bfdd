//! Leaf collection over a document tree.

use crate::model::{ATTRIBUTE_KEY, Node};
use crate::policy::CollectOptions;

/// Collect every string leaf of `tree` in document order.
///
/// Mapping keys found in the ignore set are skipped with their whole subtree, as is the
/// attribute key unless `options.attributes` is set. Leaves are returned untrimmed.
pub fn collect_leaves<'a>(tree: &'a Node, options: &CollectOptions) -> Vec<&'a str> {
    let mut out = Vec::new();
    // Explicit stack: nesting depth is bounded only by the document. Children are pushed in
    // reverse so they pop in document order.
    let mut pending: Vec<&'a Node> = vec![tree];

    while let Some(node) = pending.pop() {
        match node {
            Node::Null => {}
            Node::Leaf(text) => out.push(text.as_str()),
            Node::Sequence(items) => pending.extend(items.iter().rev()),
            Node::Mapping(entries) => pending.extend(
                entries
                    .iter()
                    .rev()
                    .filter(|(key, _)| !skips_key(key, options))
                    .map(|(_, value)| value),
            ),
        }
    }

    out
}

fn skips_key(key: &str, options: &CollectOptions) -> bool {
    options.ignore.contains(key) || (key == ATTRIBUTE_KEY && !options.attributes)
}
