use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a text finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - document path (root-relative)
/// - offending text
/// - occurrence index of that text within the document
pub fn fingerprint_for_text(
    check_id: &str,
    code: &str,
    document_path: &str,
    text: &str,
    occurrence: usize,
) -> String {
    let occurrence = occurrence.to_string();
    let canonical = [check_id, code, document_path, text, occurrence.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
