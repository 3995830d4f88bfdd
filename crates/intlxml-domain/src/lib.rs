//! Pure evaluation (no IO).
//!
//! Input: document trees built elsewhere (see `intlxml-repo`).
//! Output: findings + verdict + tally.

#![forbid(unsafe_code)]

pub mod collect;
pub mod legality;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use collect::collect_leaves;
pub use engine::{evaluate, evaluate_document, evaluate_texts};
pub use legality::is_legal;
