#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]
#![warn(missing_docs)]

#[cfg(doctest)]
doc_comment::doctest!("../readme.md");

// Sequence utilities
pub mod collection;
pub mod sequence;

// Value utilities
pub mod enums;
pub mod flags;
pub mod value;
pub mod variant;
