//! High-level constructors that synthesize complete, balanced transactions
//! from editing intents.
//!
//! Every constructor here takes the *pre-transaction* document and emits a
//! full operation list ending in `push_final_retain` — none of them touch
//! `Vec<Op>` directly, they are built entirely out of `TransactionBuilder`
//! calls.

pub mod annotation;
pub mod attribute_change;
pub mod content_branch;
pub mod document_insertion;
pub mod insertion;
pub mod metadata;
pub mod removal;
pub mod replacement;
pub mod wrap;

pub use annotation::new_from_annotation;
pub use attribute_change::new_from_attribute_changes;
pub use content_branch::new_from_content_branch_conversion;
pub use document_insertion::new_from_document_insertion;
pub use insertion::new_from_insertion;
pub use metadata::{
    new_from_metadata_element_replacement, new_from_metadata_insertion, new_from_metadata_removal,
};
pub use removal::new_from_removal;
pub use replacement::new_from_replacement;
pub use wrap::{new_from_wrap, UnwrapSpec};
