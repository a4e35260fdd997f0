//! Reversible, rebaseable transactions over a flat linear-model document
//! tree.
//!
//! A [`Transaction`] maps one document state to another: it is pure, it
//! reverses, it translates offsets/ranges across itself, and it rebases
//! against a parallel transaction from another author. This crate is the
//! transaction core only — the visual surface, the node factory, and the
//! document tree itself are external collaborators (see [`collaborators`])
//! this crate never constructs on its own.
//!
//! Replaces this workspace's `quillai_delta` (a flat char/attribute OT
//! engine) for documents shaped as a tree rather than a run of attributed
//! text; the op-vocabulary-plus-builder-plus-rebase shape is the same idea,
//! generalized to element markers, a second metadata axis, and an internal
//! reference list.

pub mod attributes;
pub mod builder;
pub mod collaborators;
pub mod constructors;
pub mod data;
pub mod error;
pub mod op;
pub mod rebase;
pub mod reference_doc;
pub mod transaction;

pub use attributes::{AttributeMap, AttributeValue};
pub use builder::TransactionBuilder;
pub use collaborators::{
    Document, FixupResult, InternalList, InternalListMergeResult, MetaLinearData, NodeFactory,
    Range, SelectMode, SelectedNode, Store,
};
pub use constructors::{
    new_from_annotation, new_from_attribute_changes, new_from_content_branch_conversion,
    new_from_document_insertion, new_from_insertion, new_from_metadata_element_replacement,
    new_from_metadata_insertion, new_from_metadata_removal, new_from_removal, new_from_replacement,
    new_from_wrap, UnwrapSpec,
};
pub use data::{Annotation, AnnotationId, AnnotationSet, LinearItem, MetadataElement};
pub use error::{Error, Result};
pub use op::{AnnotateBias, AnnotateMethod, Op};
pub use rebase::{active_range_and_length_diff, rebase_transactions, rebased_onto, RebaseOutcome};
pub use transaction::Transaction;
