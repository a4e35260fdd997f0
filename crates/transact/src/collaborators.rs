//! The external collaborator contracts consumed by the transaction core.
//!
//! `Document`, `NodeFactory`, `Store`, `InternalList`, and `MetaLinearData`
//! are genuinely external in the system this crate models: the real
//! document tree, its node factory, and its DOM-facing fixup logic belong
//! to a separate presentation layer this crate never touches. What lives
//! here is the *contract* the core needs from them, plus one concrete
//! reference implementation ([`crate::reference_doc`]) so the constructors,
//! transforms, and rebase engine have something real to run against in
//! tests — the same role `quillai_delta::Delta`/`Op` play for their own
//! test suite.
//!
//! `Node` and `Range` are modeled as concrete value types rather than
//! traits: the node contract (`canBeMergedWith`, `getOuterRange`, ...) is a
//! fixed, data-only shape, not something this crate needs to swap
//! implementations of.

use crate::data::Annotation;

/// An immutable `[start, end)` range into the linear data axis.
///
/// Supports backwards construction (`start > end`), matching a user
/// selection dragged right-to-left; `translate_range` preserves that
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn is_backwards(&self) -> bool {
        self.start > self.end
    }

    /// The range with endpoints in ascending order, regardless of the
    /// orientation it was constructed with.
    pub fn normalized(&self) -> Range {
        if self.is_backwards() {
            Range::new(self.end, self.start)
        } else {
            *self
        }
    }
}

/// Facts about node *types* the core needs but never decides on its own.
pub trait NodeFactory {
    fn is_node_deletable(&self, element_type: &str) -> bool;
    fn is_node_content(&self, element_type: &str) -> bool;
    fn can_node_take_annotation_type(&self, element_type: &str, annotation: &Annotation) -> bool;
    fn should_ignore_children(&self, element_type: &str) -> bool;
    /// Whether two adjacent partial-selected nodes of these types can be
    /// spliced into one on removal, used by `new_from_removal`. Keyed by
    /// type rather than modeled as an instance method, consistent with the
    /// rest of `NodeFactory`'s type-level queries (see DESIGN.md).
    fn nodes_mergeable(&self, a: &str, b: &str) -> bool;
}

/// The pooled annotation store. `merge` folds `other`'s annotations into
/// `self` and returns the index remapping so data copied from the other
/// document can be rewritten to point at the merged indices.
pub trait Store {
    fn index(&mut self, annotation: Annotation) -> usize;
    fn get(&self, index: usize) -> Option<&Annotation>;
    fn merge(&mut self, other: &Self) -> std::collections::BTreeMap<usize, usize>
    where
        Self: Sized;
}

/// Result of [`InternalList::merge`]: the index remapping for items copied
/// from the other list, and the ranges (in the merged list's own
/// coordinates) that are newly-added items from that other list.
#[derive(Debug, Clone, Default)]
pub struct InternalListMergeResult {
    pub mapping: std::collections::BTreeMap<usize, usize>,
    pub new_item_ranges: Vec<Range>,
}

/// The reserved tail region holding internal (referenceable) items.
pub trait InternalList {
    fn outer_range(&self) -> Range;
    fn item_count(&self) -> usize;
    fn item_range(&self, index: usize) -> Range;
    fn merge(&mut self, other: &Self, orig_len: usize) -> InternalListMergeResult
    where
        Self: Sized;
}

/// The metadata axis, addressed by data offset (one cell per offset plus a
/// trailing cell).
pub trait MetaLinearData {
    fn cell(&self, offset: usize) -> &[crate::data::MetadataElement];
    fn cell_count(&self) -> usize;
    /// The metadata-collapse rule used when `pushReplace` merges the
    /// metadata of a removed range that has no destination slot of its own.
    fn merge_cells(&self, cells: &[&[crate::data::MetadataElement]]) -> Vec<crate::data::MetadataElement>;
}

/// What `fixupInsertion` reports back: the document may have relocated the
/// insertion point and padded the data with wrapper markers to keep the
/// tree valid; `inserted_*` mark the caller-intended slice within that
/// padded data.
#[derive(Debug, Clone)]
pub struct FixupResult {
    pub offset: usize,
    pub remove: usize,
    pub data: Vec<crate::data::LinearItem>,
    pub inserted_data_offset: usize,
    pub inserted_data_length: usize,
}

/// Mode for [`Document::select_nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Nodes fully or partially inside the range, for removal.
    Covered,
    /// Leaf content nodes (no element children) intersecting the range.
    Leaves,
}

/// One node returned by `select_nodes`, annotated with how the query range
/// relates to it.
#[derive(Debug, Clone)]
pub struct SelectedNode {
    pub node_index: usize,
    pub element_type: String,
    pub outer_range: Range,
    pub range: Range,
    /// True when the query range only partially overlaps this node (one of
    /// the endpoints falls strictly inside it).
    pub is_partial: bool,
}

/// The document the core reads facts from and asks to perform fixups it
/// cannot safely do itself.
pub trait Document {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn is_element_data(&self, offset: usize) -> bool;
    fn is_open_element_data(&self, offset: usize) -> bool;
    fn is_close_element_data(&self, offset: usize) -> bool;
    fn element_type_at(&self, offset: usize) -> Option<String>;
    fn data(&self, range: Option<Range>) -> Vec<crate::data::LinearItem>;
    fn metadata(&self, range: Option<Range>) -> Vec<Vec<crate::data::MetadataElement>>;
    fn fixup_insertion(&self, data: Vec<crate::data::LinearItem>, offset: usize) -> FixupResult;
    fn select_nodes(&self, range: Range, mode: SelectMode) -> Vec<SelectedNode>;
    fn internal_list_range(&self) -> Range;
    /// The metadata-collapse rule `pushReplace` uses when a removed range's
    /// cells have no destination slot of their own: delegates to this
    /// document's [`MetaLinearData::merge_cells`] rather than reimplementing
    /// a merge policy inside the transaction core.
    fn merge_metadata_cells(
        &self,
        cells: &[&[crate::data::MetadataElement]],
    ) -> Vec<crate::data::MetadataElement>;
    /// The nearest node enclosing `offset` (inclusive of a node that starts
    /// exactly at `offset`) whose type `node_factory.is_node_content` accepts
    /// — the "content branch" `new_from_content_branch_conversion` walks up
    /// to from each leaf.
    fn content_branch_at(&self, offset: usize, node_factory: &dyn NodeFactory) -> Option<SelectedNode>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_backwards() {
        let r = Range::new(5, 2);
        assert!(r.is_backwards());
        assert_eq!(r.normalized(), Range::new(2, 5));
    }

    #[test]
    fn range_collapsed() {
        assert!(Range::new(3, 3).is_collapsed());
    }
}
