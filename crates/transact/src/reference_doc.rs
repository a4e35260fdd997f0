//! A minimal concrete [`Document`]/[`NodeFactory`]/[`Store`]/[`InternalList`]
//! implementation.
//!
//! Nothing in this module is part of the transaction core's contract — it
//! exists purely so constructors, transforms, and the rebase engine have a
//! real document to run against in this crate's own tests, the same role
//! `quillai_delta::Delta`/`Op` play for that crate's test suite. A real
//! embedding (the DOM-facing presentation layer this crate never touches)
//! would supply its own, richer implementations of these same traits.

use std::collections::BTreeMap;

use crate::collaborators::{
    Document, FixupResult, InternalList, InternalListMergeResult, MetaLinearData, NodeFactory,
    Range, SelectMode, SelectedNode, Store,
};
use crate::data::{Annotation, LinearItem, MetadataElement};

/// A flat `Vec<LinearItem>` document with no reserved internal list region.
#[derive(Debug, Clone)]
pub struct LinearDocument {
    data: Vec<LinearItem>,
    metadata: Vec<Vec<MetadataElement>>,
}

impl LinearDocument {
    pub fn new(data: Vec<LinearItem>) -> Self {
        let metadata = vec![Vec::new(); data.len() + 1];
        Self { data, metadata }
    }

    pub fn with_metadata(data: Vec<LinearItem>, metadata: Vec<Vec<MetadataElement>>) -> Self {
        debug_assert_eq!(metadata.len(), data.len() + 1);
        Self { data, metadata }
    }

    /// Builds a document from a tiny subset of HTML: unattributed open/close
    /// tags (`<p>`, `</p>`, ...) and literal text, used throughout this
    /// crate's tests as a readable document shorthand. Not a general HTML
    /// parser — it exists only to keep test fixtures legible.
    pub fn from_html_like(markup: &str) -> Self {
        let mut data = Vec::new();
        let chars: Vec<char> = markup.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '<' {
                let close = chars[i..].iter().position(|&c| c == '>').map(|p| i + p);
                let end = match close {
                    Some(end) => end,
                    None => {
                        data.push(LinearItem::char(chars[i]));
                        i += 1;
                        continue;
                    }
                };
                let tag: String = chars[i + 1..end].iter().collect();
                if let Some(name) = tag.strip_prefix('/') {
                    data.push(LinearItem::close(name.to_string()));
                } else {
                    data.push(LinearItem::open(tag));
                }
                i = end + 1;
            } else {
                data.push(LinearItem::char(chars[i]));
                i += 1;
            }
        }
        Self::new(data)
    }
}

impl Document for LinearDocument {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_element_data(&self, offset: usize) -> bool {
        self.data.get(offset).map(LinearItem::is_element).unwrap_or(false)
    }

    fn is_open_element_data(&self, offset: usize) -> bool {
        self.data.get(offset).map(LinearItem::is_open).unwrap_or(false)
    }

    fn is_close_element_data(&self, offset: usize) -> bool {
        self.data.get(offset).map(LinearItem::is_close).unwrap_or(false)
    }

    fn element_type_at(&self, offset: usize) -> Option<String> {
        self.data.get(offset).and_then(|i| i.element_type().map(str::to_string))
    }

    fn data(&self, range: Option<Range>) -> Vec<LinearItem> {
        match range {
            None => self.data.clone(),
            Some(r) => {
                let r = r.normalized();
                let end = r.end.min(self.data.len());
                let start = r.start.min(end);
                self.data[start..end].to_vec()
            }
        }
    }

    fn metadata(&self, range: Option<Range>) -> Vec<Vec<MetadataElement>> {
        match range {
            None => self.metadata.clone(),
            Some(r) => {
                let r = r.normalized();
                let end = r.end.min(self.metadata.len());
                let start = r.start.min(end);
                self.metadata[start..end].to_vec()
            }
        }
    }

    fn fixup_insertion(&self, data: Vec<LinearItem>, offset: usize) -> FixupResult {
        let _ = offset;
        let len = data.len();
        FixupResult {
            offset,
            remove: 0,
            data,
            inserted_data_offset: 0,
            inserted_data_length: len,
        }
    }

    fn select_nodes(&self, range: Range, mode: SelectMode) -> Vec<SelectedNode> {
        let range = range.normalized();
        let mut stack: Vec<(usize, String, usize)> = Vec::new();
        let mut nodes = Vec::new();
        let mut node_index = 0usize;

        for (offset, item) in self.data.iter().enumerate() {
            match item {
                LinearItem::Open { element_type, .. } => {
                    stack.push((offset, element_type.clone(), node_index));
                    node_index += 1;
                }
                LinearItem::Close { element_type } => {
                    if let Some((open_offset, open_type, idx)) = stack.pop() {
                        if &open_type == element_type {
                            let outer = Range::new(open_offset, offset + 1);
                            let inner = Range::new(open_offset + 1, offset);
                            let intersects = outer.start < range.end && range.start < outer.end;
                            if intersects {
                                let is_partial =
                                    range.start > outer.start || range.end < outer.end;
                                let has_element_children = (inner.start..inner.end)
                                    .any(|o| self.data.get(o).map(LinearItem::is_element).unwrap_or(false));
                                let keep = match mode {
                                    SelectMode::Covered => true,
                                    SelectMode::Leaves => !has_element_children,
                                };
                                if keep {
                                    nodes.push(SelectedNode {
                                        node_index: idx,
                                        element_type: open_type,
                                        outer_range: outer,
                                        range: inner,
                                        is_partial,
                                    });
                                }
                            }
                        }
                    }
                }
                LinearItem::Char { .. } => {}
            }
        }

        nodes.sort_by_key(|n| n.outer_range.start);
        nodes
    }

    fn internal_list_range(&self) -> Range {
        Range::new(self.data.len(), self.data.len())
    }

    fn merge_metadata_cells(&self, cells: &[&[MetadataElement]]) -> Vec<MetadataElement> {
        MetaLinearData::merge_cells(self, cells)
    }

    fn content_branch_at(&self, offset: usize, node_factory: &dyn NodeFactory) -> Option<SelectedNode> {
        let mut stack: Vec<(usize, String, usize)> = Vec::new();
        let mut node_index = 0usize;
        let mut best: Option<(usize, String, usize)> = None;

        for (i, item) in self.data.iter().enumerate() {
            if i > offset {
                break;
            }
            match item {
                LinearItem::Open { element_type, .. } => {
                    stack.push((i, element_type.clone(), node_index));
                    node_index += 1;
                }
                LinearItem::Close { element_type } => {
                    if let Some(top) = stack.last() {
                        if &top.1 == element_type && top.0 < i {
                            stack.pop();
                        }
                    }
                }
                LinearItem::Char { .. } => {}
            }
        }

        for (open_offset, element_type, idx) in stack.iter().rev() {
            if node_factory.is_node_content(element_type) {
                best = Some((*open_offset, element_type.clone(), *idx));
                break;
            }
        }

        let (open_offset, element_type, idx) = best?;
        let close_offset = self.data[open_offset + 1..]
            .iter()
            .enumerate()
            .scan(0i64, |depth, (i, item)| {
                match item {
                    LinearItem::Open { element_type: t, .. } if *t == element_type => *depth += 1,
                    LinearItem::Close { element_type: t } if *t == element_type => {
                        if *depth == 0 {
                            return Some(Some(open_offset + 1 + i));
                        }
                        *depth -= 1;
                    }
                    _ => {}
                }
                Some(None)
            })
            .flatten()
            .next()
            .unwrap_or(self.data.len());

        Some(SelectedNode {
            node_index: idx,
            element_type,
            outer_range: Range::new(open_offset, close_offset + 1),
            range: Range::new(open_offset + 1, close_offset),
            is_partial: false,
        })
    }
}

impl MetaLinearData for LinearDocument {
    fn cell(&self, offset: usize) -> &[MetadataElement] {
        &self.metadata[offset]
    }

    fn cell_count(&self) -> usize {
        self.metadata.len()
    }

    /// The metadata-collapse rule: concatenate every removed cell's elements
    /// in source order into the one destination cell that survives.
    fn merge_cells(&self, cells: &[&[MetadataElement]]) -> Vec<MetadataElement> {
        cells.iter().flat_map(|cell| cell.iter().cloned()).collect()
    }
}

/// A small fixed registry of node-type facts, enough to exercise the
/// constructors' undeletable/non-content branches in tests.
#[derive(Debug, Default)]
pub struct SimpleNodeFactory {
    undeletable_types: Vec<String>,
    non_content_types: Vec<String>,
}

impl SimpleNodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_undeletable(mut self, element_type: impl Into<String>) -> Self {
        self.undeletable_types.push(element_type.into());
        self
    }

    pub fn with_non_content(mut self, element_type: impl Into<String>) -> Self {
        self.non_content_types.push(element_type.into());
        self
    }
}

impl NodeFactory for SimpleNodeFactory {
    fn is_node_deletable(&self, element_type: &str) -> bool {
        !self.undeletable_types.iter().any(|t| t == element_type)
    }

    fn is_node_content(&self, element_type: &str) -> bool {
        !self.non_content_types.iter().any(|t| t == element_type)
    }

    fn can_node_take_annotation_type(&self, _element_type: &str, _annotation: &Annotation) -> bool {
        true
    }

    fn should_ignore_children(&self, _element_type: &str) -> bool {
        false
    }

    fn nodes_mergeable(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

/// A deduplicating annotation pool: equal annotations share one index.
#[derive(Debug, Default, Clone)]
pub struct VecStore {
    slots: Vec<Annotation>,
}

impl VecStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for VecStore {
    fn index(&mut self, annotation: Annotation) -> usize {
        if let Some(pos) = self.slots.iter().position(|a| a == &annotation) {
            return pos;
        }
        self.slots.push(annotation);
        self.slots.len() - 1
    }

    fn get(&self, index: usize) -> Option<&Annotation> {
        self.slots.get(index)
    }

    fn merge(&mut self, other: &Self) -> BTreeMap<usize, usize> {
        let mut mapping = BTreeMap::new();
        for (old_index, ann) in other.slots.iter().enumerate() {
            mapping.insert(old_index, self.index(ann.clone()));
        }
        mapping
    }
}

/// An internal list with no reserved region — used wherever tests don't
/// exercise the internal-list-merge path.
#[derive(Debug, Default, Clone)]
pub struct TailInternalList {
    item_ranges: Vec<Range>,
    outer: Range,
}

impl TailInternalList {
    pub fn new(outer: Range) -> Self {
        Self {
            item_ranges: Vec::new(),
            outer,
        }
    }
}

impl InternalList for TailInternalList {
    fn outer_range(&self) -> Range {
        self.outer
    }

    fn item_count(&self) -> usize {
        self.item_ranges.len()
    }

    fn item_range(&self, index: usize) -> Range {
        self.item_ranges[index]
    }

    fn merge(&mut self, other: &Self, orig_len: usize) -> InternalListMergeResult {
        let mut mapping = BTreeMap::new();
        let mut new_item_ranges = Vec::new();
        let base = self.item_ranges.len();
        for (i, range) in other.item_ranges.iter().enumerate() {
            mapping.insert(i, base + i);
            let shifted = Range::new(range.start + orig_len, range.end + orig_len);
            new_item_ranges.push(shifted);
            self.item_ranges.push(shifted);
        }
        InternalListMergeResult {
            mapping,
            new_item_ranges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_html_like_parses_open_text_close() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        assert_eq!(doc.len(), 4);
        assert!(doc.is_open_element_data(0));
        assert!(doc.is_close_element_data(3));
    }

    #[test]
    fn select_nodes_finds_covered_paragraph() {
        let doc = LinearDocument::from_html_like("<p>ab</p><p>cd</p>");
        let nodes = doc.select_nodes(Range::new(0, 4), SelectMode::Covered);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].element_type, "p");
    }

    #[test]
    fn vec_store_dedupes_equal_annotations() {
        let mut store = VecStore::new();
        let a = store.index(Annotation::new("bold"));
        let b = store.index(Annotation::new("bold"));
        assert_eq!(a, b);
    }
}
