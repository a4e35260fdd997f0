//! Append-only operation-list builder.
//!
//! The builder is the only place that grows an operation list; it
//! guarantees local coalescing (so two adjacent `retain`s never appear as
//! two ops) and correct metadata bookkeeping around `replace`. High-level
//! constructors (`src/constructors/*.rs`) are built entirely out of calls
//! into this type — none of them touch `Vec<Op>` directly.

use crate::collaborators::{Document, NodeFactory, Range};
use crate::data::{LinearItem, MetadataElement};
use crate::error::{Error, Result};
use crate::op::{AnnotateBias, AnnotateMethod, Op};

#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    ops: Vec<Op>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    fn last_mut(&mut self) -> Option<&mut Op> {
        self.ops.last_mut()
    }

    /// `pushRetain(n)`: coalesces with a trailing retain, drops zero,
    /// rejects negative.
    pub fn push_retain(&mut self, length: i64) -> Result<()> {
        if length < 0 {
            return Err(Error::NegativeRetain(length));
        }
        let length = length as usize;
        if length == 0 {
            return Ok(());
        }
        if let Some(Op::Retain { length: last }) = self.last_mut() {
            *last += length;
            return Ok(());
        }
        self.ops.push(Op::Retain { length });
        Ok(())
    }

    /// `pushRetainMetadata(n)`: analogous to `push_retain` on the metadata
    /// axis.
    pub fn push_retain_metadata(&mut self, length: i64) -> Result<()> {
        if length < 0 {
            return Err(Error::NegativeRetain(length));
        }
        let length = length as usize;
        if length == 0 {
            return Ok(());
        }
        if let Some(Op::RetainMetadata { length: last }) = self.last_mut() {
            *last += length;
            return Ok(());
        }
        self.ops.push(Op::RetainMetadata { length });
        Ok(())
    }

    /// `pushReplace(doc, offset, removeLen, insert, ...)`.
    ///
    /// Reads `remove`/`removeMetadata` from the document at
    /// `[offset, offset + remove_len)`. If the removed region carries
    /// metadata that the caller didn't explicitly redirect via
    /// `insert_metadata`, the removed cells are merged (via the document's
    /// metadata-collapse rule) and attached just before the inserted
    /// content — or, if nothing is inserted, as a trailing `replaceMetadata`
    /// immediately after this op.
    #[allow(clippy::too_many_arguments)]
    pub fn push_replace(
        &mut self,
        doc: &dyn Document,
        offset: usize,
        remove_len: usize,
        insert: Vec<LinearItem>,
        insert_metadata: Option<Vec<Vec<MetadataElement>>>,
        inserted_data_offset: Option<usize>,
        inserted_data_length: Option<usize>,
    ) -> Result<()> {
        if matches!(self.ops.last(), Some(Op::ReplaceMetadata { .. })) {
            return Err(Error::ReplaceAfterReplaceMetadata);
        }

        let remove = doc.data(Some(Range::new(offset, offset + remove_len)));
        let removed_metadata = doc.metadata(Some(Range::new(offset, offset + remove_len)));
        let has_removed_metadata = removed_metadata.iter().any(|cell| !cell.is_empty());

        let (insert_metadata, trailing_replace_metadata) = if insert_metadata.is_some() {
            (insert_metadata, None)
        } else if has_removed_metadata {
            let cells: Vec<&[MetadataElement]> =
                removed_metadata.iter().map(|c| c.as_slice()).collect();
            let merged = doc.merge_metadata_cells(&cells);
            if !insert.is_empty() {
                (Some(vec![merged]), None)
            } else {
                (None, Some(merged))
            }
        } else {
            (None, None)
        };

        let can_merge = match self.ops.last() {
            Some(Op::Replace {
                insert_metadata: prev_insert_metadata,
                inserted_data_offset: prev_inserted_offset,
                ..
            }) => {
                prev_insert_metadata.is_none()
                    && prev_inserted_offset.is_none()
                    && insert_metadata.is_none()
                    && inserted_data_offset.is_none()
            }
            _ => false,
        };

        if can_merge {
            if let Some(Op::Replace {
                remove: prev_remove,
                insert: prev_insert,
                ..
            }) = self.ops.last_mut()
            {
                prev_remove.extend(remove);
                prev_insert.extend(insert);
                if let Some(trailing) = trailing_replace_metadata {
                    self.push_replace_metadata(Vec::new(), trailing)?;
                }
                return Ok(());
            }
        }

        self.ops.push(Op::Replace {
            remove,
            insert,
            remove_metadata: if has_removed_metadata {
                Some(removed_metadata)
            } else {
                None
            },
            insert_metadata,
            inserted_data_offset,
            inserted_data_length,
        });

        if let Some(trailing) = trailing_replace_metadata {
            self.push_replace_metadata(Vec::new(), trailing)?;
        }

        Ok(())
    }

    /// `pushReplaceMetadata(remove, insert)`: no-op if both are empty,
    /// otherwise appended as-is. The no-`replace`-immediately-after rule is
    /// enforced by `push_replace` instead, since that's the only direction
    /// the adjacency can occur.
    pub fn push_replace_metadata(
        &mut self,
        remove: Vec<MetadataElement>,
        insert: Vec<MetadataElement>,
    ) -> Result<()> {
        if remove.is_empty() && insert.is_empty() {
            return Ok(());
        }
        self.ops.push(Op::ReplaceMetadata { remove, insert });
        Ok(())
    }

    /// `pushReplaceElementAttribute(key, from, to)`: emits only when
    /// `from != to`.
    pub fn push_replace_element_attribute(
        &mut self,
        key: impl Into<String>,
        from: Option<crate::attributes::AttributeValue>,
        to: Option<crate::attributes::AttributeValue>,
    ) {
        if from == to {
            return;
        }
        self.ops.push(Op::Attribute {
            key: key.into(),
            from,
            to,
        });
    }

    /// `pushAttributeChanges(changes, oldAttrs)`.
    pub fn push_attribute_changes(
        &mut self,
        changes: &crate::attributes::AttributeMap,
        old_attrs: &crate::attributes::AttributeMap,
    ) {
        for (key, to) in changes {
            let from = old_attrs.get(key).cloned();
            self.push_replace_element_attribute(key.clone(), from, Some(to.clone()));
        }
    }

    pub fn push_start_annotating(&mut self, method: AnnotateMethod, index: usize) {
        self.ops.push(Op::Annotate {
            method,
            bias: AnnotateBias::Start,
            index,
        });
    }

    pub fn push_stop_annotating(&mut self, method: AnnotateMethod, index: usize) {
        self.ops.push(Op::Annotate {
            method,
            bias: AnnotateBias::Stop,
            index,
        });
    }

    /// `pushFinalRetain(doc, offset, metaOffset?)`: appends whatever
    /// retain(s) are needed to reach the end of data and of trailing
    /// metadata, leaving nothing dangling.
    ///
    /// Plain `retain`/`replace` ops keep the metadata cursor implicitly in
    /// lock-step with the data cursor (a cell is consumed exactly when its
    /// data offset is), so by default — once this call's own data retain
    /// reaches `doc.len()` — only the one trailing cell (metadata has
    /// `data.len() + 1` cells) remains unaccounted for. `meta_offset` is an
    /// explicit override for constructors that deliberately diverged the
    /// two cursors (the dedicated metadata-axis constructors, which move
    /// the metadata cursor one cell past an `offset` the data cursor never
    /// reached).
    pub fn push_final_retain(
        &mut self,
        doc: &dyn Document,
        offset: usize,
        meta_offset: Option<usize>,
    ) -> Result<()> {
        let remaining = doc.len().saturating_sub(offset);
        self.push_retain(remaining as i64)?;

        let meta_offset = meta_offset.unwrap_or(doc.len());
        let meta_len = doc.metadata(None).len(); // cell_count, via full read
        let remaining_meta = meta_len.saturating_sub(meta_offset);
        if remaining_meta > 0 {
            self.push_retain_metadata(remaining_meta as i64)?;
        }
        Ok(())
    }

    /// `addSafeRemoveOps(doc, start, end, removeMetadata?)`.
    ///
    /// Removes `[start, end)` while stepping over undeletable nodes: emits
    /// `replace` only for deletable sub-ranges and `retain` for the
    /// undeletable opener/closer pairs it must skip over. Returns the
    /// actual end offset reached (which can differ from `end` when trailing
    /// undeletable closers were retained instead of removed).
    pub fn add_safe_remove_ops(
        &mut self,
        doc: &dyn Document,
        node_factory: &dyn NodeFactory,
        start: usize,
        end: usize,
    ) -> Result<usize> {
        let mut cursor = start;
        let mut pending_remove_start: Option<usize> = None;

        let flush = |builder: &mut Self, doc: &dyn Document, from: usize, to: usize| -> Result<()> {
            if to > from {
                builder.push_replace(doc, from, to - from, Vec::new(), None, None, None)?;
            }
            Ok(())
        };

        while cursor < end {
            let undeletable = doc.is_element_data(cursor)
                && doc
                    .element_type_at(cursor)
                    .map(|t| !node_factory.is_node_deletable(&t))
                    .unwrap_or(false);

            if undeletable {
                if let Some(from) = pending_remove_start.take() {
                    flush(self, doc, from, cursor)?;
                }
                self.push_retain(1)?;
                cursor += 1;
            } else {
                if pending_remove_start.is_none() {
                    pending_remove_start = Some(cursor);
                }
                cursor += 1;
            }
        }

        if let Some(from) = pending_remove_start {
            flush(self, doc, from, cursor)?;
        }

        Ok(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_doc::LinearDocument;

    #[test]
    fn push_retain_coalesces() {
        let mut b = TransactionBuilder::new();
        b.push_retain(2).unwrap();
        b.push_retain(3).unwrap();
        assert_eq!(b.ops(), &[Op::Retain { length: 5 }]);
    }

    #[test]
    fn push_retain_drops_zero() {
        let mut b = TransactionBuilder::new();
        b.push_retain(0).unwrap();
        assert!(b.ops().is_empty());
    }

    #[test]
    fn push_retain_rejects_negative() {
        let mut b = TransactionBuilder::new();
        assert!(b.push_retain(-1).is_err());
    }

    #[test]
    fn push_replace_coalesces_remove_after_remove() {
        let doc = LinearDocument::from_html_like("<p>abcd</p>");
        let mut b = TransactionBuilder::new();
        b.push_replace(&doc, 1, 1, Vec::new(), None, None, None)
            .unwrap();
        b.push_replace(&doc, 2, 1, Vec::new(), None, None, None)
            .unwrap();
        assert_eq!(b.ops().len(), 1);
        if let Op::Replace { remove, .. } = &b.ops()[0] {
            assert_eq!(remove.len(), 2);
        } else {
            panic!("expected replace");
        }
    }

    #[test]
    fn push_replace_merges_removed_metadata_ahead_of_an_insertion() {
        let doc = LinearDocument::with_metadata(
            vec![LinearItem::char('a'), LinearItem::char('b')],
            vec![
                Vec::new(),
                vec![MetadataElement::new("one")],
                vec![MetadataElement::new("two")],
            ],
        );
        let mut b = TransactionBuilder::new();
        b.push_replace(&doc, 1, 1, LinearItem::text("X"), None, None, None)
            .unwrap();
        match &b.ops()[0] {
            Op::Replace { insert_metadata, .. } => {
                let merged = insert_metadata.as_ref().expect("removed metadata should merge ahead of the insertion");
                assert_eq!(merged.len(), 1);
                assert_eq!(merged[0][0].name, "two");
            }
            other => panic!("expected replace, got {other:?}"),
        }
    }

    #[test]
    fn push_replace_merges_removed_metadata_into_trailing_cell_when_nothing_inserted() {
        let doc = LinearDocument::with_metadata(
            vec![LinearItem::char('a'), LinearItem::char('b')],
            vec![
                Vec::new(),
                vec![MetadataElement::new("one")],
                vec![MetadataElement::new("two")],
            ],
        );
        let mut b = TransactionBuilder::new();
        b.push_replace(&doc, 1, 1, Vec::new(), None, None, None)
            .unwrap();
        assert!(matches!(b.ops()[0], Op::Replace { .. }));
        assert!(matches!(b.ops()[1], Op::ReplaceMetadata { .. }));
        if let Op::ReplaceMetadata { insert, .. } = &b.ops()[1] {
            assert_eq!(insert[0].name, "two");
        }
    }

    #[test]
    fn push_replace_after_replace_metadata_errors() {
        let doc = LinearDocument::from_html_like("<p>abcd</p>");
        let mut b = TransactionBuilder::new();
        b.push_replace_metadata(Vec::new(), vec![MetadataElement::new("ref")])
            .unwrap();
        let err = b.push_replace(&doc, 1, 1, Vec::new(), None, None, None);
        assert!(err.is_err());
    }
}
