//! `Transaction`: an ordered operation list plus its apply-once latch.

use std::cell::Cell;

use crate::builder::TransactionBuilder;
use crate::collaborators::{Document, Range};
use crate::op::Op;

/// A reversible, rebaseable change to a document.
///
/// `applied` is a latch, not data: two transactions with the same
/// `operations` but different `applied` state still compare equal via
/// `operations`, which is why `Transaction` implements `PartialEq` by hand
/// against `operations` only. Cloning likewise resets the latch — a clone
/// hasn't been applied to anything yet, regardless of the original's state.
#[derive(Debug)]
pub struct Transaction {
    operations: Vec<Op>,
    applied: Cell<bool>,
}

impl Transaction {
    pub fn new(operations: Vec<Op>) -> Self {
        Self {
            operations,
            applied: Cell::new(false),
        }
    }

    pub fn from_builder(builder: TransactionBuilder) -> Self {
        Self::new(builder.into_ops())
    }

    pub fn operations(&self) -> &[Op] {
        &self.operations
    }

    /// True when every op is a no-op retain (or the list is empty) — a
    /// transaction that changes nothing.
    pub fn is_no_op(&self) -> bool {
        self.operations
            .iter()
            .all(|op| matches!(op, Op::Retain { .. } | Op::RetainMetadata { .. }))
    }

    pub fn has_operation_with_type(&self, pred: impl Fn(&Op) -> bool) -> bool {
        self.operations.iter().any(pred)
    }

    pub fn has_been_applied(&self) -> bool {
        self.applied.get()
    }

    pub fn mark_as_applied(&self) {
        self.applied.set(true);
    }

    /// The inverse transaction: every op reversed, same order. The result
    /// is fresh, so `has_been_applied()` on it is false regardless of
    /// `self`'s latch state.
    pub fn reversed(&self) -> Transaction {
        Transaction::new(self.operations.iter().map(Op::reversed).collect())
    }

    /// `translateOffset(offset, excludeInsertion)`.
    ///
    /// Maps an offset in the document this transaction applies *to*, to the
    /// corresponding offset in the document it produces. Offsets that land
    /// strictly inside a removed-and-replaced span are clamped to the near
    /// edge of the inserted content: the start edge when `exclude_insertion`
    /// is set (the caller wants a position that does not include the new
    /// insertion), the far edge otherwise.
    pub fn translate_offset(&self, offset: usize, exclude_insertion: bool) -> usize {
        let mut old_offset = 0usize;
        let mut new_offset = 0usize;

        for op in &self.operations {
            match op {
                Op::Retain { length } => {
                    if offset < old_offset + length {
                        return new_offset + (offset - old_offset);
                    }
                    old_offset += length;
                    new_offset += length;
                }
                Op::Replace { remove, insert, .. } => {
                    let remove_len = remove.len();
                    let insert_len = insert.len();
                    if offset == old_offset {
                        return new_offset;
                    }
                    if offset < old_offset + remove_len {
                        return if exclude_insertion {
                            new_offset
                        } else {
                            new_offset + insert_len
                        };
                    }
                    // Offset sits exactly at the end of the removed span
                    // (the start of the insertion). If the caller wants a
                    // position excluding the insertion and this replacement
                    // actually grows the document, snap to before it;
                    // otherwise fall through to the ordinary post-replace
                    // position (after the insertion).
                    if offset == old_offset + remove_len && exclude_insertion && insert_len > remove_len {
                        return new_offset;
                    }
                    old_offset += remove_len;
                    new_offset += insert_len;
                }
                Op::RetainMetadata { .. }
                | Op::ReplaceMetadata { .. }
                | Op::Attribute { .. }
                | Op::Annotate { .. } => {}
            }
        }

        new_offset + offset.saturating_sub(old_offset)
    }

    /// `translateRange(range, excludeInsertion)`: translates both endpoints
    /// independently, preserving the input's orientation.
    pub fn translate_range(&self, range: Range, exclude_insertion: bool) -> Range {
        Range::new(
            self.translate_offset(range.start, exclude_insertion),
            self.translate_offset(range.end, exclude_insertion),
        )
    }

    /// `getModifiedRange(doc)`: the smallest range in the *output* document
    /// spanning every actual change this transaction makes, ignoring
    /// changes confined entirely to `doc`'s internal list region.
    pub fn get_modified_range(&self, doc: &dyn Document) -> Range {
        let mut old_offset = 0usize;
        let mut new_offset = 0usize;
        let mut lo: Option<usize> = None;
        let mut hi: Option<usize> = None;

        let mut touch = |a: usize, b: usize| {
            lo = Some(lo.map_or(a, |l| l.min(a)));
            hi = Some(hi.map_or(b, |h| h.max(b)));
        };

        for op in &self.operations {
            match op {
                Op::Retain { length } => {
                    old_offset += length;
                    new_offset += length;
                }
                Op::Replace { remove, insert, .. } => {
                    if remove != insert {
                        touch(new_offset, new_offset + insert.len());
                    }
                    old_offset += remove.len();
                    new_offset += insert.len();
                }
                Op::Attribute { from, to, .. } => {
                    if from != to {
                        touch(new_offset, new_offset + 1);
                    }
                }
                Op::Annotate { .. } => {
                    touch(new_offset, new_offset + 1);
                }
                Op::RetainMetadata { .. } | Op::ReplaceMetadata { .. } => {}
            }
        }

        let (lo, hi) = match (lo, hi) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => return Range::new(new_offset, new_offset),
        };

        let internal = doc.internal_list_range();
        let internal_translated = self.translate_range(internal, true).normalized();
        if lo >= internal_translated.start && hi <= internal_translated.end {
            return Range::new(new_offset, new_offset);
        }

        Range::new(lo, hi)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.operations).unwrap_or(serde_json::Value::Null)
    }
}

impl Clone for Transaction {
    /// Clones carry the same operations but a fresh, unset `applied` latch.
    fn clone(&self) -> Self {
        Transaction::new(self.operations.clone())
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.operations == other.operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_doc::LinearDocument;

    #[test]
    fn clone_resets_applied_latch() {
        let tx = Transaction::new(vec![Op::retain(3)]);
        tx.mark_as_applied();
        assert!(tx.has_been_applied());
        let cloned = tx.clone();
        assert!(!cloned.has_been_applied());
    }

    #[test]
    fn reversed_twice_is_equal() {
        let tx = Transaction::new(vec![
            Op::retain(2),
            Op::replace(crate::data::LinearItem::text("a"), crate::data::LinearItem::text("xy")),
        ]);
        assert_eq!(tx.reversed().reversed(), tx);
    }

    #[test]
    fn translate_offset_follows_insertion_growth() {
        let tx = Transaction::new(vec![
            Op::retain(2),
            Op::replace(Vec::new(), crate::data::LinearItem::text("ab")),
            Op::retain(3),
        ]);
        assert_eq!(tx.translate_offset(0, false), 0);
        assert_eq!(tx.translate_offset(2, false), 4);
        assert_eq!(tx.translate_offset(5, false), 7);
    }

    #[test]
    fn translate_offset_excludes_insertion_at_end_of_a_growing_replace() {
        let tx = Transaction::new(vec![
            Op::retain(2),
            Op::replace(crate::data::LinearItem::text("abc"), crate::data::LinearItem::text("ABCDE")),
            Op::retain(5),
        ]);
        // 5 sits exactly at the end of the 3-item removal (the start of the
        // 5-item insertion). excludeInsertion asks for the position before
        // the growth, not after it.
        assert_eq!(tx.translate_offset(5, true), 2);
        // Without excludeInsertion the same offset lands after the growth.
        assert_eq!(tx.translate_offset(5, false), 7);
    }

    #[test]
    fn translate_offset_same_boundary_when_replace_shrinks() {
        let tx = Transaction::new(vec![
            Op::retain(2),
            Op::replace(crate::data::LinearItem::text("abcde"), crate::data::LinearItem::text("X")),
            Op::retain(5),
        ]);
        // The replace shrinks (insert_len < remove_len), so the "snap
        // before insertion" special case does not apply even with
        // excludeInsertion set: the boundary resolves to the ordinary
        // post-replace position.
        assert_eq!(tx.translate_offset(7, true), 3);
    }

    #[test]
    fn is_no_op_true_for_pure_retain() {
        let tx = Transaction::new(vec![Op::retain(4), Op::retain_metadata(1)]);
        assert!(tx.is_no_op());
    }

    #[test]
    fn get_modified_range_ignores_internal_list_only_changes() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        let tx = Transaction::new(vec![Op::retain(doc.len())]);
        let range = tx.get_modified_range(&doc);
        assert!(range.is_collapsed());
    }
}
