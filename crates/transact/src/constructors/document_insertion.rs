//! `newFromDocumentInsertion`: splices a slice of one document into another
//! at `offset`.
//!
//! `Store::merge`/`InternalList::merge` are declared `where Self: Sized` —
//! they are genuinely not object-safe, unlike every other collaborator
//! method in this crate — so unlike the rest of `src/constructors/*.rs`
//! this one is generic over the concrete store and internal-list types
//! rather than taking `&dyn Store`/`&dyn InternalList`.
//!
//! When `other_doc` *is* `doc` (copying a selection within itself) the
//! caller passes `same_document: true` and the store/internal-list merge is
//! skipped entirely — there is nothing to remap, every annotation id the
//! copied data already carries is valid in `store` as-is.

use crate::builder::TransactionBuilder;
use crate::collaborators::{Document, InternalList, Range, Store};
use crate::data::{AnnotationSet, LinearItem};
use crate::error::Result;
use crate::transaction::Transaction;
use quillai_log::debug_span;

fn remap_annotations(data: Vec<LinearItem>, mapping: &std::collections::BTreeMap<usize, usize>) -> Vec<LinearItem> {
    data.into_iter()
        .map(|item| match item {
            LinearItem::Char { value, annotations } => {
                let remapped = annotations
                    .ids()
                    .filter_map(|id| mapping.get(id).copied())
                    .collect::<Vec<_>>();
                LinearItem::Char {
                    value,
                    annotations: AnnotationSet::from_ids(remapped),
                }
            }
            other => other,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn new_from_document_insertion<S: Store, L: InternalList>(
    doc: &dyn Document,
    offset: usize,
    store: &mut S,
    internal_list: &mut L,
    other_doc: &dyn Document,
    other_store: &S,
    other_internal_list: &L,
    other_range: Option<Range>,
    same_document: bool,
) -> Result<Transaction> {
    let _span = debug_span!("new_from_document_insertion", offset, same_document).entered();

    let copy_range = other_range.unwrap_or_else(|| Range::new(0, other_doc.len()));
    let mut data = other_doc.data(Some(copy_range));

    if !same_document {
        let mapping = store.merge(other_store);
        data = remap_annotations(data, &mapping);
        // The merged ranges (`merge_result.new_item_ranges`) describe where
        // `other_internal_list`'s entries landed in `internal_list`'s own
        // coordinates; this crate has no internal-list-reference `LinearItem`
        // variant of its own to rewrite against them; it exists purely to
        // keep the caller's internal list consistent afterward.
        let _merge_result = internal_list.merge(other_internal_list, doc.internal_list_range().start);
    }

    // Whether `offset` lands at the very start, the very end, or strictly
    // inside an existing content node changes what padding is needed to
    // keep the tree balanced; `fixup_insertion` is the document's own call
    // to make, so this constructor never branches on position itself.
    let fixup = doc.fixup_insertion(data, offset);

    let mut b = TransactionBuilder::new();
    b.push_retain(fixup.offset as i64)?;
    b.push_replace(
        doc,
        fixup.offset,
        fixup.remove,
        fixup.data,
        None,
        Some(fixup.inserted_data_offset),
        Some(fixup.inserted_data_length),
    )?;
    let end = fixup.offset + fixup.remove;
    b.push_final_retain(doc, end, None)?;

    Ok(Transaction::from_builder(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Annotation;
    use crate::reference_doc::{LinearDocument, VecStore};

    #[test]
    fn insertion_from_distinct_document_remaps_annotation_ids() {
        let source = LinearDocument::new(vec![LinearItem::Char {
            value: 'x',
            annotations: AnnotationSet::from_ids([0]),
        }]);
        let mut source_store = VecStore::default();
        source_store.index(Annotation::new("bold"));

        let dest = LinearDocument::from_html_like("<p>ab</p>");
        let mut dest_store = VecStore::default();
        dest_store.index(Annotation::new("italic"));
        let mut dest_list = crate::reference_doc::TailInternalList::default();
        let source_list = crate::reference_doc::TailInternalList::default();

        let tx = new_from_document_insertion(
            &dest,
            2,
            &mut dest_store,
            &mut dest_list,
            &source,
            &source_store,
            &source_list,
            None,
            false,
        )
        .unwrap();

        assert!(tx.has_operation_with_type(|op| op.is_replace()));
        // "bold" merged into a store that already had "italic" at slot 0
        // must land at a different slot, and the copied char must follow.
        assert_eq!(dest_store.get(1), Some(&Annotation::new("bold")));
    }

    #[test]
    fn insertion_within_same_document_skips_store_merge() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        let mut store = VecStore::default();
        let mut list = crate::reference_doc::TailInternalList::default();
        let store_snapshot = store.clone();
        let list_snapshot = list.clone();

        let tx = new_from_document_insertion(
            &doc,
            2,
            &mut store,
            &mut list,
            &doc,
            &store_snapshot,
            &list_snapshot,
            Some(Range::new(1, 2)),
            true,
        )
        .unwrap();

        assert!(tx.has_operation_with_type(|op| op.is_replace()));
    }
}
