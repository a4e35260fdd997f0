//! `newFromReplacement`: removal then insertion at the offset the removal
//! reached.

use crate::builder::TransactionBuilder;
use crate::collaborators::{Document, NodeFactory, Range};
use crate::constructors::removal::push_removal;
use crate::data::{LinearItem, MetadataElement};
use crate::error::Result;
use crate::op::Op;
use crate::transaction::Transaction;
use quillai_log::debug_span;

pub fn new_from_replacement(
    doc: &dyn Document,
    node_factory: &dyn NodeFactory,
    range: Range,
    data: Vec<LinearItem>,
    insert_metadata_override: Option<Vec<Vec<MetadataElement>>>,
) -> Result<Transaction> {
    let _span = debug_span!("new_from_replacement", start = range.start, end = range.end).entered();

    let mut b = TransactionBuilder::new();
    let removal_end = push_removal(&mut b, doc, node_factory, range)?;

    let fixup = doc.fixup_insertion(data, removal_end);
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

    let mut ops = b.into_ops();
    if let Some(custom) = insert_metadata_override {
        if let Some(Op::Replace { insert_metadata, .. }) =
            ops.iter_mut().rev().find(|op| op.is_replace())
        {
            *insert_metadata = Some(custom);
        }
    }

    Ok(Transaction::new(ops))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_doc::{LinearDocument, SimpleNodeFactory};

    #[test]
    fn replacement_removes_then_inserts() {
        let doc = LinearDocument::from_html_like("<p>abcd</p>");
        let nf = SimpleNodeFactory::new();
        let tx = new_from_replacement(&doc, &nf, Range::new(1, 3), LinearItem::text("X"), None).unwrap();
        assert!(tx.has_operation_with_type(|op| matches!(op, Op::Replace { insert, .. } if insert == &LinearItem::text("X"))));
    }
}
