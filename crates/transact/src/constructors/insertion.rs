//! `newFromInsertion`: inserts a slice of data at a single offset.

use crate::builder::TransactionBuilder;
use crate::collaborators::Document;
use crate::data::LinearItem;
use crate::error::Result;
use crate::transaction::Transaction;
use quillai_log::debug_span;

/// Inserts `data` at `offset`, deferring to `doc.fixup_insertion` for any
/// re-seating or wrapper padding needed to keep the tree valid (e.g.
/// inserting bare text into a position that requires a paragraph wrapper).
pub fn new_from_insertion(doc: &dyn Document, offset: usize, data: Vec<LinearItem>) -> Result<Transaction> {
    let _span = debug_span!("new_from_insertion", offset).entered();

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
    use crate::op::Op;
    use crate::reference_doc::LinearDocument;

    #[test]
    fn insertion_at_a_point_no_fixup_needed() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        let tx = new_from_insertion(&doc, 2, LinearItem::text("x")).unwrap();
        assert_eq!(
            tx.operations(),
            &[
                Op::retain(2),
                Op::replace(Vec::new(), LinearItem::text("x")),
                Op::retain(2),
                Op::retain_metadata(1),
            ]
        );
    }
}
