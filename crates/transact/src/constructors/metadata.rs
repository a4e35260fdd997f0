//! `newFromMetadataInsertion`/`newFromMetadataRemoval`/
//! `newFromMetadataElementReplacement`.
//!
//! Metadata is addressed at cell granularity: each data offset (plus one
//! trailing position) owns a `Vec<MetadataElement>`, and a `replaceMetadata`
//! op always swaps a cell's *entire* contents. These three constructors
//! differ only in how they compute the replacement cell — splice in,
//! drain out, or overwrite one slot — and in all three cases the metadata
//! cursor ends up one cell ahead of the (unmoved) data cursor, which is
//! exactly what `push_final_retain`'s `meta_offset` override exists for.

use crate::builder::TransactionBuilder;
use crate::collaborators::{Document, Range};
use crate::data::MetadataElement;
use crate::error::{Error, Result};
use crate::transaction::Transaction;
use quillai_log::debug_span;

fn cell_at(doc: &dyn Document, offset: usize) -> Vec<MetadataElement> {
    doc.metadata(Some(Range::new(offset, offset + 1)))
        .into_iter()
        .next()
        .unwrap_or_default()
}

pub fn new_from_metadata_insertion(
    doc: &dyn Document,
    offset: usize,
    index: usize,
    elements: Vec<MetadataElement>,
) -> Result<Transaction> {
    let _span = debug_span!("new_from_metadata_insertion", offset, index).entered();

    let cell = cell_at(doc, offset);
    if index > cell.len() {
        return Err(Error::MetadataBounds {
            index,
            cell_len: cell.len(),
        });
    }

    let mut new_cell = cell.clone();
    new_cell.splice(index..index, elements);

    let mut b = TransactionBuilder::new();
    b.push_retain(offset as i64)?;
    b.push_replace_metadata(cell, new_cell)?;
    b.push_final_retain(doc, offset, Some(offset + 1))?;

    Ok(Transaction::from_builder(b))
}

pub fn new_from_metadata_removal(
    doc: &dyn Document,
    offset: usize,
    index: usize,
    count: usize,
) -> Result<Transaction> {
    let _span = debug_span!("new_from_metadata_removal", offset, index, count).entered();

    let cell = cell_at(doc, offset);
    if cell.is_empty() {
        return Err(Error::EmptyMetadata { offset });
    }
    if index + count > cell.len() {
        return Err(Error::MetadataBounds {
            index,
            cell_len: cell.len(),
        });
    }

    let mut new_cell = cell.clone();
    new_cell.drain(index..index + count);

    let mut b = TransactionBuilder::new();
    b.push_retain(offset as i64)?;
    b.push_replace_metadata(cell, new_cell)?;
    b.push_final_retain(doc, offset, Some(offset + 1))?;

    Ok(Transaction::from_builder(b))
}

pub fn new_from_metadata_element_replacement(
    doc: &dyn Document,
    offset: usize,
    index: usize,
    element: MetadataElement,
) -> Result<Transaction> {
    let _span = debug_span!("new_from_metadata_element_replacement", offset, index).entered();

    let cell = cell_at(doc, offset);
    if index >= cell.len() {
        return Err(Error::MetadataBounds {
            index,
            cell_len: cell.len(),
        });
    }

    let mut new_cell = cell.clone();
    new_cell[index] = element;

    let mut b = TransactionBuilder::new();
    b.push_retain(offset as i64)?;
    b.push_replace_metadata(cell, new_cell)?;
    b.push_final_retain(doc, offset, Some(offset + 1))?;

    Ok(Transaction::from_builder(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::Op;
    use crate::reference_doc::LinearDocument;

    #[test]
    fn insertion_into_empty_cell() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        let tx = new_from_metadata_insertion(&doc, 1, 0, vec![MetadataElement::new("comment")]).unwrap();
        assert!(tx.has_operation_with_type(|op| matches!(
            op,
            Op::ReplaceMetadata { insert, .. } if insert.len() == 1
        )));
    }

    #[test]
    fn removal_out_of_bounds_errors() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        assert!(new_from_metadata_removal(&doc, 1, 0, 1).is_err());
    }

    #[test]
    fn removal_from_empty_cell_errors() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        assert!(matches!(
            new_from_metadata_removal(&doc, 1, 0, 0),
            Err(Error::EmptyMetadata { offset: 1 })
        ));
    }

    #[test]
    fn element_replacement_round_trip() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        let tx = new_from_metadata_insertion(&doc, 1, 0, vec![MetadataElement::new("a")]).unwrap();
        assert!(tx.has_operation_with_type(|op| op.is_replace_metadata()));

        let replaced = new_from_metadata_element_replacement(&doc, 1, 0, MetadataElement::new("b"));
        // offset 1 is empty in the base doc, so index 0 is out of bounds
        // until an insertion has actually happened on a *live* document —
        // this constructor only reasons about the document it's given.
        assert!(replaced.is_err());
    }
}
