//! `newFromRemoval` and its `pushRemoval` helper.

use crate::builder::TransactionBuilder;
use crate::collaborators::{Document, NodeFactory, Range, SelectMode};
use crate::data::{LinearItem, MetadataElement};
use crate::error::{Error, Result};
use crate::op::Op;
use crate::transaction::Transaction;
use quillai_log::debug_span;

/// Removes `range`, stepping around undeletable nodes and merging
/// mergeable partial endpoints. Returns the end offset the removal
/// actually reached (used by `newFromReplacement` to know where to start
/// its insertion).
///
/// `select_nodes(range, "covered")` enumerates every node the range
/// touches. A single covered node is removed in full (its outer range) or,
/// if the range only partially overlaps it, just its covered content. With
/// several covered nodes, a non-partial one in the middle is removed whole;
/// a partial endpoint is content-stripped and its own opener/closer marker
/// survives — *unless* the two endpoints are `nodes_mergeable`, in which
/// case the boundary markers between them are removed too, splicing the
/// endpoints' surviving content into one node.
pub fn push_removal(
    b: &mut TransactionBuilder,
    doc: &dyn Document,
    node_factory: &dyn NodeFactory,
    range: Range,
) -> Result<usize> {
    let range = range.normalized();
    let nodes = doc.select_nodes(range, SelectMode::Covered);

    if nodes.is_empty() {
        if range.is_collapsed() {
            return Ok(range.start);
        }
        return Err(Error::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }

    let first = &nodes[0];
    let last = &nodes[nodes.len() - 1];
    let mergeable = nodes.len() > 1
        && first.is_partial
        && last.is_partial
        && node_factory.nodes_mergeable(&first.element_type, &last.element_type);

    let start = if first.is_partial {
        range.start.max(first.range.start)
    } else {
        first.outer_range.start
    };
    let end = if last.is_partial {
        range.end.min(last.range.end)
    } else {
        last.outer_range.end
    };

    b.push_retain(start as i64)?;

    if mergeable || nodes.len() == 1 {
        return b.add_safe_remove_ops(doc, node_factory, start, end);
    }

    let mut cursor = start;
    for (i, node) in nodes.iter().enumerate() {
        let is_first = i == 0;
        let is_last = i == nodes.len() - 1;

        if is_first && node.is_partial {
            cursor = b.add_safe_remove_ops(doc, node_factory, cursor, node.range.end)?;
            b.push_retain(1)?; // the node's own closer, preserved
            cursor = node.range.end + 1;
        } else if is_last && node.is_partial {
            if cursor < node.outer_range.start {
                cursor = b.add_safe_remove_ops(doc, node_factory, cursor, node.outer_range.start)?;
            }
            b.push_retain(1)?; // the node's own opener, preserved
            cursor = node.outer_range.start + 1;
            cursor = b.add_safe_remove_ops(doc, node_factory, cursor, end)?;
        } else {
            let seg_end = if is_last { end } else { node.outer_range.end };
            cursor = b.add_safe_remove_ops(doc, node_factory, cursor, seg_end)?;
        }
    }

    Ok(cursor)
}

/// Removes `range`. If the removal spans from offset 0 through at least the
/// start of the internal list, an empty `{paragraph}{/paragraph}` is
/// inserted at the removal point so the document is never left completely
/// empty.
pub fn new_from_removal(
    doc: &dyn Document,
    node_factory: &dyn NodeFactory,
    range: Range,
    insert_metadata_override: Option<Vec<Vec<MetadataElement>>>,
) -> Result<Transaction> {
    let _span = debug_span!("new_from_removal", start = range.start, end = range.end).entered();

    let normalized = range.normalized();
    let mut b = TransactionBuilder::new();
    let end = push_removal(&mut b, doc, node_factory, range)?;

    if normalized.start == 0 && end >= doc.internal_list_range().start {
        b.push_replace(
            doc,
            end,
            0,
            vec![LinearItem::open("paragraph"), LinearItem::close("paragraph")],
            None,
            None,
            None,
        )?;
    }

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
    use crate::reference_doc::LinearDocument;
    use crate::reference_doc::SimpleNodeFactory;

    #[test]
    fn removal_of_inline_range() {
        let doc = LinearDocument::from_html_like("<p>abc</p>");
        let nf = SimpleNodeFactory::new();
        let tx = new_from_removal(&doc, &nf, Range::new(1, 3), None).unwrap();
        assert_eq!(
            tx.operations()[..2],
            [
                Op::retain(1),
                Op::replace(LinearItem::text("ab"), Vec::new()),
            ]
        );
    }

    #[test]
    fn removing_whole_document_inserts_empty_paragraph() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        let nf = SimpleNodeFactory::new();
        let tx = new_from_removal(&doc, &nf, Range::new(0, doc.len()), None).unwrap();
        let has_paragraph_insert = tx.operations().iter().any(|op| match op {
            Op::Replace { insert, .. } => {
                insert.len() == 2 && insert[0].is_open() && insert[1].is_close()
            }
            _ => false,
        });
        assert!(has_paragraph_insert);
    }

    #[test]
    fn removal_of_empty_range_on_empty_selection_is_not_an_error() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        let nf = SimpleNodeFactory::new();
        assert!(new_from_removal(&doc, &nf, Range::new(2, 2), None).is_ok());
    }
}
