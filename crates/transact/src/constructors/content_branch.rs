//! `newFromContentBranchConversion`: retypes the enclosing content branch of
//! every leaf touched by `range` to `element_type`, merging in `attr`. A
//! branch visited through more than one leaf is only edited once.

use crate::attributes::AttributeMap;
use crate::builder::TransactionBuilder;
use crate::collaborators::{Document, NodeFactory, Range, SelectMode};
use crate::data::LinearItem;
use crate::error::Result;
use crate::transaction::Transaction;
use quillai_log::debug_span;
use std::collections::BTreeSet;

pub fn new_from_content_branch_conversion(
    doc: &dyn Document,
    node_factory: &dyn NodeFactory,
    range: Range,
    element_type: &str,
    attr: &AttributeMap,
) -> Result<Transaction> {
    let _span =
        debug_span!("new_from_content_branch_conversion", start = range.start, end = range.end).entered();

    let range = range.normalized();
    let leaves = doc.select_nodes(range, SelectMode::Leaves);

    let mut seen_starts = BTreeSet::new();
    let mut branches = Vec::new();
    for leaf in &leaves {
        if let Some(branch) = doc.content_branch_at(leaf.outer_range.start, node_factory) {
            if seen_starts.insert(branch.outer_range.start) {
                branches.push(branch);
            }
        }
    }
    branches.sort_by_key(|b| b.outer_range.start);

    let mut b = TransactionBuilder::new();
    let mut cursor = 0usize;

    for branch in &branches {
        b.push_retain((branch.outer_range.start - cursor) as i64)?;

        let open_item = doc
            .data(Some(Range::new(branch.outer_range.start, branch.outer_range.start + 1)))
            .into_iter()
            .next();
        let old_attrs = open_item
            .as_ref()
            .and_then(|item| item.attributes().cloned())
            .unwrap_or_default();
        let same_type = branch.element_type == element_type;
        let attrs_already_match = attr.iter().all(|(k, v)| old_attrs.get(k) == Some(v));

        if same_type && attrs_already_match {
            // No edit needed; the branch's span gets swept into the next
            // retain (or the final one) untouched.
        } else if same_type {
            b.push_attribute_changes(attr, &old_attrs);
            b.push_retain((branch.outer_range.end - branch.outer_range.start) as i64)?;
        } else {
            b.push_replace(
                doc,
                branch.outer_range.start,
                1,
                vec![LinearItem::open_with(element_type, attr.clone())],
                None,
                None,
                None,
            )?;
            b.push_retain((branch.range.end - branch.range.start) as i64)?;
            b.push_replace(
                doc,
                branch.range.end,
                1,
                vec![LinearItem::close(element_type)],
                None,
                None,
                None,
            )?;
        }

        cursor = branch.outer_range.end;
    }

    b.push_final_retain(doc, cursor, None)?;

    Ok(Transaction::from_builder(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::Op;
    use crate::reference_doc::{LinearDocument, SimpleNodeFactory};

    #[test]
    fn converts_paragraph_to_heading() {
        let doc = LinearDocument::from_html_like("<p>abc</p>");
        let nf = SimpleNodeFactory::new();

        let tx = new_from_content_branch_conversion(&doc, &nf, Range::new(1, 2), "heading", &AttributeMap::new())
            .unwrap();

        assert!(tx.has_operation_with_type(|op| matches!(
            op,
            Op::Replace { insert, .. } if insert.len() == 1 && insert[0].element_type() == Some("heading")
        )));
    }

    #[test]
    fn already_matching_branch_is_untouched() {
        let doc = LinearDocument::from_html_like("<p>abc</p>");
        let nf = SimpleNodeFactory::new();

        let tx = new_from_content_branch_conversion(&doc, &nf, Range::new(1, 2), "p", &AttributeMap::new()).unwrap();
        assert!(!tx.operations().iter().any(|op| op.is_replace()));
    }

    #[test]
    fn shared_branch_is_edited_once_across_multiple_leaves() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        let nf = SimpleNodeFactory::new();

        let tx = new_from_content_branch_conversion(&doc, &nf, Range::new(0, 4), "heading", &AttributeMap::new())
            .unwrap();
        let opens = tx
            .operations()
            .iter()
            .filter(|op| matches!(op, Op::Replace { insert, .. } if insert.iter().any(|i| i.is_open())))
            .count();
        assert_eq!(opens, 1);
    }
}
