//! `newFromWrap`: unwraps an existing outer/each marker sequence and
//! re-wraps it with a new one, walking top-level depth transitions to find
//! each item's boundary.

use crate::builder::TransactionBuilder;
use crate::collaborators::{Document, Range};
use crate::data::LinearItem;
use crate::error::{Error, Result};
use crate::transaction::Transaction;
use quillai_log::debug_span;

/// Names the *type* of an existing marker a wrap/unwrap instruction expects
/// to find and remove. Only the type is needed — the actual `remove`
/// payload is always read from the live document (so current attributes
/// are preserved), never synthesized from this template.
#[derive(Debug, Clone)]
pub struct UnwrapSpec {
    pub element_type: String,
}

impl UnwrapSpec {
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
        }
    }
}

fn reverse_marker(item: &LinearItem) -> LinearItem {
    match item {
        LinearItem::Open { element_type, .. } => LinearItem::close(element_type.clone()),
        LinearItem::Close { element_type } => LinearItem::open(element_type.clone()),
        LinearItem::Char { .. } => item.clone(),
    }
}

fn verify_sequence(doc: &dyn Document, start: usize, specs: &[UnwrapSpec], position: &'static str) -> Result<()> {
    let found = doc.data(Some(Range::new(start, start + specs.len())));
    for (item, spec) in found.iter().zip(specs.iter()) {
        let found_type = item.element_type().unwrap_or("");
        if found_type != spec.element_type {
            return Err(Error::UnwrapMismatch {
                expected: spec.element_type.clone(),
                found: found_type.to_string(),
                position,
            });
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn new_from_wrap(
    doc: &dyn Document,
    range: Range,
    unwrap_outer: &[UnwrapSpec],
    wrap_outer: &[LinearItem],
    unwrap_each: &[UnwrapSpec],
    wrap_each: &[LinearItem],
) -> Result<Transaction> {
    let _span = debug_span!("new_from_wrap", start = range.start, end = range.end).entered();

    let range = range.normalized();
    if range.start < unwrap_outer.len() {
        return Err(Error::UnwrapMismatch {
            expected: unwrap_outer
                .first()
                .map(|s| s.element_type.clone())
                .unwrap_or_default(),
            found: String::new(),
            position: "before",
        });
    }

    let pre_start = range.start - unwrap_outer.len();
    verify_sequence(doc, pre_start, unwrap_outer, "before")?;

    let mut b = TransactionBuilder::new();
    b.push_retain(pre_start as i64)?;
    b.push_replace(doc, pre_start, unwrap_outer.len(), wrap_outer.to_vec(), None, None, None)?;

    let mut cursor = range.start;

    if !wrap_each.is_empty() || !unwrap_each.is_empty() {
        let mut depth: i32 = 0;
        let mut pos = range.start;
        while pos < range.end {
            if doc.is_open_element_data(pos) {
                if depth == 0 {
                    verify_sequence(doc, pos, unwrap_each, "inside")?;
                    b.push_retain((pos - cursor) as i64)?;
                    b.push_replace(doc, pos, unwrap_each.len(), wrap_each.to_vec(), None, None, None)?;
                    cursor = pos + unwrap_each.len();
                }
                depth += 1;
                pos += 1;
                continue;
            }
            if doc.is_close_element_data(pos) {
                depth -= 1;
                if depth == 0 {
                    let seg_start = pos + 1 - unwrap_each.len();
                    verify_sequence(doc, seg_start, unwrap_each, "inside")?;
                    b.push_retain((seg_start - cursor) as i64)?;
                    let reversed: Vec<LinearItem> = wrap_each.iter().rev().map(reverse_marker).collect();
                    b.push_replace(doc, seg_start, unwrap_each.len(), reversed, None, None, None)?;
                    cursor = pos + 1;
                }
                pos += 1;
                continue;
            }
            pos += 1;
        }
    }

    b.push_retain((range.end - cursor) as i64)?;
    let reversed_outer: Vec<LinearItem> = wrap_outer.iter().rev().map(reverse_marker).collect();
    b.push_replace(doc, range.end, unwrap_outer.len(), reversed_outer, None, None, None)?;
    let end = range.end + unwrap_outer.len();
    b.push_final_retain(doc, end, None)?;

    Ok(Transaction::from_builder(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeMap;
    use crate::attributes::AttributeValue;
    use crate::op::Op;
    use crate::reference_doc::LinearDocument;

    #[test]
    fn wrap_paragraphs_into_a_bulleted_list() {
        let doc = LinearDocument::from_html_like("<p>a</p><p>b</p>");
        let mut styles = AttributeMap::new();
        styles.insert(
            "styles".to_string(),
            AttributeValue::StringList(vec!["bullet".to_string()]),
        );

        let tx = new_from_wrap(
            &doc,
            Range::new(0, 6),
            &[],
            &[LinearItem::open("list")],
            &[],
            &[LinearItem::open_with("listItem", styles)],
        )
        .unwrap();

        let replaces: Vec<&Op> = tx
            .operations()
            .iter()
            .filter(|op| op.is_replace())
            .collect();
        assert_eq!(replaces.len(), 6);
        assert!(matches!(
            replaces[0],
            Op::Replace { insert, .. } if insert.len() == 1
                && insert[0].element_type() == Some("list")
                && insert[0].is_open()
        ));
        assert!(matches!(
            replaces[5],
            Op::Replace { insert, .. } if insert.len() == 1
                && insert[0].element_type() == Some("list")
                && insert[0].is_close()
        ));
    }

    #[test]
    fn mismatched_unwrap_prefix_errors() {
        let doc = LinearDocument::from_html_like("<p>a</p>");
        let result = new_from_wrap(
            &doc,
            Range::new(0, 3),
            &[UnwrapSpec::new("blockquote")],
            &[LinearItem::open("list")],
            &[],
            &[],
        );
        assert!(result.is_err());
    }
}
