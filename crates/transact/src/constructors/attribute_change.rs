//! `newFromAttributeChanges`: diffs two attribute maps into `attribute` ops.

use crate::attributes::AttributeMap;
use crate::builder::TransactionBuilder;
use crate::collaborators::Document;
use crate::error::{Error, Result};
use crate::transaction::Transaction;
use quillai_log::debug_span;

/// Changes attributes on the opening element marker at `offset`. Errors if
/// the data there isn't an opening marker.
pub fn new_from_attribute_changes(
    doc: &dyn Document,
    offset: usize,
    attr: &AttributeMap,
) -> Result<Transaction> {
    let _span = debug_span!("new_from_attribute_changes", offset).entered();

    if !doc.is_open_element_data(offset) {
        return Err(Error::InvalidAttributeTarget { offset });
    }

    let old_attrs = doc
        .data(Some(crate::collaborators::Range::new(offset, offset + 1)))
        .into_iter()
        .next()
        .and_then(|item| item.attributes().cloned())
        .unwrap_or_default();

    let mut b = TransactionBuilder::new();
    b.push_retain(offset as i64)?;
    b.push_attribute_changes(attr, &old_attrs);
    b.push_final_retain(doc, offset, None)?;

    Ok(Transaction::from_builder(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeValue;
    use crate::data::LinearItem;
    use crate::op::{AnnotateBias, Op};
    use crate::reference_doc::LinearDocument;

    #[test]
    fn attribute_change_on_heading() {
        let mut attrs = AttributeMap::new();
        attrs.insert("level".to_string(), AttributeValue::Number(1));
        let doc = LinearDocument::new(vec![
            LinearItem::open_with("heading", attrs),
            LinearItem::char('x'),
            LinearItem::close("heading"),
        ]);

        let mut change = AttributeMap::new();
        change.insert("level".to_string(), AttributeValue::Number(2));

        let tx = new_from_attribute_changes(&doc, 0, &change).unwrap();
        // A leading zero-length retain is elided, so the attribute op comes first.
        assert_eq!(
            tx.operations()[0],
            Op::Attribute {
                key: "level".to_string(),
                from: Some(AttributeValue::Number(1)),
                to: Some(AttributeValue::Number(2)),
            },
        );
        let _ = AnnotateBias::Start; // keep import used across feature combos
    }

    #[test]
    fn errors_on_non_element_offset() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        assert!(new_from_attribute_changes(&doc, 1, &AttributeMap::new()).is_err());
    }

    #[test]
    fn errors_on_close_marker_offset() {
        let doc = LinearDocument::from_html_like("<p>ab</p>");
        assert!(new_from_attribute_changes(&doc, 3, &AttributeMap::new()).is_err());
    }
}
