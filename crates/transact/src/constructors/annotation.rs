//! `newFromAnnotation`.
//!
//! A single linear scan over `[range.start, range.end)` that toggles
//! `annotate` spans on and off as eligibility changes. `set` skips
//! positions already covered by a *comparable* annotation; `clear` only
//! touches positions holding the *exact* annotation — a deliberate
//! asymmetry, reproduced as-is rather than reconciled (see DESIGN.md). This
//! crate's `LinearItem::Char` is the only variant carrying an
//! `AnnotationSet`, so only characters ever toggle; content-node openings
//! still gate `insideContentNode`/`ignoreChildren` bookkeeping for the
//! chars beneath them but are never themselves wrapped (see DESIGN.md for
//! why — `LinearItem::Open` carries no annotation set of its own in this
//! crate's data model).

use crate::builder::TransactionBuilder;
use crate::collaborators::{Document, NodeFactory, Range};
use crate::data::{Annotation, AnnotationId, LinearItem};
use crate::error::Result;
use crate::op::AnnotateMethod;
use crate::transaction::Transaction;
use quillai_log::debug_span;

/// `index` must already be a resolved store slot for `annotation` (callers
/// allocate it via `Store::index` before calling in; the store is mutated
/// only by `newFromDocumentInsertion`, so this constructor stays pure and
/// only *reads* the store through `lookup`).
pub fn new_from_annotation(
    doc: &dyn Document,
    node_factory: &dyn NodeFactory,
    lookup: impl Fn(AnnotationId) -> Option<Annotation>,
    range: Range,
    method: AnnotateMethod,
    annotation: &Annotation,
    index: AnnotationId,
) -> Result<Transaction> {
    let _span = debug_span!("new_from_annotation", start = range.start, end = range.end).entered();

    let range = range.normalized();
    let items = doc.data(Some(range));

    let mut b = TransactionBuilder::new();
    b.push_retain(range.start as i64)?;

    let mut stack: Vec<bool> = Vec::new(); // should_ignore_children per open ancestor
    let mut ignore_depth = 0usize;
    let mut on = false;

    for item in &items {
        let eligible = match item {
            LinearItem::Char { annotations, .. } => {
                if ignore_depth > 0 {
                    false
                } else {
                    match method {
                        AnnotateMethod::Set => !annotations.contains_comparable(&lookup, annotation),
                        AnnotateMethod::Clear => annotations.contains(index),
                    }
                }
            }
            LinearItem::Open { element_type, .. } => {
                let should_ignore = node_factory.should_ignore_children(element_type);
                let elig = ignore_depth == 0
                    && method == AnnotateMethod::Set
                    && node_factory.is_node_content(element_type)
                    && node_factory.can_node_take_annotation_type(element_type, annotation);
                stack.push(should_ignore);
                if should_ignore {
                    ignore_depth += 1;
                }
                elig
            }
            LinearItem::Close { .. } => {
                if let Some(should_ignore) = stack.pop() {
                    if should_ignore {
                        ignore_depth = ignore_depth.saturating_sub(1);
                    }
                }
                false
            }
        };

        if eligible != on {
            if on {
                b.push_stop_annotating(method, index);
            } else {
                b.push_start_annotating(method, index);
            }
            on = eligible;
        }
        b.push_retain(1)?;
    }

    if on {
        b.push_stop_annotating(method, index);
    }

    b.push_final_retain(doc, range.end, None)?;

    Ok(Transaction::from_builder(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AnnotationSet, LinearItem};
    use crate::op::{AnnotateBias, Op};
    use crate::reference_doc::{LinearDocument, SimpleNodeFactory};

    #[test]
    fn skips_already_annotated_middle_character() {
        let bold = Annotation::new("bold");
        let store = vec![bold.clone()];
        let doc = LinearDocument::new(vec![
            LinearItem::open("p"),
            LinearItem::char('a'),
            LinearItem::Char {
                value: 'b',
                annotations: AnnotationSet::from_ids([0]),
            },
            LinearItem::char('c'),
            LinearItem::close("p"),
        ]);
        let nf = SimpleNodeFactory::new();

        let tx = new_from_annotation(
            &doc,
            &nf,
            |id| store.get(id).cloned(),
            Range::new(1, 4),
            AnnotateMethod::Set,
            &bold,
            0,
        )
        .unwrap();

        let starts = tx
            .operations()
            .iter()
            .filter(|op| matches!(op, Op::Annotate { bias: AnnotateBias::Start, .. }))
            .count();
        let stops = tx
            .operations()
            .iter()
            .filter(|op| matches!(op, Op::Annotate { bias: AnnotateBias::Stop, .. }))
            .count();
        assert_eq!(starts, 2, "wraps 'a' and 'c' separately");
        assert_eq!(stops, 2);
    }

    #[test]
    fn clear_only_touches_exact_annotation() {
        let bold = Annotation::new("bold");
        let italic = Annotation::new("italic");
        let store = vec![bold.clone(), italic.clone()];
        let doc = LinearDocument::new(vec![
            LinearItem::Char {
                value: 'a',
                annotations: AnnotationSet::from_ids([0]),
            },
            LinearItem::Char {
                value: 'b',
                annotations: AnnotationSet::from_ids([1]),
            },
        ]);
        let nf = SimpleNodeFactory::new();

        let tx = new_from_annotation(
            &doc,
            &nf,
            |id| store.get(id).cloned(),
            Range::new(0, 2),
            AnnotateMethod::Clear,
            &bold,
            0,
        )
        .unwrap();

        let annotate_ops: Vec<_> = tx
            .operations()
            .iter()
            .filter(|op| matches!(op, Op::Annotate { .. }))
            .collect();
        assert_eq!(annotate_ops.len(), 2); // start + stop around 'a' only
    }
}
