//! Universal invariants exercised against the public constructor/transform/
//! rebase API: source-length consumption, reversal symmetry, offset
//! translation, rebase convergence, clone/latch semantics, and tree balance.

use transact::reference_doc::{LinearDocument, SimpleNodeFactory};
use transact::{
    new_from_insertion, new_from_removal, new_from_replacement, rebase_transactions, Document,
    LinearItem, Op, Range, RebaseOutcome, Transaction,
};

/// Sums `retain.length + replace.remove.length` across the data axis.
fn data_consumption(tx: &Transaction) -> usize {
    tx.operations().iter().map(Op::data_length).sum()
}

/// Sums `retainMetadata.length + replaceMetadata.remove.length` across the
/// metadata axis.
fn metadata_consumption(tx: &Transaction) -> usize {
    tx.operations().iter().map(Op::metadata_length).sum()
}

/// Minimal data-axis-only executor: enough to validate reversal/apply
/// round-trips against constructors that emit no `attribute`/`annotate`
/// ops of their own.
fn apply_data(items: &[LinearItem], tx: &Transaction) -> Vec<LinearItem> {
    let mut out = Vec::new();
    let mut cursor = 0usize;
    for op in tx.operations() {
        match op {
            Op::Retain { length } => {
                out.extend_from_slice(&items[cursor..cursor + length]);
                cursor += length;
            }
            Op::Replace { remove, insert, .. } => {
                out.extend(insert.iter().cloned());
                cursor += remove.len();
            }
            _ => {}
        }
    }
    out
}

// Plain `retain`/`replace` keep the metadata cursor implicitly in lock-step
// with the data cursor (see `TransactionBuilder::push_final_retain`), so the
// metadata axis is only ever consumed *explicitly* past the point where the
// data axis stops — i.e. the one trailing cell for ordinary constructors.
// Source-length consumption therefore reads as: implicit consumption (==
// data consumption) plus explicit `retainMetadata`/`replaceMetadata`
// consumption together cover every metadata cell.
#[test]
fn p1_source_consumption_matches_document_length_for_insertion() {
    let doc = LinearDocument::from_html_like("<p>abcd</p>");
    let tx = new_from_insertion(&doc, 2, LinearItem::text("x")).unwrap();
    assert_eq!(data_consumption(&tx), doc.len());
    assert_eq!(data_consumption(&tx) + metadata_consumption(&tx), doc.metadata(None).len());
}

#[test]
fn p1_source_consumption_matches_document_length_for_removal() {
    let doc = LinearDocument::from_html_like("<p>abcd</p>");
    let nf = SimpleNodeFactory::new();
    let tx = new_from_removal(&doc, &nf, Range::new(1, 3), None).unwrap();
    assert_eq!(data_consumption(&tx), doc.len());
    assert_eq!(data_consumption(&tx) + metadata_consumption(&tx), doc.metadata(None).len());
}

#[test]
fn p2_double_reversal_is_identity() {
    let doc = LinearDocument::from_html_like("<p>abcd</p>");
    let nf = SimpleNodeFactory::new();
    let tx = new_from_replacement(&doc, &nf, Range::new(1, 3), LinearItem::text("XY"), None).unwrap();
    assert_eq!(tx.reversed().reversed(), tx);
}

#[test]
fn p3_apply_then_reverse_restores_original() {
    let doc = LinearDocument::from_html_like("<p>abcd</p>");
    let original: Vec<LinearItem> = doc.data(None);

    let tx = new_from_insertion(&doc, 2, LinearItem::text("xy")).unwrap();
    let inserted = apply_data(&original, &tx);

    let reversed_doc = LinearDocument::new(inserted.clone());
    let reverse_tx = tx.reversed();
    let restored = apply_data(&inserted, &reverse_tx);

    let _ = reversed_doc;
    assert_eq!(restored, original);
}

#[test]
fn p4_translate_offset_round_trips_outside_touched_region() {
    let doc = LinearDocument::from_html_like("<p>abcdefgh</p>");
    let nf = SimpleNodeFactory::new();
    let tx = new_from_replacement(&doc, &nf, Range::new(3, 5), LinearItem::text("Z"), None).unwrap();

    // offset 1 sits well before the touched region on both sides.
    let forward = tx.translate_offset(1, false);
    let back = tx.reversed().translate_offset(forward, false);
    assert_eq!(back, 1);
}

#[test]
fn p5_rebase_convergence_for_non_overlapping_edits() {
    let doc = LinearDocument::from_html_like("<p>abcdefgh</p>");
    let original: Vec<LinearItem> = doc.data(None);

    let a = new_from_insertion(&doc, 1, LinearItem::text("X")).unwrap();
    let b = new_from_insertion(&doc, 6, LinearItem::text("Y")).unwrap();

    let (a_prime, b_prime) = match rebase_transactions(&a, &b).unwrap() {
        RebaseOutcome::Ok(a_prime, b_prime) => (a_prime, b_prime),
        RebaseOutcome::Conflict => panic!("non-overlapping inserts must not conflict"),
    };

    // apply A then B' ...
    let after_a = apply_data(&original, &a);
    let after_a_then_b = apply_data(&after_a, &b_prime);

    // ... must equal applying B then A'.
    let after_b = apply_data(&original, &b);
    let after_b_then_a = apply_data(&after_b, &a_prime);

    assert_eq!(after_a_then_b, after_b_then_a);
}

#[test]
fn p6_clone_preserves_ops_and_clears_latch() {
    let tx = Transaction::new(vec![Op::retain(3)]);
    tx.mark_as_applied();
    let cloned = tx.clone();
    assert_eq!(cloned.operations(), tx.operations());
    assert!(!cloned.has_been_applied());
}

#[test]
fn p6_is_no_op_holds_for_retain_only_shapes() {
    assert!(Transaction::new(vec![]).is_no_op());
    assert!(Transaction::new(vec![Op::retain(4)]).is_no_op());
    assert!(Transaction::new(vec![Op::retain(4), Op::retain_metadata(1)]).is_no_op());
    assert!(!Transaction::new(vec![Op::replace(Vec::new(), LinearItem::text("x"))]).is_no_op());
}

#[test]
fn p7_removal_leaves_a_balanced_tree() {
    let doc = LinearDocument::from_html_like("<p>ab</p><p>cd</p>");
    let nf = SimpleNodeFactory::new();
    let original: Vec<LinearItem> = doc.data(None);
    let tx = new_from_removal(&doc, &nf, Range::new(4, 5), None).unwrap();
    let result = apply_data(&original, &tx);

    let mut depth = 0i32;
    for item in &result {
        match item {
            LinearItem::Open { .. } => depth += 1,
            LinearItem::Close { .. } => depth -= 1,
            LinearItem::Char { .. } => {}
        }
        assert!(depth >= 0, "never closes more than has been opened");
    }
    assert_eq!(depth, 0, "every opener is matched by a closer");
}
