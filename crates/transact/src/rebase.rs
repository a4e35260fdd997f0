//! Rebasing two transactions that both apply to the same original document.
//!
//! A rebase conflict is a normal, expected result — not an [`Error`]. Two
//! transactions conflict when the active ranges of the document they touch
//! overlap; otherwise each is rewritten to account for the length change
//! the other one makes, so both orderings converge to the same document.

use crate::error::{Error, Result};
use crate::op::{AnnotateBias, Op};
use crate::transaction::Transaction;
use quillai_log::{trace, warn};

/// The span of the original document a transaction actually changes (the
/// minimal range outside which it is the identity), and the net length
/// change it makes there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRangeAndLengthDiff {
    pub start: usize,
    pub old_end: usize,
    pub diff: i64,
}

/// `getActiveRangeAndLengthDiff(tx)`. `None` means `tx` is a genuine no-op
/// (nothing in it is active at all); a transaction that only inserts
/// content reports `Some` with a collapsed range (`start == old_end`).
pub fn active_range_and_length_diff(tx: &Transaction) -> Option<ActiveRangeAndLengthDiff> {
    let mut offset = 0usize;
    let mut start: Option<usize> = None;
    let mut end = 0usize;
    let mut diff = 0i64;
    let mut annotations: i32 = 0;

    for op in tx.operations() {
        match op {
            Op::Annotate { bias, .. } => match bias {
                AnnotateBias::Start => annotations += 1,
                AnnotateBias::Stop => annotations -= 1,
            },
            Op::Retain { length } => {
                if annotations > 0 {
                    start.get_or_insert(offset);
                    end = end.max(offset + length);
                }
                offset += length;
            }
            Op::RetainMetadata { .. } => {
                if annotations > 0 {
                    start.get_or_insert(offset);
                    end = end.max(offset);
                }
            }
            Op::Replace { remove, insert, .. } => {
                start.get_or_insert(offset);
                end = end.max(offset + remove.len());
                diff += insert.len() as i64 - remove.len() as i64;
                offset += remove.len();
            }
            Op::Attribute { .. } | Op::ReplaceMetadata { .. } => {
                start.get_or_insert(offset);
                end = end.max(offset + 1);
            }
        }
    }

    start.map(|start| ActiveRangeAndLengthDiff {
        start,
        old_end: end,
        diff,
    })
}

/// Grows (or shrinks) the leading `retain` of `tx` by `diff`. Inserts a new
/// leading retain if `tx` doesn't start with one and `diff > 0`. Errors if
/// `diff < 0` and there's no leading retain long enough to absorb it.
fn adjust_leading_retain(tx: &Transaction, diff: i64) -> Result<Transaction> {
    if diff == 0 {
        return Ok(tx.clone());
    }

    let mut ops = tx.operations().to_vec();
    let first_len = match ops.first() {
        Some(Op::Retain { length }) => Some(*length),
        _ => None,
    };

    match first_len {
        Some(length) => {
            let new_len = length as i64 + diff;
            if new_len < 0 {
                return Err(Error::NegativeRetain(new_len));
            }
            if new_len == 0 {
                ops.remove(0);
            } else {
                ops[0] = Op::Retain {
                    length: new_len as usize,
                };
            }
        }
        None if diff > 0 => {
            ops.insert(0, Op::Retain { length: diff as usize });
        }
        None => return Err(Error::NegativeRetain(diff)),
    }

    Ok(Transaction::new(ops))
}

/// Grows (or shrinks) the trailing `retain` of `tx` by `diff`, stepping
/// over a trailing `retainMetadata` if present so the retain just before it
/// is the one adjusted.
fn adjust_trailing_retain(tx: &Transaction, diff: i64) -> Result<Transaction> {
    if diff == 0 {
        return Ok(tx.clone());
    }

    let mut ops = tx.operations().to_vec();
    let insert_before = if matches!(ops.last(), Some(Op::RetainMetadata { .. })) {
        ops.len() - 1
    } else {
        ops.len()
    };
    let retain_idx = insert_before.checked_sub(1);
    let existing_len = retain_idx.and_then(|i| match ops.get(i) {
        Some(Op::Retain { length }) => Some(*length),
        _ => None,
    });

    match existing_len {
        Some(length) => {
            let i = retain_idx.unwrap();
            let new_len = length as i64 + diff;
            if new_len < 0 {
                return Err(Error::NegativeRetain(new_len));
            }
            if new_len == 0 {
                ops.remove(i);
            } else {
                ops[i] = Op::Retain {
                    length: new_len as usize,
                };
            }
        }
        None if diff > 0 => {
            ops.insert(insert_before, Op::Retain { length: diff as usize });
        }
        None => return Err(Error::NegativeRetain(diff)),
    }

    Ok(Transaction::new(ops))
}

/// Outcome of attempting to rebase two transactions built against the same
/// original document.
#[derive(Debug)]
pub enum RebaseOutcome {
    Ok(Transaction, Transaction),
    Conflict,
}

/// `rebaseTransactions(a, b)`: the default tie-break treats `a` as
/// startmost when both are collocated insertions.
pub fn rebase_transactions(a: &Transaction, b: &Transaction) -> Result<RebaseOutcome> {
    rebased_onto(a, b, true)
}

/// `rebasedOnto(a, b, startmost)`.
pub fn rebased_onto(a: &Transaction, b: &Transaction, startmost: bool) -> Result<RebaseOutcome> {
    let ra = active_range_and_length_diff(a);
    let rb = active_range_and_length_diff(b);

    let (ra, rb) = match (ra, rb) {
        // A genuine no-op contributes diff == 0 to the other side, which is
        // therefore left untouched. The no-op itself still has to grow to
        // cover whatever length change the other side made, or its own
        // retains would no longer sum to the new document length.
        (None, None) => return Ok(RebaseOutcome::Ok(a.clone(), b.clone())),
        (None, Some(rb)) => {
            let a_prime = adjust_leading_retain(a, rb.diff)?;
            return Ok(RebaseOutcome::Ok(a_prime, b.clone()));
        }
        (Some(ra), None) => {
            let b_prime = adjust_leading_retain(b, ra.diff)?;
            return Ok(RebaseOutcome::Ok(a.clone(), b_prime));
        }
        (Some(ra), Some(rb)) => (ra, rb),
    };

    trace!(
        a_start = ra.start,
        a_end = ra.old_end,
        b_start = rb.start,
        b_end = rb.old_end,
        "rebase active ranges"
    );

    let a_collapsed = ra.start == ra.old_end;
    let b_collapsed = rb.start == rb.old_end;

    if a_collapsed && b_collapsed && ra.start == rb.start {
        return Ok(if startmost {
            RebaseOutcome::Ok(a.clone(), adjust_leading_retain(b, ra.diff)?)
        } else {
            RebaseOutcome::Ok(adjust_leading_retain(a, rb.diff)?, b.clone())
        });
    }

    if ra.old_end <= rb.start {
        let b_prime = adjust_leading_retain(b, ra.diff)?;
        let a_prime = adjust_trailing_retain(a, rb.diff)?;
        return Ok(RebaseOutcome::Ok(a_prime, b_prime));
    }

    if rb.old_end <= ra.start {
        let a_prime = adjust_leading_retain(a, rb.diff)?;
        let b_prime = adjust_trailing_retain(b, ra.diff)?;
        return Ok(RebaseOutcome::Ok(a_prime, b_prime));
    }

    warn!(
        a_start = ra.start,
        a_end = ra.old_end,
        b_start = rb.start,
        b_end = rb.old_end,
        "rebase conflict"
    );
    Ok(RebaseOutcome::Conflict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LinearItem;

    #[test]
    fn non_overlapping_insertions_both_succeed() {
        let a = Transaction::new(vec![
            Op::retain(1),
            Op::replace(Vec::new(), LinearItem::text("x")),
            Op::retain(9),
        ]);
        let b = Transaction::new(vec![
            Op::retain(5),
            Op::replace(Vec::new(), LinearItem::text("y")),
            Op::retain(5),
        ]);

        match rebase_transactions(&a, &b).unwrap() {
            RebaseOutcome::Ok(a_prime, b_prime) => {
                assert_eq!(a_prime.operations()[0], Op::retain(1));
                assert_eq!(a_prime.operations()[2], Op::retain(10));
                assert_eq!(b_prime.operations()[0], Op::retain(6));
            }
            RebaseOutcome::Conflict => panic!("expected no conflict"),
        }
    }

    #[test]
    fn overlapping_replacements_conflict() {
        let a = Transaction::new(vec![
            Op::retain(2),
            Op::replace(LinearItem::text("abc"), LinearItem::text("X")),
            Op::retain(5),
        ]);
        let b = Transaction::new(vec![
            Op::retain(4),
            Op::replace(LinearItem::text("abc"), LinearItem::text("Y")),
            Op::retain(3),
        ]);

        assert!(matches!(
            rebase_transactions(&a, &b).unwrap(),
            RebaseOutcome::Conflict
        ));
    }

    #[test]
    fn collocated_inserts_tie_break_on_startmost() {
        let a = Transaction::new(vec![
            Op::retain(3),
            Op::replace(Vec::new(), LinearItem::text("A")),
            Op::retain(7),
        ]);
        let b = Transaction::new(vec![
            Op::retain(3),
            Op::replace(Vec::new(), LinearItem::text("B")),
            Op::retain(7),
        ]);

        match rebased_onto(&a, &b, true).unwrap() {
            RebaseOutcome::Ok(a_prime, b_prime) => {
                assert_eq!(a_prime.operations()[0], Op::retain(3));
                assert_eq!(b_prime.operations()[0], Op::retain(4));
            }
            RebaseOutcome::Conflict => panic!("collocated inserts should not conflict"),
        }
    }

    #[test]
    fn no_op_transaction_grows_to_cover_the_others_insertion() {
        let a = Transaction::new(vec![Op::retain(10)]);
        let b = Transaction::new(vec![
            Op::retain(2),
            Op::replace(Vec::new(), LinearItem::text("z")),
            Op::retain(8),
        ]);

        match rebase_transactions(&a, &b).unwrap() {
            RebaseOutcome::Ok(a_prime, b_prime) => {
                // b made no-op `a` longer by one: the post-b document is 11
                // items long, so a's single retain must now span 11, not 10,
                // or its retain total would no longer match the document.
                assert_eq!(a_prime.operations(), &[Op::retain(11)]);
                assert_eq!(b_prime, b);
            }
            RebaseOutcome::Conflict => panic!("a no-op can never conflict"),
        }
    }

    #[test]
    fn both_sides_no_op_are_left_untouched() {
        let a = Transaction::new(vec![Op::retain(10)]);
        let b = Transaction::new(vec![Op::retain(10)]);

        match rebase_transactions(&a, &b).unwrap() {
            RebaseOutcome::Ok(a_prime, b_prime) => {
                assert_eq!(a_prime, a);
                assert_eq!(b_prime, b);
            }
            RebaseOutcome::Conflict => panic!("two no-ops can never conflict"),
        }
    }
}
