//! Error kinds raised by the transaction core.
//!
//! Every constructor failure surfaces as a synchronous [`Error`]; there is
//! no local recovery here, callers decide. Rebase conflicts are notably
//! *not* an `Error` variant — a non-conflicting vs. conflicting rebase is a
//! first-class result, see [`crate::rebase::RebaseOutcome`].

#[derive(thiserror::Error)]
pub enum Error {
    #[error("range {start}..{end} selected no covered nodes")]
    InvalidRange { start: usize, end: usize },

    #[error("offset {offset} does not address an opening element marker")]
    InvalidAttributeTarget { offset: usize },

    #[error("metadata index {index} out of bounds for a cell of length {cell_len}")]
    MetadataBounds { index: usize, cell_len: usize },

    #[error("cannot remove metadata from an empty cell at offset {offset}")]
    EmptyMetadata { offset: usize },

    #[error("retain length must be non-negative, got {0}")]
    NegativeRetain(i64),

    #[error("expected `{expected}` immediately {position} the range, found `{found}`")]
    UnwrapMismatch {
        expected: String,
        found: String,
        position: &'static str,
    },

    #[error("a replace cannot immediately follow a replaceMetadata at the same offset")]
    ReplaceAfterReplaceMetadata,
}

pub(crate) fn format_error(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter,
) -> std::fmt::Result {
    write!(f, "{e}")?;

    let mut source = e.source();
    if e.source().is_some() {
        writeln!(f, "\ncaused by:")?;
        let mut i: usize = 0;
        while let Some(inner) = source {
            writeln!(f, "{i: >5}: {inner}")?;
            source = inner.source();
            i += 1;
        }
    }

    Ok(())
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_error(self, f)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
