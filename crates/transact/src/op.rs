//! The six operation variants a transaction is built from.
//!
//! Operations are plain, serializable records. `Transaction::to_json`
//! returns this vocabulary verbatim — it is the normative wire format, the
//! same role `quillai_delta::Op` plays for Quill's JSON deltas.

use crate::attributes::AttributeValue;
use crate::data::{AnnotationId, LinearItem, MetadataElement};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotateMethod {
    Set,
    Clear,
}

impl AnnotateMethod {
    /// Reversal swaps `set` and `clear`.
    pub fn reversed(self) -> Self {
        match self {
            AnnotateMethod::Set => AnnotateMethod::Clear,
            AnnotateMethod::Clear => AnnotateMethod::Set,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotateBias {
    Start,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Op {
    #[serde(rename = "retain")]
    Retain { length: usize },

    #[serde(rename = "retainMetadata")]
    RetainMetadata { length: usize },

    #[serde(rename = "replace")]
    Replace {
        remove: Vec<LinearItem>,
        insert: Vec<LinearItem>,
        #[serde(skip_serializing_if = "Option::is_none")]
        remove_metadata: Option<Vec<Vec<MetadataElement>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        insert_metadata: Option<Vec<Vec<MetadataElement>>>,
        /// Marks the caller-intended insertion within `insert`, which may
        /// have been padded by `fixup_insertion` to keep the tree balanced.
        #[serde(skip_serializing_if = "Option::is_none")]
        inserted_data_offset: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        inserted_data_length: Option<usize>,
    },

    #[serde(rename = "replaceMetadata")]
    ReplaceMetadata {
        remove: Vec<MetadataElement>,
        insert: Vec<MetadataElement>,
    },

    #[serde(rename = "attribute")]
    Attribute {
        key: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<AttributeValue>,
        #[serde(skip_serializing_if = "Option::is_none")]
        to: Option<AttributeValue>,
    },

    #[serde(rename = "annotate")]
    Annotate {
        method: AnnotateMethod,
        bias: AnnotateBias,
        index: AnnotationId,
    },
}

impl Op {
    pub fn retain(length: usize) -> Self {
        Op::Retain { length }
    }

    pub fn retain_metadata(length: usize) -> Self {
        Op::RetainMetadata { length }
    }

    pub fn replace(remove: Vec<LinearItem>, insert: Vec<LinearItem>) -> Self {
        Op::Replace {
            remove,
            insert,
            remove_metadata: None,
            insert_metadata: None,
            inserted_data_offset: None,
            inserted_data_length: None,
        }
    }

    /// Length this op consumes from the *data* axis of the source document.
    /// `retainMetadata`, `attribute`, and `annotate` consume nothing from the
    /// data axis.
    pub fn data_length(&self) -> usize {
        match self {
            Op::Retain { length } => *length,
            Op::Replace { remove, .. } => remove.len(),
            Op::RetainMetadata { .. }
            | Op::ReplaceMetadata { .. }
            | Op::Attribute { .. }
            | Op::Annotate { .. } => 0,
        }
    }

    /// Length this op consumes from the *metadata* axis.
    pub fn metadata_length(&self) -> usize {
        match self {
            Op::RetainMetadata { length } => *length,
            Op::ReplaceMetadata { remove, .. } => remove.len(),
            _ => 0,
        }
    }

    /// Net change in data length this op contributes
    /// (`insert.length - remove.length`).
    pub fn data_diff(&self) -> i64 {
        match self {
            Op::Replace { remove, insert, .. } => insert.len() as i64 - remove.len() as i64,
            _ => 0,
        }
    }

    pub fn is_retain(&self) -> bool {
        matches!(self, Op::Retain { .. })
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, Op::Replace { .. })
    }

    pub fn is_replace_metadata(&self) -> bool {
        matches!(self, Op::ReplaceMetadata { .. })
    }

    /// Per-variant reversal rule.
    pub fn reversed(&self) -> Op {
        match self {
            Op::Retain { length } => Op::Retain { length: *length },
            Op::RetainMetadata { length } => Op::RetainMetadata { length: *length },
            Op::Replace {
                remove,
                insert,
                remove_metadata,
                insert_metadata,
                inserted_data_offset,
                inserted_data_length,
            } => Op::Replace {
                remove: insert.clone(),
                insert: remove.clone(),
                remove_metadata: insert_metadata.clone(),
                insert_metadata: remove_metadata.clone(),
                inserted_data_offset: *inserted_data_offset,
                inserted_data_length: *inserted_data_length,
            },
            Op::ReplaceMetadata { remove, insert } => Op::ReplaceMetadata {
                remove: insert.clone(),
                insert: remove.clone(),
            },
            Op::Attribute { key, from, to } => Op::Attribute {
                key: key.clone(),
                from: to.clone(),
                to: from.clone(),
            },
            Op::Annotate {
                method,
                bias,
                index,
            } => Op::Annotate {
                method: method.reversed(),
                bias: *bias,
                index: *index,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_reversal_swaps_insert_and_remove() {
        let op = Op::Replace {
            remove: LinearItem::text("ab"),
            insert: LinearItem::text("xyz"),
            remove_metadata: None,
            insert_metadata: None,
            inserted_data_offset: None,
            inserted_data_length: None,
        };
        let rev = op.reversed();
        assert_eq!(rev.data_length(), 3); // now removes "xyz"
        assert_eq!(rev.reversed(), op);
    }

    #[test]
    fn attribute_reversal_swaps_from_to() {
        let op = Op::Attribute {
            key: "level".into(),
            from: Some(AttributeValue::Number(1)),
            to: Some(AttributeValue::Number(2)),
        };
        let rev = op.reversed();
        assert_eq!(
            rev,
            Op::Attribute {
                key: "level".into(),
                from: Some(AttributeValue::Number(2)),
                to: Some(AttributeValue::Number(1)),
            }
        );
    }

    #[test]
    fn annotate_reversal_swaps_method_keeps_bias() {
        let op = Op::Annotate {
            method: AnnotateMethod::Set,
            bias: AnnotateBias::Start,
            index: 3,
        };
        let rev = op.reversed();
        assert_eq!(rev.reversed(), op);
        assert!(matches!(
            rev,
            Op::Annotate {
                method: AnnotateMethod::Clear,
                bias: AnnotateBias::Start,
                index: 3
            }
        ));
    }

    #[test]
    fn data_and_metadata_lengths_are_disjoint() {
        let retain = Op::Retain { length: 5 };
        assert_eq!(retain.data_length(), 5);
        assert_eq!(retain.metadata_length(), 0);

        let retain_meta = Op::RetainMetadata { length: 2 };
        assert_eq!(retain_meta.data_length(), 0);
        assert_eq!(retain_meta.metadata_length(), 2);
    }
}
