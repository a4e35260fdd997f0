//! The linear-model data representation the transaction core assumes.
//!
//! A document is a flat ordered sequence of [`LinearItem`]s: characters
//! (optionally annotated) and element markers. A parallel metadata stream
//! carries [`MetadataElement`] lists, one cell per data offset plus one
//! trailing cell. Annotations themselves live in an external indexed store
//! (see [`crate::collaborators::Store`]); characters only carry the
//! indices.

use crate::attributes::AttributeMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Index of an annotation in the external annotation store.
pub type AnnotationId = usize;

/// A pooled annotation value. Two annotations are "comparable" when they
/// are equal by this derived `PartialEq`, regardless of which store slot
/// either lives in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub data: AttributeMap,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: AttributeMap::new(),
        }
    }

    pub fn with_data(name: impl Into<String>, data: AttributeMap) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// The set of annotation-store indices attached to a character.
///
/// `contains` is exact (reference/identity equality of the store slot);
/// `contains_comparable` is by value. The two are deliberately used
/// asymmetrically by `new_from_annotation`: `set` skips positions already
/// covered by a comparable annotation, `clear` only skips positions missing
/// the exact one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSet(BTreeSet<AnnotationId>);

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = AnnotationId>) -> Self {
        Self(ids.into_iter().collect())
    }

    pub fn contains(&self, id: AnnotationId) -> bool {
        self.0.contains(&id)
    }

    pub fn contains_comparable(&self, lookup: impl Fn(AnnotationId) -> Option<Annotation>, ann: &Annotation) -> bool {
        self.0.iter().any(|id| lookup(*id).as_ref() == Some(ann))
    }

    pub fn with_added(&self, id: AnnotationId) -> Self {
        let mut set = self.0.clone();
        set.insert(id);
        Self(set)
    }

    pub fn with_removed(&self, id: AnnotationId) -> Self {
        let mut set = self.0.clone();
        set.remove(&id);
        Self(set)
    }

    pub fn ids(&self) -> impl Iterator<Item = &AnnotationId> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single item in the linear document: a character, or half of an element
/// marker pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LinearItem {
    Char {
        value: char,
        annotations: AnnotationSet,
    },
    /// Opening marker `{type: "T", attributes: {...}}`.
    Open {
        element_type: String,
        attributes: AttributeMap,
    },
    /// Closing marker `{type: "/T"}`.
    Close { element_type: String },
}

impl LinearItem {
    pub fn char(value: char) -> Self {
        LinearItem::Char {
            value,
            annotations: AnnotationSet::new(),
        }
    }

    pub fn text(s: &str) -> Vec<Self> {
        s.chars().map(LinearItem::char).collect()
    }

    pub fn open(element_type: impl Into<String>) -> Self {
        LinearItem::Open {
            element_type: element_type.into(),
            attributes: AttributeMap::new(),
        }
    }

    pub fn open_with(element_type: impl Into<String>, attributes: AttributeMap) -> Self {
        LinearItem::Open {
            element_type: element_type.into(),
            attributes,
        }
    }

    pub fn close(element_type: impl Into<String>) -> Self {
        LinearItem::Close {
            element_type: element_type.into(),
        }
    }

    pub fn is_element(&self) -> bool {
        !matches!(self, LinearItem::Char { .. })
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LinearItem::Open { .. })
    }

    pub fn is_close(&self) -> bool {
        matches!(self, LinearItem::Close { .. })
    }

    pub fn element_type(&self) -> Option<&str> {
        match self {
            LinearItem::Open { element_type, .. } | LinearItem::Close { element_type } => {
                Some(element_type)
            }
            LinearItem::Char { .. } => None,
        }
    }

    pub fn attributes(&self) -> Option<&AttributeMap> {
        match self {
            LinearItem::Open { attributes, .. } => Some(attributes),
            _ => None,
        }
    }
}

/// A single metadata element attached at a data offset (e.g. a reference
/// marker living in the "second dimension" alongside the data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataElement {
    pub name: String,
    pub data: AttributeMap,
}

impl MetadataElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: AttributeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_set_exact_vs_comparable() {
        let store = vec![Annotation::new("bold"), Annotation::new("italic")];
        let set = AnnotationSet::from_ids([0]);

        assert!(set.contains(0));
        assert!(!set.contains(1));
        assert!(set.contains_comparable(|id| store.get(id).cloned(), &Annotation::new("bold")));
        assert!(!set.contains_comparable(|id| store.get(id).cloned(), &Annotation::new("italic")));
    }

    #[test]
    fn text_builds_char_items() {
        let items = LinearItem::text("ab");
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], LinearItem::Char { value: 'a', .. }));
    }
}
