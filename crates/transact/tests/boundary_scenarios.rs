//! Literal boundary scenarios for the transaction core's constructors and
//! rebase engine, exercised end to end through the public API.

use transact::reference_doc::{LinearDocument, SimpleNodeFactory};
use transact::{
    new_from_annotation, new_from_attribute_changes, new_from_insertion, new_from_removal,
    new_from_replacement, new_from_wrap, rebase_transactions, AnnotateMethod, Annotation,
    AttributeMap, AttributeValue, Document, LinearItem, Op, Range, RebaseOutcome,
};

#[test]
fn insertion_at_a_point() {
    let doc = LinearDocument::from_html_like("<p>ab</p>");
    let tx = new_from_insertion(&doc, 2, LinearItem::text("x")).unwrap();

    assert_eq!(
        tx.operations(),
        &[
            Op::retain(2),
            Op::replace(Vec::new(), LinearItem::text("x")),
            Op::retain(2),
            Op::retain_metadata(1),
        ]
    );
}

#[test]
fn removal_of_inline_range() {
    let doc = LinearDocument::from_html_like("<p>abc</p>");
    let nf = SimpleNodeFactory::new();
    let tx = new_from_removal(&doc, &nf, Range::new(1, 3), None).unwrap();

    assert_eq!(
        tx.operations()[..2],
        [Op::retain(1), Op::replace(LinearItem::text("ab"), Vec::new())]
    );
}

#[test]
fn removal_of_whole_document_inserts_empty_paragraph() {
    let doc = LinearDocument::from_html_like("<p>ab</p>");
    let nf = SimpleNodeFactory::new();
    let tx = new_from_removal(&doc, &nf, Range::new(0, doc.len()), None).unwrap();

    let has_empty_paragraph = tx.operations().iter().any(|op| match op {
        Op::Replace { insert, .. } => insert.len() == 2 && insert[0].is_open() && insert[1].is_close(),
        _ => false,
    });
    assert!(has_empty_paragraph);
}

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
    // A leading `retain(0)` is elided per I3, so the attribute op leads.
    assert_eq!(
        tx.operations()[0],
        Op::Attribute {
            key: "level".to_string(),
            from: Some(AttributeValue::Number(1)),
            to: Some(AttributeValue::Number(2)),
        }
    );
}

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

    let replaces: Vec<&Op> = tx.operations().iter().filter(|op| op.is_replace()).collect();
    assert_eq!(replaces.len(), 6);
    assert!(matches!(
        replaces[0],
        Op::Replace { insert, .. } if insert.len() == 1 && insert[0].element_type() == Some("list") && insert[0].is_open()
    ));
    assert!(matches!(
        replaces[1],
        Op::Replace { insert, .. } if insert.len() == 1 && insert[0].element_type() == Some("listItem")
    ));
    assert!(matches!(
        replaces[5],
        Op::Replace { insert, .. } if insert.len() == 1 && insert[0].element_type() == Some("list") && insert[0].is_close()
    ));
}

#[test]
fn rebase_non_conflicting_insertions() {
    let doc = LinearDocument::from_html_like("<p>abcdefgh</p>");
    let a = new_from_insertion(&doc, 1, LinearItem::text("x")).unwrap();
    let b = new_from_insertion(&doc, 5, LinearItem::text("y")).unwrap();

    match rebase_transactions(&a, &b).unwrap() {
        RebaseOutcome::Ok(a_prime, b_prime) => {
            assert!(a_prime.operations().iter().any(|op| matches!(op, Op::Retain { length } if *length >= 1)));
            assert!(b_prime.operations().iter().any(|op| matches!(op, Op::Retain { length } if *length >= 1)));
        }
        RebaseOutcome::Conflict => panic!("non-overlapping insertions must not conflict"),
    }
}

#[test]
fn rebase_conflicting_replacements() {
    let doc = LinearDocument::from_html_like("<p>abcdefgh</p>");
    let nf = SimpleNodeFactory::new();
    let a = new_from_replacement(&doc, &nf, Range::new(2, 5), LinearItem::text("X"), None).unwrap();
    let b = new_from_replacement(&doc, &nf, Range::new(4, 7), LinearItem::text("Y"), None).unwrap();

    assert!(matches!(
        rebase_transactions(&a, &b).unwrap(),
        RebaseOutcome::Conflict
    ));
}

#[test]
fn annotation_skips_already_annotated_middle_character() {
    let bold = Annotation::new("bold");
    let store = vec![bold.clone()];
    let doc = LinearDocument::new(vec![
        LinearItem::open("p"),
        LinearItem::char('a'),
        LinearItem::Char {
            value: 'b',
            annotations: transact::AnnotationSet::from_ids([0]),
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
        .filter(|op| matches!(op, Op::Annotate { bias: transact::AnnotateBias::Start, .. }))
        .count();
    assert_eq!(starts, 2, "'a' and 'c' get separate annotate spans; 'b' is skipped");
}

