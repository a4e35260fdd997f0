//! Basic usage examples for the transaction core.
//!
//! This example demonstrates:
//! - Building a document with the reference `LinearDocument`
//! - Constructing a transaction with a high-level constructor
//! - Reversing a transaction
//! - Rebasing two concurrent transactions against each other
//!
//! Run with: `cargo run --example basic_usage`

use transact::reference_doc::{LinearDocument, SimpleNodeFactory};
use transact::{new_from_insertion, new_from_removal, rebase_transactions, Document, Range};

fn main() {
    println!("=== Transact Basic Usage Example ===\n");

    let doc = LinearDocument::from_html_like("<p>Hello</p>");
    println!("1. Document:");
    println!("   {:?}\n", doc.data(None));

    let insertion = new_from_insertion(&doc, 6, transact::LinearItem::text(", world")).unwrap();
    println!("2. Insertion transaction:");
    println!("   {:?}\n", insertion.operations());

    let reversed = insertion.reversed();
    println!("3. Its reverse:");
    println!("   {:?}\n", reversed.operations());

    let node_factory = SimpleNodeFactory::new();
    let a = new_from_insertion(&doc, 1, transact::LinearItem::text("X")).unwrap();
    let b = new_from_removal(&doc, &node_factory, Range::new(3, 5), None).unwrap();

    println!("4. Two concurrent transactions against the same document:");
    println!("   A (insert at 1): {:?}", a.operations());
    println!("   B (remove 3..5): {:?}\n", b.operations());

    match rebase_transactions(&a, &b).unwrap() {
        transact::RebaseOutcome::Ok(a_prime, b_prime) => {
            println!("5. Rebase succeeded:");
            println!("   A': {:?}", a_prime.operations());
            println!("   B': {:?}", b_prime.operations());
        }
        transact::RebaseOutcome::Conflict => {
            println!("5. Rebase reported a conflict.");
        }
    }
}
