//! Semantic analysis passes.
//!
//! This module performs the semantic verification of a finished tree.
//! Three independent passes walk the whole tree in a fixed order, each
//! writing into one shared reporter:
//!
//! - Declaration checking: identifier uses with no visible declaration
//! - Type-mix checking: binary operators pairing an integer literal with
//!   a non-integer literal
//! - Duplicate checking: redeclarations within one scope
//!
//! Detection never stops a traversal and never touches the tree; every
//! finding increments the same counter, and the caller decides what a
//! non-zero count means.

pub mod decl;
pub mod duplicate;
pub mod reporter;
pub mod scope;
pub mod type_mix;


use crate::ast::node::Node;

use self::decl::DeclChecker;
use self::duplicate::DuplicateChecker;
use self::reporter::Reporter;
use self::type_mix::TypeMixChecker;

/// Runs the three checker passes in their fixed order over the same
/// tree, printing each pass's banner, its findings, and the running
/// error subtotal, and returns the accumulated count.
pub fn run_checks(root: &Node, reporter: &mut Reporter) -> usize {
    println!("Checking variable declarations...");
    DeclChecker::new().check(root, reporter);
    let flushed = flush_from(reporter, 0);
    println!("erros: {}", reporter.count());

    println!("Checking type mix declarations...");
    TypeMixChecker::new().check(root, reporter);
    let flushed = flush_from(reporter, flushed);
    println!("erros: {}", reporter.count());

    println!("Checking duplicate variable declarations...");
    DuplicateChecker::new("global").check(root, reporter);
    flush_from(reporter, flushed);
    println!("erros: {}", reporter.count());

    reporter.count()
}

fn flush_from(reporter: &Reporter, from: usize) -> usize {
    for diagnostic in &reporter.diagnostics()[from..] {
        println!("{}", reporter.format(diagnostic));
    }
    reporter.diagnostics().len()
}
