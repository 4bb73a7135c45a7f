//! Tests for replace.rs

use crate::test_fixtures::*;
use crate::{NodeArena, NodeData, NodeIndex};
use ecma_scanner::{JsToken, TokenSpan};

fn plus(arena: &mut NodeArena, at: u32, left: NodeIndex, right: NodeIndex) -> NodeIndex {
    arena.add_binary(TokenSpan::detached(at, at + 1, JsToken::Plus), JsToken::Plus, left, right)
}

#[test]
fn test_removing_optional_slot_hides_it_from_walk() {
    let mut arena = NodeArena::new();
    let v = lookup(&mut arena, 4, "v");
    let body = arena.add_block(span(10, 12), &[]);
    let for_loop = arena.add_for(span(0, 3), NodeIndex::NONE, v, NodeIndex::NONE, body);
    assert_eq!(arena.parent_of(v), for_loop);

    assert!(arena.replace_child(for_loop, v, NodeIndex::NONE));
    assert!(arena.parent_of(v).is_none());
    match arena.data(for_loop) {
        Some(NodeData::For { condition, .. }) => assert!(condition.is_none()),
        other => panic!("expected a for loop, got {other:?}"),
    }

    let mut recorder = Recorder::default();
    arena.walk(for_loop, &mut recorder);
    assert!(!recorder.entered().contains(&"Lookup(v)".to_string()));
    assert_eq!(recorder.entered(), vec!["For", "Block", "List"]);
}

#[test]
fn test_non_child_is_rejected() {
    let mut arena = NodeArena::new();
    let a = lookup(&mut arena, 0, "a");
    let b = lookup(&mut arena, 4, "b");
    let stranger = lookup(&mut arena, 8, "c");
    let sum = plus(&mut arena, 2, a, b);

    assert!(!arena.replace_child(sum, stranger, NodeIndex::NONE));
    assert_eq!(arena.parent_of(a), sum);
    assert_eq!(arena.children(sum).collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn test_list_removal_through_replace() {
    let mut arena = NodeArena::new();
    let a = lookup(&mut arena, 1, "a");
    let b = lookup(&mut arena, 4, "b");
    let c = lookup(&mut arena, 7, "c");
    let array = arena.add_array_literal(span(0, 1), &[a, b, c]);
    let NodeData::ArrayLiteral { elements } = *arena.data(array).expect("array") else {
        panic!("not an array");
    };

    // `b` belongs to the element list, not to the literal itself.
    assert!(!arena.replace_child(array, b, NodeIndex::NONE));

    assert!(arena.replace_child(elements, b, NodeIndex::NONE));
    assert_eq!(arena.list_nodes(elements), &[a, c]);
    assert!(arena.parent_of(b).is_none());
}

#[test]
fn test_replacement_leaves_previous_parent() {
    let mut arena = NodeArena::new();
    let a = lookup(&mut arena, 0, "a");
    let b = lookup(&mut arena, 4, "b");
    let c = lookup(&mut arena, 10, "c");
    let d = lookup(&mut arena, 14, "d");
    let first = plus(&mut arena, 2, a, b);
    let second = plus(&mut arena, 12, c, d);

    assert!(arena.replace_child(first, a, c));
    assert_eq!(arena.parent_of(c), first);
    assert!(arena.parent_of(a).is_none());
    match arena.data(second) {
        Some(NodeData::BinaryOperator { left, right, .. }) => {
            assert!(left.is_none());
            assert_eq!(*right, d);
        }
        other => panic!("expected a binary operator, got {other:?}"),
    }
    match arena.data(first) {
        Some(NodeData::BinaryOperator { left, .. }) => assert_eq!(*left, c),
        other => panic!("expected a binary operator, got {other:?}"),
    }
}

#[test]
fn test_stale_parent_pointer_is_kept() {
    let mut arena = NodeArena::new();
    let a = lookup(&mut arena, 0, "a");
    let b = lookup(&mut arena, 4, "b");
    let first = plus(&mut arena, 2, a, b);
    let other = lookup(&mut arena, 9, "other");

    arena.get_mut(a).expect("a").parent = other;
    assert!(arena.replace_child(first, a, NodeIndex::NONE));
    assert_eq!(arena.parent_of(a), other);
}

#[test]
fn test_ancestor_cannot_become_child() {
    let mut arena = NodeArena::new();
    let a = lookup(&mut arena, 0, "a");
    let b = lookup(&mut arena, 4, "b");
    let sum = plus(&mut arena, 2, a, b);
    let statement = arena.add_expression_statement(span(5, 6), sum);

    assert!(!arena.replace_child(sum, a, statement));
    assert!(!arena.replace_child(sum, a, sum));
    assert_eq!(arena.parent_of(a), sum);
    assert!(arena.parent_of(statement).is_none());
}

#[test]
fn test_replacing_with_itself() {
    let mut arena = NodeArena::new();
    let a = lookup(&mut arena, 0, "a");
    let b = lookup(&mut arena, 4, "b");
    let sum = plus(&mut arena, 2, a, b);

    assert!(arena.replace_child(sum, a, a));
    assert_eq!(arena.parent_of(a), sum);
}

#[test]
fn test_replacement_widens_ancestors() {
    let mut arena = NodeArena::new();
    let a = lookup(&mut arena, 0, "a");
    let b = lookup(&mut arena, 4, "b");
    let sum = plus(&mut arena, 2, a, b);
    let statement = arena.add_expression_statement(
        TokenSpan::detached(5, 6, JsToken::Semicolon),
        sum,
    );
    let program = arena.add_program(span(0, 6), &[statement]);
    assert_eq!(span_range(&arena, sum), (0, 5));
    assert_eq!(span_range(&arena, program), (0, 6));

    let far = lookup(&mut arena, 20, "far");
    assert!(arena.replace_child(sum, b, far));
    assert_eq!(span_range(&arena, sum), (0, 23));
    assert_eq!(span_range(&arena, statement), (0, 23));
    assert_eq!(span_range(&arena, program), (0, 23));
}

#[test]
fn test_set_child_fills_and_clears_slots() {
    let mut arena = NodeArena::new();
    let body = arena.add_block(span(10, 12), &[]);
    let for_loop = arena.add_for(span(0, 3), NodeIndex::NONE, NodeIndex::NONE, NodeIndex::NONE, body);
    let condition = lookup(&mut arena, 5, "c");

    assert!(arena.set_child(for_loop, 1, condition));
    assert_eq!(arena.parent_of(condition), for_loop);
    assert_eq!(arena.children(for_loop).collect::<Vec<_>>(), vec![condition, body]);

    assert!(arena.set_child(for_loop, 1, NodeIndex::NONE));
    assert!(arena.parent_of(condition).is_none());
    assert_eq!(arena.children(for_loop).collect::<Vec<_>>(), vec![body]);

    assert!(!arena.set_child(for_loop, 4, condition));
    assert!(arena.set_child(for_loop, 0, NodeIndex::NONE));
}

#[test]
fn test_set_child_on_list_is_index_assignment() {
    let mut arena = NodeArena::new();
    let a = lookup(&mut arena, 0, "a");
    let b = lookup(&mut arena, 2, "b");
    let list = arena.add_list(crate::ListFamily::Expressions, span(0, 0), &[a, b]);

    assert!(arena.set_child(list, 0, NodeIndex::NONE));
    assert_eq!(arena.list_nodes(list), &[b]);
    assert!(!arena.set_child(list, 3, a));
}

#[test]
fn test_duplicate_child_keeps_last_slot() {
    let mut arena = NodeArena::new();
    let x = lookup(&mut arena, 0, "x");
    let sum = plus(&mut arena, 2, x, x);

    assert_eq!(arena.parent_of(x), sum);
    match arena.data(sum) {
        Some(NodeData::BinaryOperator { left, right, .. }) => {
            assert!(left.is_none());
            assert_eq!(*right, x);
        }
        other => panic!("expected a binary operator, got {other:?}"),
    }
    assert_eq!(arena.children(sum).collect::<Vec<_>>(), vec![x]);
}
