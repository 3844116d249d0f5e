//! Benchmarks for the per-keystroke paths
//!
//! Run with: cargo bench editing

use formula_editor::editable::EditableState;
use formula_editor::grammar::{rule_for, ChordTable, Keystroke, Modifiers, NotationMode, TokenId};
use formula_editor::status::resolve;
use formula_editor::template::{substitute, ArgumentBinding};
use formula_editor::verification::{
    CheckerReport, ReportedError, ValueClass, VerificationResult,
};

fn main() {
    divan::main();
}

// ============================================================================
// Token insertion
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn replace_tokens(count: usize) {
    let mut field = EditableState::from_text("");
    for _ in 0..count {
        rule_for(TokenId::Union).apply(&mut field);
    }
    divan::black_box(field.len_chars());
}

#[divan::bench(args = [10, 100])]
fn nested_envelopes(depth: usize) {
    let mut field = EditableState::from_text("X1");
    field.select_all();
    for _ in 0..depth {
        rule_for(TokenId::Boolean).apply(&mut field);
    }
    divan::black_box(field.selection());
}

#[divan::bench]
fn toggle_parentheses_long_expression() {
    let mut field = EditableState::from_text(&"X1∪X2∩".repeat(500));
    field.set_selection(600, 1200);
    rule_for(TokenId::Parentheses).apply(&mut field);
    rule_for(TokenId::Parentheses).apply(&mut field);
    divan::black_box(field.len_chars());
}

#[divan::bench]
fn external_edit_append() {
    let mut field = EditableState::from_text(&"X1∪X2∩".repeat(500));
    let mut next = field.text();
    next.push('X');
    field.apply_external_edit(&next, None);
    divan::black_box(field.len_chars());
}

// ============================================================================
// Chord lookup
// ============================================================================

#[divan::bench]
fn chord_lookup(bencher: divan::Bencher) {
    let table = ChordTable::with_defaults();
    let hit = Keystroke::char_with_mods('a', Modifiers::ALT | Modifiers::SHIFT);
    let miss = Keystroke::char('q');
    bencher.bench(|| {
        divan::black_box(table.chord_for(&hit, NotationMode::Symbolic));
        divan::black_box(table.chord_for(&miss, NotationMode::Symbolic));
    });
}

// ============================================================================
// Template substitution
// ============================================================================

#[divan::bench(args = [2, 8, 32])]
fn substitute_arguments(bencher: divan::Bencher, arity: usize) {
    let bindings: Vec<ArgumentBinding> = (1..=arity)
        .map(|i| ArgumentBinding::new(format!("R{i}"), "ℬ(X1)", format!("X{i}∪∅")))
        .collect();
    let template: String = (1..=arity)
        .map(|i| format!("R{i}"))
        .collect::<Vec<_>>()
        .join("∩");

    bencher.bench(|| substitute(divan::black_box(&template), divan::black_box(&bindings)));
}

// ============================================================================
// Status
// ============================================================================

#[divan::bench]
fn resolve_status_many_errors(bencher: divan::Bencher) {
    let report = CheckerReport {
        errors: (0..1000)
            .map(|i| ReportedError {
                code: i,
                is_critical: i == 999,
                absolute_position: i as usize,
                params: Vec::new(),
            })
            .collect(),
        value_class: ValueClass::Value,
        ..Default::default()
    };
    let result = VerificationResult::from_report("X1", 5, report);

    bencher.bench(|| resolve(false, divan::black_box(Some(&result))));
}
