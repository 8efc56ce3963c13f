//! Property tests: printed trees parse back, layout is irrelevant, and
//! arbitrary input never panics.

#![allow(clippy::unwrap_used)]

use astra_ir::{Condition, OpType, PropertyPath, ReferenceType, ValueRef, Variable};
use proptest::prelude::*;

use crate::{parse_condition, parse_value_ref};

/// Leaves that print as a single token.
fn arb_leaf() -> impl Strategy<Value = ValueRef<i32>> {
    prop_oneof![
        (0i32..100_000).prop_map(ValueRef::Constant),
        Just(ValueRef::Variable(Variable::current_value())),
        Just(ValueRef::Variable(Variable::non_object("currentturn"))),
        prop_oneof![
            Just(ReferenceType::Source),
            Just(ReferenceType::EffectTarget),
            Just(ReferenceType::ConditionLocalCandidate),
        ]
        .prop_map(|reference| {
            ValueRef::Variable(Variable::new(reference, PropertyPath::new(None, "owner")))
        }),
    ]
}

fn arb_op() -> impl Strategy<Value = OpType> {
    prop_oneof![
        Just(OpType::Plus),
        Just(OpType::Minus),
        Just(OpType::Times),
        Just(OpType::Divides),
    ]
}

fn arb_value() -> impl Strategy<Value = ValueRef<i32>> {
    arb_leaf().prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            (arb_op(), inner.clone(), inner.clone())
                .prop_map(|(op, lhs, rhs)| ValueRef::binary(op, lhs, rhs)),
            inner.prop_map(ValueRef::negate),
        ]
    })
}

fn arb_condition() -> impl Strategy<Value = Condition> {
    let leaf = prop_oneof![
        Just(Condition::All),
        Just(Condition::Source),
        Just(Condition::Capital),
        Just(Condition::Monster),
        (0i32..50).prop_map(|n| Condition::Turn {
            low: ValueRef::Constant(n),
            high: ValueRef::unbounded_high(),
        }),
    ];
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(Condition::And),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Condition::Or),
            inner.prop_map(|c| Condition::Not(Box::new(c))),
        ]
    })
}

/// Whitespace or a comment, possibly mixed.
fn arb_separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(" "),
        Just("\n"),
        Just("\t "),
        Just(" /* note */ "),
        Just(" // trailing\n"),
        Just("\r\n  "),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn integer_constants(n in 0i32..=i32::MAX) {
        prop_assert_eq!(parse_value_ref::<i32>(&n.to_string()).unwrap(), ValueRef::Constant(n));
    }

    #[test]
    fn integer_overflow_is_rejected(n in (i64::from(i32::MAX) + 1)..i64::MAX) {
        prop_assert!(parse_value_ref::<i32>(&n.to_string()).is_err());
    }

    #[test]
    fn printed_values_reparse(value in arb_value()) {
        let printed = value.to_string();
        prop_assert_eq!(parse_value_ref::<i32>(&printed).unwrap(), value);
    }

    #[test]
    fn printed_conditions_reparse(condition in arb_condition()) {
        let printed = condition.to_string();
        prop_assert_eq!(parse_condition(&printed).unwrap(), condition);
    }

    #[test]
    fn layout_does_not_change_the_tree(
        condition in arb_condition(),
        separators in prop::collection::vec(arb_separator(), 1..64),
    ) {
        let printed = condition.to_string();
        let mut spaced = String::new();
        let mut next = separators.iter().cycle();
        for (i, part) in printed.split(' ').enumerate() {
            if i > 0 {
                spaced.push_str(next.next().copied().unwrap_or(" "));
            }
            spaced.push_str(part);
        }
        prop_assert_eq!(parse_condition(&spaced).unwrap(), condition);
    }

    #[test]
    fn arbitrary_input_never_panics(source in "[ -~\n]{0,64}") {
        if let Err(error) = parse_condition(&source) {
            prop_assert!(error.span.start as usize <= source.len());
            prop_assert!(error.line >= 1);
            prop_assert!(error.column >= 1);
        }
    }
}
