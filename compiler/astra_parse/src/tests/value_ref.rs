//! Value expression tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use astra_ir::{
    CastSource, Condition, ContainerType, OpType, PlanetType, PropertyPath, ReferenceType,
    Statistic, StatisticType, UniverseObjectType, ValueRef, Variable,
};
use pretty_assertions::assert_eq;

use super::{double, int, string};
use crate::{parse_value_ref, ErrorContext};

fn variable(reference: ReferenceType, property: &'static str) -> Variable {
    Variable::new(reference, PropertyPath::new(None, property))
}

// === Arithmetic shape ===

#[test]
fn times_binds_tighter_than_plus() {
    assert_eq!(
        parse_value_ref::<i32>("2 + 3 * 4").unwrap(),
        ValueRef::binary(OpType::Plus, int(2), ValueRef::binary(OpType::Times, int(3), int(4)))
    );
    assert_eq!(
        parse_value_ref::<i32>("2*3+4").unwrap(),
        ValueRef::binary(OpType::Plus, ValueRef::binary(OpType::Times, int(2), int(3)), int(4))
    );
}

#[test]
fn minus_chains_lean_right() {
    assert_eq!(
        parse_value_ref::<i32>("8 - 4 - 2").unwrap(),
        ValueRef::binary(OpType::Minus, int(8), ValueRef::binary(OpType::Minus, int(4), int(2)))
    );
    assert_eq!(
        parse_value_ref::<i32>("(8 - 4) - 2").unwrap(),
        ValueRef::binary(OpType::Minus, ValueRef::binary(OpType::Minus, int(8), int(4)), int(2))
    );
}

#[test]
fn division_chains_lean_right() {
    assert_eq!(
        parse_value_ref::<f64>("8 / 4 / 2").unwrap(),
        ValueRef::binary(
            OpType::Divides,
            double(8.0),
            ValueRef::binary(OpType::Divides, double(4.0), double(2.0))
        )
    );
}

#[test]
fn unary_minus_applies_to_a_primary() {
    assert_eq!(parse_value_ref::<i32>("-5").unwrap(), ValueRef::negate(int(5)));
    assert_eq!(
        parse_value_ref::<i32>("-(-5)").unwrap(),
        ValueRef::negate(ValueRef::negate(int(5)))
    );
    assert_eq!(
        parse_value_ref::<i32>("3 - -2").unwrap(),
        ValueRef::binary(OpType::Minus, int(3), ValueRef::negate(int(2)))
    );
    assert_eq!(
        parse_value_ref::<i32>("-2 * 3").unwrap(),
        ValueRef::binary(OpType::Times, ValueRef::negate(int(2)), int(3))
    );
    assert!(parse_value_ref::<i32>("--5").is_err());
}

// === Constants ===

#[test]
fn constants_follow_the_value_type() {
    assert_eq!(parse_value_ref::<f64>("2.5").unwrap(), double(2.5));
    assert_eq!(parse_value_ref::<f64>("12").unwrap(), double(12.0));
    assert_eq!(parse_value_ref::<String>("\"GRO_GENETIC\"").unwrap(), string("GRO_GENETIC"));
    assert_eq!(
        parse_value_ref::<PlanetType>("GasGiant").unwrap(),
        ValueRef::Constant(PlanetType::GasGiant)
    );
    assert!(parse_value_ref::<i32>("3.5").is_err());
    assert!(parse_value_ref::<i32>("2147483648").is_err());
    assert!(parse_value_ref::<String>("GRO_GENETIC").is_err());
}

#[test]
fn enum_keywords_are_not_string_constants() {
    assert!(parse_value_ref::<String>("swamp").is_err());
}

// === Variables ===

#[test]
fn object_variables() {
    assert_eq!(
        parse_value_ref::<f64>("source.industry").unwrap(),
        ValueRef::Variable(variable(ReferenceType::Source, "industry"))
    );
    assert_eq!(
        parse_value_ref::<f64>("LocalCandidate . Population").unwrap(),
        ValueRef::Variable(variable(ReferenceType::ConditionLocalCandidate, "population"))
    );
    assert_eq!(
        parse_value_ref::<i32>("rootcandidate.owner").unwrap(),
        ValueRef::Variable(variable(ReferenceType::ConditionRootCandidate, "owner"))
    );
}

#[test]
fn container_hop() {
    assert_eq!(
        parse_value_ref::<f64>("target.planet.population").unwrap(),
        ValueRef::Variable(Variable::new(
            ReferenceType::EffectTarget,
            PropertyPath::new(Some(ContainerType::Planet), "population"),
        ))
    );
    assert!(parse_value_ref::<f64>("target.planet.system.population").is_err());
}

#[test]
fn value_and_non_object_variables() {
    assert_eq!(
        parse_value_ref::<f64>("value").unwrap(),
        ValueRef::Variable(Variable::current_value())
    );
    assert_eq!(
        parse_value_ref::<i32>("CurrentTurn").unwrap(),
        ValueRef::Variable(Variable::non_object("currentturn"))
    );
    assert_eq!(
        parse_value_ref::<f64>("universecentrex").unwrap(),
        ValueRef::Variable(Variable::non_object("universecentrex"))
    );
}

#[test]
fn properties_must_suit_the_type() {
    assert!(parse_value_ref::<i32>("source.population").is_err());
    assert!(parse_value_ref::<PlanetType>("source.name").is_err());
    assert!(parse_value_ref::<f64>("source.bogus").is_err());
}

// === Casts ===

#[test]
fn string_reads_numeric_properties_through_a_cast() {
    assert_eq!(
        parse_value_ref::<String>("source.population").unwrap(),
        ValueRef::cast(CastSource::Double(ValueRef::Variable(variable(
            ReferenceType::Source,
            "population"
        ))))
    );
    assert_eq!(
        parse_value_ref::<String>("source.owner").unwrap(),
        ValueRef::cast(CastSource::Int(ValueRef::Variable(variable(
            ReferenceType::Source,
            "owner"
        ))))
    );
    assert_eq!(
        parse_value_ref::<String>("source.name").unwrap(),
        ValueRef::Variable(variable(ReferenceType::Source, "name"))
    );
}

#[test]
fn double_reads_int_properties_through_a_cast() {
    assert_eq!(
        parse_value_ref::<f64>("currentturn * 2").unwrap(),
        ValueRef::binary(
            OpType::Times,
            ValueRef::cast(CastSource::Int(ValueRef::Variable(Variable::non_object(
                "currentturn"
            )))),
            double(2.0),
        )
    );
}

// === Statistics ===

#[test]
fn count_statistic() {
    assert_eq!(
        parse_value_ref::<i32>("number condition = planet type = swamp").unwrap(),
        ValueRef::Statistic(Statistic::count(Condition::PlanetType(vec![
            ValueRef::Constant(PlanetType::Swamp)
        ])))
    );
}

#[test]
fn property_statistics() {
    assert_eq!(
        parse_value_ref::<f64>("sum property = system.industry condition = all").unwrap(),
        ValueRef::Statistic(Statistic::new(
            StatisticType::Sum,
            PropertyPath::new(Some(ContainerType::System), "industry"),
            Condition::All,
        ))
    );
    assert_eq!(
        parse_value_ref::<PlanetType>("mode property = planettype condition = planet").unwrap(),
        ValueRef::Statistic(Statistic::new(
            StatisticType::Mode,
            PropertyPath::new(None, "planettype"),
            Condition::Type(ValueRef::Constant(UniverseObjectType::Planet)),
        ))
    );
}

#[test]
fn string_and_enum_statistics_are_restricted() {
    assert!(parse_value_ref::<String>("mode property = name condition = all").is_ok());
    assert!(parse_value_ref::<String>("number condition = all").is_ok());
    assert!(parse_value_ref::<String>("sum property = population condition = all").is_err());
    assert!(parse_value_ref::<PlanetType>("max property = planettype condition = all").is_err());
}

#[test]
fn statistic_properties_must_be_native() {
    // Readable through a cast as plain variables, but not as statistics.
    assert!(parse_value_ref::<String>("source.population").is_ok());
    assert!(parse_value_ref::<f64>("target.age").is_ok());

    let error =
        parse_value_ref::<String>("mode property = population condition = all").unwrap_err();
    assert_eq!(error.span.start, 16);
    assert_eq!(error.context, Some(ErrorContext::Statistic));
    assert!(parse_value_ref::<f64>("sum property = age condition = all").is_err());
    assert!(parse_value_ref::<i32>("sum property = age condition = all").is_ok());
}

#[test]
fn statistics_nest_in_arithmetic() {
    let parsed = parse_value_ref::<f64>("1 + (mean property = population condition = all)").unwrap();
    assert_eq!(
        parsed,
        ValueRef::binary(
            OpType::Plus,
            double(1.0),
            ValueRef::Statistic(Statistic::new(
                StatisticType::Mean,
                PropertyPath::new(None, "population"),
                Condition::All,
            )),
        )
    );
}

// === Depth ===

#[test]
fn deeply_parenthesised_values() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_value_ref::<i32>(&source).unwrap(), int(1));
}

#[test]
fn long_minus_chains() {
    let source = vec!["1"; 5_000].join(" - ");
    let parsed = parse_value_ref::<i32>(&source).unwrap();
    assert!(matches!(parsed, ValueRef::Operation { op: OpType::Minus, .. }));
}
