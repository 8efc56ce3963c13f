//! Per-type policy for value expressions.

use astra_ir::{
    CastSource, Keyword, PlanetEnvironment, PlanetSize, PlanetType, StarType, StatisticType,
    UniverseObjectType, ValueKind, ValueRef, Variable,
};
use astra_lexer::properties::{
    double_non_object_properties, double_properties, int_non_object_properties, int_properties,
    no_properties, object_type_properties, planet_environment_properties,
    planet_size_properties, planet_type_properties, star_type_properties, string_properties,
};
use astra_lexer::PropertyTable;

use crate::parser::{PResult, Parser};

/// Numeric type a property of another type can be read as, then converted.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastKind {
    Int,
    Double,
}

impl CastKind {
    pub(crate) fn properties(self, non_object: bool) -> &'static PropertyTable {
        match (self, non_object) {
            (CastKind::Int, false) => int_properties(),
            (CastKind::Int, true) => int_non_object_properties(),
            (CastKind::Double, false) => double_properties(),
            (CastKind::Double, true) => double_non_object_properties(),
        }
    }

    /// `variable`, read as this kind and converted to `T`.
    pub(crate) fn wrap<T: ValueKind>(self, variable: Variable) -> ValueRef<T> {
        ValueRef::cast(match self {
            CastKind::Int => CastSource::Int(ValueRef::Variable(variable)),
            CastKind::Double => CastSource::Double(ValueRef::Variable(variable)),
        })
    }
}

const ALL_STATISTICS: &[StatisticType] = <StatisticType as Keyword>::ALL;
const COUNT_AND_MODE: &[StatisticType] = &[StatisticType::Count, StatisticType::Mode];

/// A type value expressions can produce.
///
/// Each type decides how its constants are written, which object properties
/// it can read directly, which it can read through a numeric conversion, and
/// which statistics make sense for it.
pub trait ValueType: ValueKind {
    /// Statistics admissible for this type.
    const STATISTICS: &'static [StatisticType];
    /// Types whose properties may be read and converted to this one.
    #[doc(hidden)]
    const CASTS: &'static [CastKind];

    #[doc(hidden)]
    fn constant(parser: &mut Parser<'_>) -> PResult<Self>;

    /// Properties read from a referenced object.
    fn properties() -> &'static PropertyTable;

    /// Properties read from game state without an object reference.
    fn non_object_properties() -> &'static PropertyTable {
        no_properties()
    }
}

impl ValueType for i32 {
    const STATISTICS: &'static [StatisticType] = ALL_STATISTICS;
    const CASTS: &'static [CastKind] = &[];

    fn constant(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.integer()
    }

    fn properties() -> &'static PropertyTable {
        int_properties()
    }

    fn non_object_properties() -> &'static PropertyTable {
        int_non_object_properties()
    }
}

impl ValueType for f64 {
    const STATISTICS: &'static [StatisticType] = ALL_STATISTICS;
    const CASTS: &'static [CastKind] = &[CastKind::Int];

    fn constant(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.real()
    }

    fn properties() -> &'static PropertyTable {
        double_properties()
    }

    fn non_object_properties() -> &'static PropertyTable {
        double_non_object_properties()
    }
}

impl ValueType for String {
    const STATISTICS: &'static [StatisticType] = COUNT_AND_MODE;
    const CASTS: &'static [CastKind] = &[CastKind::Int, CastKind::Double];

    fn constant(parser: &mut Parser<'_>) -> PResult<Self> {
        parser.quoted_name().map(str::to_owned)
    }

    fn properties() -> &'static PropertyTable {
        string_properties()
    }
}

macro_rules! symbol_value_type {
    ($($ty:ty => $properties:ident),+ $(,)?) => {
        $(
            impl ValueType for $ty {
                const STATISTICS: &'static [StatisticType] = COUNT_AND_MODE;
                const CASTS: &'static [CastKind] = &[];

                fn constant(parser: &mut Parser<'_>) -> PResult<Self> {
                    parser.symbol::<$ty>()
                }

                fn properties() -> &'static PropertyTable {
                    $properties()
                }
            }
        )+
    };
}

symbol_value_type! {
    PlanetType => planet_type_properties,
    PlanetSize => planet_size_properties,
    PlanetEnvironment => planet_environment_properties,
    UniverseObjectType => object_type_properties,
    StarType => star_type_properties,
}
