//! Typed value expressions.
//!
//! A [`ValueRef<T>`] computes a value of type `T` when evaluated against a
//! game state: a literal, a property of a referenced object, an aggregate
//! over the objects matching a [`Condition`], or arithmetic over those.
//!
//! Trees are built once by the parser and never mutated.

use std::fmt;

use crate::enums::{
    ContainerType, OpType, PlanetEnvironment, PlanetSize, PlanetType, ReferenceType, StarType,
    StatisticType, UniverseObjectType,
};
use crate::{Condition, Keyword};

/// A type a value expression can produce.
pub trait ValueKind: Clone + PartialEq + fmt::Debug + 'static {
    /// Name of the type in messages (`int`, `double`, `string`, ...).
    const TYPE_NAME: &'static str;

    /// Write a constant of this type in content syntax.
    fn fmt_constant(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl ValueKind for i32 {
    const TYPE_NAME: &'static str = "int";

    fn fmt_constant(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl ValueKind for f64 {
    const TYPE_NAME: &'static str = "double";

    fn fmt_constant(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl ValueKind for String {
    const TYPE_NAME: &'static str = "string";

    fn fmt_constant(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

macro_rules! keyword_value_kind {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl ValueKind for $ty {
                const TYPE_NAME: &'static str = $name;

                fn fmt_constant(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.keyword())
                }
            }
        )+
    };
}

keyword_value_kind! {
    PlanetType => "planet type",
    PlanetSize => "planet size",
    PlanetEnvironment => "planet environment",
    StarType => "star type",
    UniverseObjectType => "object type",
}

/// Numeric types with sentinel constants for absent range bounds.
///
/// Conditions such as `number [low = ..] [high = ..]` store the sentinel when
/// a bound is omitted instead of an `Option`.
pub trait Bounded: ValueKind + Copy {
    const UNBOUNDED_LOW: Self;
    const UNBOUNDED_HIGH: Self;
}

impl Bounded for i32 {
    const UNBOUNDED_LOW: Self = i32::MIN;
    const UNBOUNDED_HIGH: Self = i32::MAX;
}

impl Bounded for f64 {
    const UNBOUNDED_LOW: Self = -f64::MAX;
    const UNBOUNDED_HIGH: Self = f64::MAX;
}

/// Property reached from a reference object, optionally through one container.
///
/// `source.planet.population` has container `Planet` and property
/// `population`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PropertyPath {
    pub container: Option<ContainerType>,
    pub property: &'static str,
}

impl PropertyPath {
    pub const fn new(container: Option<ContainerType>, property: &'static str) -> Self {
        PropertyPath {
            container,
            property,
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(container) = self.container {
            write!(f, "{container}.")?;
        }
        f.write_str(self.property)
    }
}

/// A property read from a referenced object.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Variable {
    pub reference: ReferenceType,
    pub path: PropertyPath,
}

impl Variable {
    pub const fn new(reference: ReferenceType, path: PropertyPath) -> Self {
        Variable { reference, path }
    }

    /// The bare `value` variable: the current value of whatever an effect sets.
    pub const fn current_value() -> Self {
        Variable::new(ReferenceType::EffectTarget, PropertyPath::new(None, "value"))
    }

    /// A variable read from game state rather than from an object.
    pub const fn non_object(property: &'static str) -> Self {
        Variable::new(ReferenceType::NonObject, PropertyPath::new(None, property))
    }

    pub fn is_current_value(&self) -> bool {
        *self == Variable::current_value()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reference == ReferenceType::NonObject || self.is_current_value() {
            return f.write_str(self.path.property);
        }
        write!(f, "{}.{}", self.reference, self.path)
    }
}

/// Aggregate of a property over every object matching `sampling`.
///
/// `property` is `None` exactly for [`StatisticType::Count`].
#[derive(Clone, PartialEq, Debug)]
pub struct Statistic {
    pub kind: StatisticType,
    pub property: Option<PropertyPath>,
    pub sampling: Box<Condition>,
}

impl Statistic {
    pub fn count(sampling: Condition) -> Self {
        Statistic {
            kind: StatisticType::Count,
            property: None,
            sampling: Box::new(sampling),
        }
    }

    pub fn new(kind: StatisticType, property: PropertyPath, sampling: Condition) -> Self {
        Statistic {
            kind,
            property: Some(property),
            sampling: Box::new(sampling),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Parenthesised so a trailing operator never reads as part of the
        // sampling condition.
        write!(f, "({}", self.kind)?;
        if let Some(property) = &self.property {
            write!(f, " property = {property}")?;
        }
        write!(f, " condition = {})", self.sampling)
    }
}

/// A variable of another numeric type, converted to the enclosing type.
#[derive(Clone, PartialEq, Debug)]
pub enum CastSource {
    Int(ValueRef<i32>),
    Double(ValueRef<f64>),
}

impl fmt::Display for CastSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastSource::Int(inner) => inner.fmt(f),
            CastSource::Double(inner) => inner.fmt(f),
        }
    }
}

/// Typed value expression producing a `T`.
#[derive(Clone, PartialEq, Debug)]
pub enum ValueRef<T: ValueKind> {
    Constant(T),
    Variable(Variable),
    Statistic(Statistic),
    /// Arithmetic; `rhs` is `None` exactly when `op` is [`OpType::Negate`].
    Operation {
        op: OpType,
        lhs: Box<ValueRef<T>>,
        rhs: Option<Box<ValueRef<T>>>,
    },
    /// Conversion from a variable of another type. Only ever wraps a
    /// `Variable` leaf.
    Cast(Box<CastSource>),
}

impl<T: ValueKind> ValueRef<T> {
    pub fn binary(op: OpType, lhs: ValueRef<T>, rhs: ValueRef<T>) -> Self {
        debug_assert!(!op.is_unary());
        ValueRef::Operation {
            op,
            lhs: Box::new(lhs),
            rhs: Some(Box::new(rhs)),
        }
    }

    pub fn negate(operand: ValueRef<T>) -> Self {
        ValueRef::Operation {
            op: OpType::Negate,
            lhs: Box::new(operand),
            rhs: None,
        }
    }

    pub fn cast(source: CastSource) -> Self {
        ValueRef::Cast(Box::new(source))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, ValueRef::Constant(_))
    }

    pub fn as_constant(&self) -> Option<&T> {
        match self {
            ValueRef::Constant(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Bounded> ValueRef<T> {
    pub fn unbounded_low() -> Self {
        ValueRef::Constant(T::UNBOUNDED_LOW)
    }

    pub fn unbounded_high() -> Self {
        ValueRef::Constant(T::UNBOUNDED_HIGH)
    }

    pub fn is_unbounded_low(&self) -> bool {
        self.as_constant() == Some(&T::UNBOUNDED_LOW)
    }

    pub fn is_unbounded_high(&self) -> bool {
        self.as_constant() == Some(&T::UNBOUNDED_HIGH)
    }
}

impl<T: ValueKind> fmt::Display for ValueRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Constant(value) => value.fmt_constant(f),
            ValueRef::Variable(variable) => variable.fmt(f),
            ValueRef::Statistic(statistic) => statistic.fmt(f),
            ValueRef::Operation { op, lhs, rhs: None } => {
                if matches!(**lhs, ValueRef::Operation { rhs: None, .. }) {
                    write!(f, "{op}({lhs})")
                } else {
                    write!(f, "{op}{lhs}")
                }
            }
            ValueRef::Operation {
                op,
                lhs,
                rhs: Some(rhs),
            } => write!(f, "({lhs} {op} {rhs})"),
            ValueRef::Cast(source) => source.fmt(f),
        }
    }
}
