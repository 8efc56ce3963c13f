//! Value expressions.
//!
//! ```text
//! expr     := plus ('-' expr)?
//! plus     := divides ('+' plus)?
//! divides  := times ('/' divides)?
//! times    := negative ('*' times)?
//! negative := '-' primary | primary
//! primary  := constant | variable | statistic | '(' expr ')'
//! ```
//!
//! Every binary level is right-recursive, so `8 - 4 - 2` groups as
//! `8 - (4 - 2)`. Content is written with that grouping in mind; do not
//! "fix" it to left association.

mod types;

use astra_ir::{
    ContainerType, OpType, PropertyPath, ReferenceType, Statistic, StatisticType, ValueRef,
    Variable,
};
use astra_stack::ensure_sufficient_stack;

use types::CastKind;
pub use types::ValueType;

use crate::error::{ErrorContext, Expected};
use crate::parser::{Mismatch, PResult, Parser};

type Level<'a, T> = fn(&mut Parser<'a>) -> PResult<ValueRef<T>>;

impl<'a> Parser<'a> {
    /// A complete value expression of type `T`.
    pub(crate) fn value_ref<T: ValueType>(&mut self) -> PResult<ValueRef<T>> {
        ensure_sufficient_stack(|| {
            self.in_context(ErrorContext::Value(T::TYPE_NAME), Self::value_minus::<T>)
        })
    }

    /// `operand (symbol this_level)?`, building `op` when the tail matches.
    fn right_recursive<T: ValueType>(
        &mut self,
        symbol: u8,
        op: OpType,
        operand: Level<'a, T>,
        this_level: Level<'a, T>,
    ) -> PResult<ValueRef<T>> {
        let lhs = operand(self)?;
        let rhs = self.attempt(|p| {
            p.punct(symbol)?;
            ensure_sufficient_stack(|| this_level(p))
        });
        Ok(match rhs {
            Ok(rhs) => ValueRef::binary(op, lhs, rhs),
            Err(Mismatch) => lhs,
        })
    }

    fn value_minus<T: ValueType>(&mut self) -> PResult<ValueRef<T>> {
        self.right_recursive(b'-', OpType::Minus, Self::value_plus::<T>, Self::value_minus::<T>)
    }

    fn value_plus<T: ValueType>(&mut self) -> PResult<ValueRef<T>> {
        self.right_recursive(b'+', OpType::Plus, Self::value_divides::<T>, Self::value_plus::<T>)
    }

    fn value_divides<T: ValueType>(&mut self) -> PResult<ValueRef<T>> {
        self.right_recursive(
            b'/',
            OpType::Divides,
            Self::value_times::<T>,
            Self::value_divides::<T>,
        )
    }

    fn value_times<T: ValueType>(&mut self) -> PResult<ValueRef<T>> {
        self.right_recursive(
            b'*',
            OpType::Times,
            Self::value_negative::<T>,
            Self::value_times::<T>,
        )
    }

    fn value_negative<T: ValueType>(&mut self) -> PResult<ValueRef<T>> {
        one_of!(self,
            |p: &mut Self| {
                p.punct(b'-')?;
                let operand = ensure_sufficient_stack(|| p.value_primary::<T>())?;
                Ok(ValueRef::negate(operand))
            },
            Self::value_primary::<T>,
        )
    }

    fn value_primary<T: ValueType>(&mut self) -> PResult<ValueRef<T>> {
        one_of!(self,
            |p: &mut Self| T::constant(p).map(ValueRef::Constant),
            Self::value_variable::<T>,
            Self::value_statistic::<T>,
            |p: &mut Self| {
                p.punct(b'(')?;
                let inner = p.value_ref::<T>()?;
                p.punct(b')')?;
                Ok(inner)
            },
        )
    }

    // === Variables ===

    fn value_variable<T: ValueType>(&mut self) -> PResult<ValueRef<T>> {
        one_of!(self,
            |p: &mut Self| {
                p.keyword("value")?;
                Ok(ValueRef::Variable(Variable::current_value()))
            },
            |p: &mut Self| {
                let (property, cast) = p.property::<T>(true, T::CASTS)?;
                Ok(typed_variable(Variable::non_object(property), cast))
            },
            |p: &mut Self| {
                let reference = p.symbol::<ReferenceType>()?;
                p.punct(b'.')?;
                let container = p.container_prefix();
                let (property, cast) = p.property::<T>(false, T::CASTS)?;
                let variable = Variable::new(reference, PropertyPath::new(container, property));
                Ok(typed_variable(variable, cast))
            },
        )
    }

    /// Optional `container .` in front of a property name.
    fn container_prefix(&mut self) -> Option<ContainerType> {
        self.optional(|p| {
            let container = p.symbol::<ContainerType>()?;
            p.punct(b'.')?;
            Ok(container)
        })
    }

    /// A property name readable as `T`, directly or through one of `casts`.
    fn property<T: ValueType>(
        &mut self,
        non_object: bool,
        casts: &[CastKind],
    ) -> PResult<(&'static str, Option<CastKind>)> {
        let snapshot = self.snapshot();
        let expected = Expected::Property(T::TYPE_NAME);
        let word = self.word(expected)?;
        let case = self.case();
        let native = if non_object {
            T::non_object_properties()
        } else {
            T::properties()
        };
        let found = native.lookup(word, case).map(|name| (name, None)).or_else(|| {
            casts.iter().find_map(|&kind| {
                kind.properties(non_object)
                    .lookup(word, case)
                    .map(|name| (name, Some(kind)))
            })
        });
        match found {
            Some(found) => Ok(found),
            None => {
                self.restore(snapshot);
                self.fail(expected)
            }
        }
    }

    // === Statistics ===

    /// `number condition = C` or `<kind> property = [container.]name condition = C`.
    ///
    /// The aggregated property must be native to `T`; statistics carry no cast.
    fn value_statistic<T: ValueType>(&mut self) -> PResult<ValueRef<T>> {
        let snapshot = self.snapshot();
        let kind = self.symbol::<StatisticType>()?;
        if !T::STATISTICS.contains(&kind) {
            self.restore(snapshot);
            return self.fail(Expected::Item("statistic"));
        }
        self.in_context(ErrorContext::Statistic, |p| {
            if kind == StatisticType::Count {
                p.label("condition")?;
                let sampling = p.condition()?;
                return Ok(ValueRef::Statistic(Statistic::count(sampling)));
            }
            p.label("property")?;
            let container = p.container_prefix();
            let (property, _) = p.property::<T>(false, &[])?;
            p.label("condition")?;
            let sampling = p.condition()?;
            Ok(ValueRef::Statistic(Statistic::new(
                kind,
                PropertyPath::new(container, property),
                sampling,
            )))
        })
    }
}

fn typed_variable<T: ValueType>(variable: Variable, cast: Option<CastKind>) -> ValueRef<T> {
    match cast {
        Some(kind) => kind.wrap(variable),
        None => ValueRef::Variable(variable),
    }
}
