//! Threshold conditions: meters, stockpiles, counts, turns.
//!
//! Omitted `low` / `high` bounds become the unbounded sentinels of the bound
//! type, so a range is always two values.

use astra_ir::{Bounded, Condition, MeterType, ResourceType, SortingMethod, ValueRef};

use crate::grammar::ValueType;
use crate::parser::{PResult, Parser};

impl Parser<'_> {
    /// `[low = T] [high = T]`
    fn bounds<T: ValueType + Bounded>(&mut self) -> (ValueRef<T>, ValueRef<T>) {
        let low = self
            .optional(|p| {
                p.label("low")?;
                p.value_ref::<T>()
            })
            .unwrap_or_else(ValueRef::unbounded_low);
        let high = self
            .optional(|p| {
                p.label("high")?;
                p.value_ref::<T>()
            })
            .unwrap_or_else(ValueRef::unbounded_high);
        (low, high)
    }

    pub(super) fn meter_value(&mut self, meter: MeterType) -> PResult<Condition> {
        let (low, high) = self.bounds::<f64>();
        Ok(Condition::MeterValue { meter, low, high })
    }

    pub(super) fn stockpile_value(&mut self, stockpile: ResourceType) -> PResult<Condition> {
        let (low, high) = self.bounds::<f64>();
        Ok(Condition::EmpireStockpileValue {
            stockpile,
            low,
            high,
        })
    }

    pub(super) fn design_has_part(&mut self) -> PResult<Condition> {
        let (low, high) = self.bounds::<i32>();
        self.label("name")?;
        let name = self.value_ref::<String>()?;
        Ok(Condition::DesignHasPart { low, high, name })
    }

    pub(super) fn number(&mut self) -> PResult<Condition> {
        let (low, high) = self.bounds::<i32>();
        self.label("condition")?;
        let condition = Box::new(self.condition()?);
        Ok(Condition::Number {
            low,
            high,
            condition,
        })
    }

    pub(super) fn turn(&mut self) -> PResult<Condition> {
        let (low, high) = self.bounds::<i32>();
        Ok(Condition::Turn { low, high })
    }

    pub(super) fn created_on_turn(&mut self) -> PResult<Condition> {
        let (low, high) = self.bounds::<i32>();
        Ok(Condition::CreatedOnTurn { low, high })
    }

    /// `numberof number = INT condition = C`, or for the sorted variants
    /// `number = INT sortkey = DOUBLE condition = C`.
    pub(super) fn sorted_number_of(&mut self, sorting_method: SortingMethod) -> PResult<Condition> {
        self.label("number")?;
        let number = self.value_ref::<i32>()?;
        let sort_key = if sorting_method == SortingMethod::Random {
            None
        } else {
            self.label("sortkey")?;
            Some(self.value_ref::<f64>()?)
        };
        self.label("condition")?;
        let condition = Box::new(self.condition()?);
        Ok(Condition::SortedNumberOf {
            number,
            sort_key,
            sorting_method,
            condition,
        })
    }
}
