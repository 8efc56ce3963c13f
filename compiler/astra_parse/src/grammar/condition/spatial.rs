//! Conditions relating a candidate to other objects: distance, starlane
//! jumps, supply connection, containment.

use astra_ir::Condition;

use crate::parser::{PResult, Parser};

impl Parser<'_> {
    /// `condition = C`, boxed.
    fn nested_condition(&mut self) -> PResult<Box<Condition>> {
        self.label("condition")?;
        self.condition().map(Box::new)
    }

    pub(super) fn resource_supply_connected(&mut self) -> PResult<Condition> {
        self.label("empire")?;
        let empire = self.value_ref::<i32>()?;
        let condition = self.nested_condition()?;
        Ok(Condition::ResourceSupplyConnectedByEmpire { empire, condition })
    }

    pub(super) fn within_distance(&mut self) -> PResult<Condition> {
        self.label("distance")?;
        let distance = self.value_ref::<f64>()?;
        let condition = self.nested_condition()?;
        Ok(Condition::WithinDistance {
            distance,
            condition,
        })
    }

    /// Negative jump counts are accepted; only the shape is checked here.
    pub(super) fn within_starlane_jumps(&mut self) -> PResult<Condition> {
        self.label("jumps")?;
        let jumps = self.value_ref::<i32>()?;
        let condition = self.nested_condition()?;
        Ok(Condition::WithinStarlaneJumps { jumps, condition })
    }

    pub(super) fn contains(&mut self) -> PResult<Condition> {
        self.condition().map(|c| Condition::Contains(Box::new(c)))
    }

    pub(super) fn contained_by(&mut self) -> PResult<Condition> {
        self.condition().map(|c| Condition::ContainedBy(Box::new(c)))
    }
}
