//! Boolean composition and annotation of conditions.

use astra_ir::Condition;

use crate::parser::{PResult, Parser};

impl Parser<'_> {
    /// `and [ C+ ]`
    pub(super) fn and(&mut self) -> PResult<Condition> {
        self.bracketed(Self::condition).map(Condition::And)
    }

    /// `or [ C+ ]`
    pub(super) fn or(&mut self) -> PResult<Condition> {
        self.bracketed(Self::condition).map(Condition::Or)
    }

    /// `not C`
    pub(super) fn not(&mut self) -> PResult<Condition> {
        self.condition().map(|c| Condition::Not(Box::new(c)))
    }

    /// `described description = "NAME" condition = C`
    pub(super) fn described(&mut self) -> PResult<Condition> {
        self.label("description")?;
        let description = self.quoted_name()?.to_owned();
        self.label("condition")?;
        let condition = Box::new(self.condition()?);
        Ok(Condition::Described {
            description,
            condition,
        })
    }
}
