//! Conditions on an object's own attributes: ownership, names, planet and
//! star kinds, design contents, visibility.

use astra_ir::{
    Condition, EmpireAffiliationType, PlanetEnvironment, PlanetSize, PlanetType, StarType,
    UniverseObjectType, ValueRef,
};

use crate::parser::{PResult, Parser};

impl Parser<'_> {
    /// ```text
    /// ownedby ( affiliation = (theempire|enemyof|allyof) empire = INT
    ///         | affiliation = (anyempire|none)
    ///         | empire = INT )
    /// ```
    pub(super) fn owned_by(&mut self) -> PResult<Condition> {
        one_of!(self,
            |p: &mut Self| {
                p.label("affiliation")?;
                let affiliation = p.symbol::<EmpireAffiliationType>()?;
                let empire = if affiliation.requires_empire() {
                    p.label("empire")?;
                    Some(p.value_ref::<i32>()?)
                } else {
                    None
                };
                Ok(Condition::EmpireAffiliation {
                    empire,
                    affiliation,
                })
            },
            |p: &mut Self| {
                p.label("empire")?;
                Ok(Condition::EmpireAffiliation {
                    empire: Some(p.value_ref::<i32>()?),
                    affiliation: EmpireAffiliationType::TheEmpire,
                })
            },
        )
    }

    /// `[label = LIST<STRING>]`; empty when absent.
    pub(super) fn optional_names(&mut self, label: &'static str) -> Vec<ValueRef<String>> {
        self.optional(|p| {
            p.label(label)?;
            p.list(Self::value_ref::<String>)
        })
        .unwrap_or_default()
    }

    /// `planet type = ..`, `planet size = ..`, `planet environment = ..`, or a
    /// bare `planet` matching any planet.
    pub(super) fn planet(&mut self) -> PResult<Condition> {
        one_of!(self,
            |p: &mut Self| {
                p.label("type")?;
                p.list(Self::value_ref::<PlanetType>).map(Condition::PlanetType)
            },
            |p: &mut Self| {
                p.label("size")?;
                p.list(Self::value_ref::<PlanetSize>).map(Condition::PlanetSize)
            },
            |p: &mut Self| {
                p.label("environment")?;
                p.list(Self::value_ref::<PlanetEnvironment>)
                    .map(Condition::PlanetEnvironment)
            },
            |_: &mut Self| Ok(Condition::Type(ValueRef::Constant(UniverseObjectType::Planet))),
        )
    }

    pub(super) fn object_type(&mut self) -> PResult<Condition> {
        self.label("type")?;
        self.value_ref::<UniverseObjectType>().map(Condition::Type)
    }

    pub(super) fn star(&mut self) -> PResult<Condition> {
        self.label("type")?;
        self.list(Self::value_ref::<StarType>).map(Condition::StarType)
    }

    pub(super) fn design_has_hull(&mut self) -> PResult<Condition> {
        self.label("name")?;
        let name = self.value_ref::<String>()?;
        Ok(Condition::DesignHasHull { name })
    }

    pub(super) fn chance(&mut self) -> PResult<Condition> {
        self.label("probability")?;
        let probability = self.value_ref::<f64>()?;
        Ok(Condition::Chance { probability })
    }

    pub(super) fn owner_has_tech(&mut self) -> PResult<Condition> {
        self.label("name")?;
        let name = self.value_ref::<String>()?;
        Ok(Condition::OwnerHasTech { name })
    }

    pub(super) fn visible_to_empire(&mut self) -> PResult<Condition> {
        self.label("empire")?;
        let empires = self.list(Self::value_ref::<i32>)?;
        Ok(Condition::VisibleToEmpire { empires })
    }

    pub(super) fn explored_by_empire(&mut self) -> PResult<Condition> {
        self.label("empire")?;
        let empires = self.list(Self::value_ref::<i32>)?;
        Ok(Condition::ExploredByEmpire { empires })
    }

    pub(super) fn produced_by_empire(&mut self) -> PResult<Condition> {
        self.label("empire")?;
        let empire = self.value_ref::<i32>()?;
        Ok(Condition::ProducedByEmpire { empire })
    }

    pub(super) fn object(&mut self) -> PResult<Condition> {
        self.label("id")?;
        let id = self.value_ref::<i32>()?;
        Ok(Condition::Object { id })
    }
}
