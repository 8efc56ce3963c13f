//! Effects and effects groups.

use std::fmt;

use crate::condition::write_list;
use crate::enums::{MeterType, PlanetSize, PlanetType, ResourceType, StarType};
use crate::{Condition, ValueRef};

/// A change applied to each object selected by an effects group's scope.
#[derive(Clone, PartialEq, Debug)]
pub enum Effect {
    SetMeter {
        meter: MeterType,
        value: ValueRef<f64>,
    },
    SetEmpireStockpile {
        stockpile: ResourceType,
        value: ValueRef<f64>,
    },
    SetOwner {
        empire: ValueRef<i32>,
    },
    SetPlanetType {
        planet_type: ValueRef<PlanetType>,
    },
    SetPlanetSize {
        planet_size: ValueRef<PlanetSize>,
    },
    SetStarType {
        star_type: ValueRef<StarType>,
    },
    SetSpecies {
        species: ValueRef<String>,
    },
    AddSpecial {
        name: ValueRef<String>,
    },
    RemoveSpecial {
        name: ValueRef<String>,
    },
    MoveTo {
        destination: Box<Condition>,
    },
    Destroy,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::SetMeter { meter, value } => write!(f, "set{meter} value = {value}"),
            Effect::SetEmpireStockpile { stockpile, value } => {
                write!(f, "{} value = {value}", stockpile.set_stockpile_keyword())
            }
            Effect::SetOwner { empire } => write!(f, "setowner empire = {empire}"),
            Effect::SetPlanetType { planet_type } => {
                write!(f, "setplanettype type = {planet_type}")
            }
            Effect::SetPlanetSize { planet_size } => {
                write!(f, "setplanetsize planetsize = {planet_size}")
            }
            Effect::SetStarType { star_type } => write!(f, "setstartype type = {star_type}"),
            Effect::SetSpecies { species } => write!(f, "setspecies name = {species}"),
            Effect::AddSpecial { name } => write!(f, "addspecial name = {name}"),
            Effect::RemoveSpecial { name } => write!(f, "removespecial name = {name}"),
            Effect::MoveTo { destination } => write!(f, "moveto destination = {destination}"),
            Effect::Destroy => f.write_str("destroy"),
        }
    }
}

/// Effects applied to the objects matching `scope`, while `activation`
/// holds for the source object.
///
/// Groups sharing a `stacking_group` name apply at most once per target.
#[derive(Clone, PartialEq, Debug)]
pub struct EffectsGroup {
    pub scope: Condition,
    pub activation: Option<Condition>,
    pub stacking_group: Option<String>,
    pub effects: Vec<Effect>,
}

impl fmt::Display for EffectsGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "effectsgroup scope = {}", self.scope)?;
        if let Some(activation) = &self.activation {
            write!(f, " activation = {activation}")?;
        }
        if let Some(group) = &self.stacking_group {
            write!(f, " stackinggroup = \"{group}\"")?;
        }
        f.write_str(" effects = ")?;
        write_list(f, &self.effects)
    }
}
