//! Condition trees: predicates over a candidate universe object.
//!
//! Absent range bounds hold the unbounded sentinels of [`Bounded`](crate::Bounded)
//! rather than `None`, so evaluators can compare without special cases.

use std::fmt;

use crate::enums::{
    EmpireAffiliationType, MeterType, PlanetEnvironment, PlanetSize, PlanetType, ResourceType,
    SortingMethod, StarType, UniverseObjectType,
};
use crate::ValueRef;

/// Boolean predicate over a candidate object.
///
/// Every child is exclusively owned; trees are acyclic.
#[derive(Clone, PartialEq, Debug)]
pub enum Condition {
    All,
    Source,
    Target,
    EmpireAffiliation {
        empire: Option<ValueRef<i32>>,
        affiliation: EmpireAffiliationType,
    },
    /// Homeworld of any of `names`; any species when empty.
    Homeworld {
        names: Vec<ValueRef<String>>,
    },
    Capital,
    Building {
        names: Vec<ValueRef<String>>,
    },
    Species {
        names: Vec<ValueRef<String>>,
    },
    Focus {
        names: Vec<ValueRef<String>>,
    },
    PlanetType(Vec<ValueRef<PlanetType>>),
    PlanetSize(Vec<ValueRef<PlanetSize>>),
    PlanetEnvironment(Vec<ValueRef<PlanetEnvironment>>),
    StarType(Vec<ValueRef<StarType>>),
    Type(ValueRef<UniverseObjectType>),
    Monster,
    Armed,
    Stationary,
    MeterValue {
        meter: MeterType,
        low: ValueRef<f64>,
        high: ValueRef<f64>,
    },
    EmpireStockpileValue {
        stockpile: ResourceType,
        low: ValueRef<f64>,
        high: ValueRef<f64>,
    },
    DesignHasHull {
        name: ValueRef<String>,
    },
    DesignHasPart {
        low: ValueRef<i32>,
        high: ValueRef<i32>,
        name: ValueRef<String>,
    },
    Chance {
        probability: ValueRef<f64>,
    },
    OwnerHasTech {
        name: ValueRef<String>,
    },
    VisibleToEmpire {
        empires: Vec<ValueRef<i32>>,
    },
    ExploredByEmpire {
        empires: Vec<ValueRef<i32>>,
    },
    ProducedByEmpire {
        empire: ValueRef<i32>,
    },
    ResourceSupplyConnectedByEmpire {
        empire: ValueRef<i32>,
        condition: Box<Condition>,
    },
    WithinDistance {
        distance: ValueRef<f64>,
        condition: Box<Condition>,
    },
    WithinStarlaneJumps {
        jumps: ValueRef<i32>,
        condition: Box<Condition>,
    },
    Number {
        low: ValueRef<i32>,
        high: ValueRef<i32>,
        condition: Box<Condition>,
    },
    Turn {
        low: ValueRef<i32>,
        high: ValueRef<i32>,
    },
    CreatedOnTurn {
        low: ValueRef<i32>,
        high: ValueRef<i32>,
    },
    /// `sort_key` is `None` exactly for [`SortingMethod::Random`].
    SortedNumberOf {
        number: ValueRef<i32>,
        sort_key: Option<ValueRef<f64>>,
        sorting_method: SortingMethod,
        condition: Box<Condition>,
    },
    Contains(Box<Condition>),
    ContainedBy(Box<Condition>),
    Object {
        id: ValueRef<i32>,
    },
    Described {
        description: String,
        condition: Box<Condition>,
    },
    And(Vec<Condition>),
    Or(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    /// The leading keyword this condition is written with.
    pub fn keyword(&self) -> &'static str {
        match self {
            Condition::All => "all",
            Condition::Source => "source",
            Condition::Target => "target",
            Condition::EmpireAffiliation { .. } => "ownedby",
            Condition::Homeworld { .. } => "homeworld",
            Condition::Capital => "capital",
            Condition::Building { .. } => "building",
            Condition::Species { .. } => "species",
            Condition::Focus { .. } => "focus",
            Condition::PlanetType(_)
            | Condition::PlanetSize(_)
            | Condition::PlanetEnvironment(_) => "planet",
            Condition::StarType(_) => "star",
            Condition::Type(_) => "objecttype",
            Condition::Monster => "monster",
            Condition::Armed => "armed",
            Condition::Stationary => "stationary",
            Condition::MeterValue { meter, .. } => crate::Keyword::keyword(*meter),
            Condition::EmpireStockpileValue { stockpile, .. } => stockpile.owner_stockpile_keyword(),
            Condition::DesignHasHull { .. } => "designhashull",
            Condition::DesignHasPart { .. } => "designhaspart",
            Condition::Chance { .. } => "random",
            Condition::OwnerHasTech { .. } => "ownerhastech",
            Condition::VisibleToEmpire { .. } => "visibletoempire",
            Condition::ExploredByEmpire { .. } => "exploredbyempire",
            Condition::ProducedByEmpire { .. } => "producedbyempire",
            Condition::ResourceSupplyConnectedByEmpire { .. } => {
                "resourcesupplyconnectedbyempire"
            }
            Condition::WithinDistance { .. } => "withindistance",
            Condition::WithinStarlaneJumps { .. } => "withinstarlanejumps",
            Condition::Number { .. } => "number",
            Condition::Turn { .. } => "turn",
            Condition::CreatedOnTurn { .. } => "createdonturn",
            Condition::SortedNumberOf { sorting_method, .. } => {
                sorting_method.condition_keyword()
            }
            Condition::Contains(_) => "contains",
            Condition::ContainedBy(_) => "containedby",
            Condition::Object { .. } => "object",
            Condition::Described { .. } => "described",
            Condition::And(_) => "and",
            Condition::Or(_) => "or",
            Condition::Not(_) => "not",
        }
    }

    /// Number of condition nodes in this tree, including `self`.
    ///
    /// Conditions nested inside value expressions are not counted.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Condition::ResourceSupplyConnectedByEmpire { condition, .. }
            | Condition::WithinDistance { condition, .. }
            | Condition::WithinStarlaneJumps { condition, .. }
            | Condition::Number { condition, .. }
            | Condition::SortedNumberOf { condition, .. }
            | Condition::Described { condition, .. }
            | Condition::Contains(condition)
            | Condition::ContainedBy(condition)
            | Condition::Not(condition) => condition.node_count(),
            Condition::And(operands) | Condition::Or(operands) => {
                operands.iter().map(Condition::node_count).sum()
            }
            _ => 0,
        }
    }
}

/// Write a list parameter: a lone item bare, otherwise bracketed.
pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    if let [single] = items {
        return write!(f, "{single}");
    }
    f.write_str("[")?;
    for item in items {
        write!(f, " {item}")?;
    }
    f.write_str(" ]")
}

fn write_range<T: crate::Bounded>(
    f: &mut fmt::Formatter<'_>,
    low: &ValueRef<T>,
    high: &ValueRef<T>,
) -> fmt::Result {
    if !low.is_unbounded_low() {
        write!(f, " low = {low}")?;
    }
    if !high.is_unbounded_high() {
        write!(f, " high = {high}")?;
    }
    Ok(())
}

fn write_names(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    label: &str,
    names: &[ValueRef<String>],
) -> fmt::Result {
    f.write_str(keyword)?;
    if names.is_empty() {
        return Ok(());
    }
    write!(f, " {label} = ")?;
    write_list(f, names)
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::All
            | Condition::Source
            | Condition::Target
            | Condition::Capital
            | Condition::Monster
            | Condition::Armed
            | Condition::Stationary => f.write_str(self.keyword()),
            Condition::EmpireAffiliation {
                empire,
                affiliation,
            } => {
                f.write_str("ownedby")?;
                if *affiliation != EmpireAffiliationType::TheEmpire || empire.is_none() {
                    write!(f, " affiliation = {affiliation}")?;
                }
                if let Some(empire) = empire {
                    write!(f, " empire = {empire}")?;
                }
                Ok(())
            }
            Condition::Homeworld { names } => write_names(f, "homeworld", "name", names),
            Condition::Building { names } => write_names(f, "building", "name", names),
            Condition::Species { names } => write_names(f, "species", "name", names),
            Condition::Focus { names } => write_names(f, "focus", "type", names),
            Condition::PlanetType(types) => {
                f.write_str("planet type = ")?;
                write_list(f, types)
            }
            Condition::PlanetSize(sizes) => {
                f.write_str("planet size = ")?;
                write_list(f, sizes)
            }
            Condition::PlanetEnvironment(environments) => {
                f.write_str("planet environment = ")?;
                write_list(f, environments)
            }
            Condition::StarType(types) => {
                f.write_str("star type = ")?;
                write_list(f, types)
            }
            Condition::Type(object_type) => write!(f, "objecttype type = {object_type}"),
            Condition::MeterValue { meter, low, high } => {
                write!(f, "{meter}")?;
                write_range(f, low, high)
            }
            Condition::EmpireStockpileValue {
                stockpile,
                low,
                high,
            } => {
                f.write_str(stockpile.owner_stockpile_keyword())?;
                write_range(f, low, high)
            }
            Condition::DesignHasHull { name } => write!(f, "designhashull name = {name}"),
            Condition::DesignHasPart { low, high, name } => {
                f.write_str("designhaspart")?;
                write_range(f, low, high)?;
                write!(f, " name = {name}")
            }
            Condition::Chance { probability } => write!(f, "random probability = {probability}"),
            Condition::OwnerHasTech { name } => write!(f, "ownerhastech name = {name}"),
            Condition::VisibleToEmpire { empires } => {
                f.write_str("visibletoempire empire = ")?;
                write_list(f, empires)
            }
            Condition::ExploredByEmpire { empires } => {
                f.write_str("exploredbyempire empire = ")?;
                write_list(f, empires)
            }
            Condition::ProducedByEmpire { empire } => {
                write!(f, "producedbyempire empire = {empire}")
            }
            Condition::ResourceSupplyConnectedByEmpire { empire, condition } => write!(
                f,
                "resourcesupplyconnectedbyempire empire = {empire} condition = {condition}"
            ),
            Condition::WithinDistance {
                distance,
                condition,
            } => write!(
                f,
                "withindistance distance = {distance} condition = {condition}"
            ),
            Condition::WithinStarlaneJumps { jumps, condition } => write!(
                f,
                "withinstarlanejumps jumps = {jumps} condition = {condition}"
            ),
            Condition::Number {
                low,
                high,
                condition,
            } => {
                f.write_str("number")?;
                write_range(f, low, high)?;
                write!(f, " condition = {condition}")
            }
            Condition::Turn { low, high } => {
                f.write_str("turn")?;
                write_range(f, low, high)
            }
            Condition::CreatedOnTurn { low, high } => {
                f.write_str("createdonturn")?;
                write_range(f, low, high)
            }
            Condition::SortedNumberOf {
                number,
                sort_key,
                sorting_method,
                condition,
            } => {
                write!(f, "{} number = {number}", sorting_method.condition_keyword())?;
                if let Some(sort_key) = sort_key {
                    write!(f, " sortkey = {sort_key}")?;
                }
                write!(f, " condition = {condition}")
            }
            Condition::Contains(condition) => write!(f, "contains {condition}"),
            Condition::ContainedBy(condition) => write!(f, "containedby {condition}"),
            Condition::Object { id } => write!(f, "object id = {id}"),
            Condition::Described {
                description,
                condition,
            } => write!(
                f,
                "described description = \"{description}\" condition = {condition}"
            ),
            Condition::And(operands) => {
                f.write_str("and [")?;
                for operand in operands {
                    write!(f, " {operand}")?;
                }
                f.write_str(" ]")
            }
            Condition::Or(operands) => {
                f.write_str("or [")?;
                for operand in operands {
                    write!(f, " {operand}")?;
                }
                f.write_str(" ]")
            }
            Condition::Not(condition) => write!(f, "not {condition}"),
        }
    }
}
