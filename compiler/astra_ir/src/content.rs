//! Top-level content records: techs, tech categories, buildings, specials.

use std::fmt;

use crate::condition::write_list;
use crate::enums::UnlockableItemType;
use crate::{Condition, EffectsGroup};

/// An RGBA colour.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Colour { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b, a: 255 }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Something researching a tech makes available.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnlockableItem {
    pub kind: UnlockableItemType,
    pub name: String,
}

impl fmt::Display for UnlockableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item type = {} name = \"{}\"", self.kind, self.name)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TechCategory {
    pub name: String,
    pub graphic: String,
    pub colour: Colour,
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "category name = \"{}\" graphic = \"{}\" colour = {}",
            self.name, self.graphic, self.colour
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Tech {
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub category: String,
    pub researchable: bool,
    pub research_cost: f64,
    pub research_turns: i32,
    pub prerequisites: Vec<String>,
    pub unlocked_items: Vec<UnlockableItem>,
    pub effects_groups: Vec<EffectsGroup>,
    pub graphic: String,
}

impl Tech {
    pub const DEFAULT_RESEARCHABLE: bool = true;
}

fn write_quoted_list(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    let quoted: Vec<Quoted<'_>> = items.iter().map(|item| Quoted(item)).collect();
    write_list(f, &quoted)
}

struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

fn write_effects_groups(f: &mut fmt::Formatter<'_>, groups: &[EffectsGroup]) -> fmt::Result {
    if groups.is_empty() {
        return Ok(());
    }
    f.write_str(" effectsgroups = ")?;
    write_list(f, groups)
}

impl fmt::Display for Tech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tech name = \"{}\" description = \"{}\" shortdescription = \"{}\" category = \"{}\"",
            self.name, self.description, self.short_description, self.category
        )?;
        if self.researchable != Tech::DEFAULT_RESEARCHABLE {
            write!(f, " researchable = {}", self.researchable)?;
        }
        write!(
            f,
            " researchcost = {} researchturns = {}",
            self.research_cost, self.research_turns
        )?;
        if !self.prerequisites.is_empty() {
            f.write_str(" prerequisites = ")?;
            write_quoted_list(f, &self.prerequisites)?;
        }
        if !self.unlocked_items.is_empty() {
            f.write_str(" unlock = ")?;
            write_list(f, &self.unlocked_items)?;
        }
        write_effects_groups(f, &self.effects_groups)?;
        write!(f, " graphic = \"{}\"", self.graphic)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct BuildingType {
    pub name: String,
    pub description: String,
    pub build_cost: f64,
    pub build_time: i32,
    pub maintenance_cost: f64,
    pub location: Condition,
    pub effects_groups: Vec<EffectsGroup>,
    pub graphic: String,
}

impl BuildingType {
    pub const DEFAULT_MAINTENANCE_COST: f64 = 0.0;
}

impl fmt::Display for BuildingType {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buildingtype name = \"{}\" description = \"{}\" buildcost = {} buildtime = {}",
            self.name, self.description, self.build_cost, self.build_time
        )?;
        if self.maintenance_cost != BuildingType::DEFAULT_MAINTENANCE_COST {
            write!(f, " maintenancecost = {}", self.maintenance_cost)?;
        }
        write!(f, " location = {}", self.location)?;
        write_effects_groups(f, &self.effects_groups)?;
        write!(f, " graphic = \"{}\"", self.graphic)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Special {
    pub name: String,
    pub description: String,
    pub spawn_rate: f64,
    pub spawn_limit: i32,
    pub location: Option<Condition>,
    pub effects_groups: Vec<EffectsGroup>,
    pub graphic: String,
}

impl Special {
    pub const DEFAULT_SPAWN_RATE: f64 = 1.0;
    pub const DEFAULT_SPAWN_LIMIT: i32 = 9999;
}

impl fmt::Display for Special {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "special name = \"{}\" description = \"{}\"",
            self.name, self.description
        )?;
        if self.spawn_rate != Special::DEFAULT_SPAWN_RATE {
            write!(f, " spawnrate = {}", self.spawn_rate)?;
        }
        if self.spawn_limit != Special::DEFAULT_SPAWN_LIMIT {
            write!(f, " spawnlimit = {}", self.spawn_limit)?;
        }
        if let Some(location) = &self.location {
            write!(f, " location = {location}")?;
        }
        write_effects_groups(f, &self.effects_groups)?;
        write!(f, " graphic = \"{}\"", self.graphic)
    }
}

/// Everything a tech file declares.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TechManifest {
    pub categories: Vec<TechCategory>,
    pub techs: Vec<Tech>,
}

impl TechManifest {
    pub fn category(&self, name: &str) -> Option<&TechCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn tech(&self, name: &str) -> Option<&Tech> {
        self.techs.iter().find(|tech| tech.name == name)
    }
}

impl fmt::Display for TechManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in &self.categories {
            writeln!(f, "{category}")?;
        }
        for tech in &self.techs {
            writeln!(f, "{tech}")?;
        }
        Ok(())
    }
}
