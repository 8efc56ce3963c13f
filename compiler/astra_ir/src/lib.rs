//! Astra IR - content AST types
//!
//! This crate holds the data structures produced by the content parser:
//! - [`Span`] for source locations
//! - [`ValueRef<T>`] typed value expressions
//! - [`Condition`] predicates over universe objects
//! - [`Effect`] and [`EffectsGroup`]
//! - content records ([`Tech`], [`BuildingType`], [`Special`], ...)
//! - the keyword vocabularies those trees are built from
//!
//! Every tree implements `Display`, printing canonical content text that
//! parses back to an equal tree. Operations are fully parenthesised, omitted
//! range bounds stay omitted, and casts are invisible.

#[macro_use]
mod keyword;
mod condition;
mod content;
mod effect;
mod enums;
mod span;
mod value_ref;

pub use condition::Condition;
pub use content::{BuildingType, Colour, Special, Tech, TechCategory, TechManifest, UnlockableItem};
pub use effect::{Effect, EffectsGroup};
pub use enums::{
    ContainerType, EmpireAffiliationType, MeterType, OpType, PlanetEnvironment, PlanetSize,
    PlanetType, ReferenceType, ResourceType, SortingMethod, StarType, StatisticType,
    UniverseObjectType, UnlockableItemType,
};
pub use keyword::Keyword;
pub use span::Span;
pub use value_ref::{Bounded, CastSource, PropertyPath, Statistic, ValueKind, ValueRef, Variable};
