//! Top-level content records and the files that hold them.
//!
//! Parameter order within a record is fixed. Optional parameters fall back to
//! the defaults declared on the record types.

use astra_ir::{
    BuildingType, Special, Tech, TechCategory, TechManifest, UnlockableItem, UnlockableItemType,
};
use tracing::trace;

use crate::error::ErrorContext;
use crate::parser::{PResult, Parser};

/// One top-level entry of a tech file.
enum TechFileEntry {
    Category(TechCategory),
    Tech(Tech),
}

impl Parser<'_> {
    /// `label = "NAME"`, owned.
    fn quoted_parameter(&mut self, label: &'static str) -> PResult<String> {
        self.label(label)?;
        self.quoted_name().map(str::to_owned)
    }

    /// `graphic = "PATH"`
    fn graphic(&mut self) -> PResult<String> {
        self.label("graphic")?;
        self.file_path().map(str::to_owned)
    }

    /// `item type = KIND name = "NAME"`
    pub(crate) fn unlockable_item(&mut self) -> PResult<UnlockableItem> {
        self.attempt(|p| {
            p.keyword("item")?;
            p.in_context(ErrorContext::UnlockableItem, |p| {
                p.label("type")?;
                let kind = p.symbol::<UnlockableItemType>()?;
                let name = p.quoted_parameter("name")?;
                Ok(UnlockableItem { kind, name })
            })
        })
    }

    /// `category name = "NAME" graphic = "PATH" colour = (r, g, b[, a])`
    pub(crate) fn tech_category(&mut self) -> PResult<TechCategory> {
        self.attempt(|p| {
            p.keyword("category")?;
            trace!(pos = p.position(), "tech category");
            p.in_context(ErrorContext::TechCategory, |p| {
                let name = p.quoted_parameter("name")?;
                let graphic = p.graphic()?;
                p.label("colour")?;
                let colour = p.colour()?;
                Ok(TechCategory {
                    name,
                    graphic,
                    colour,
                })
            })
        })
    }

    pub(crate) fn tech(&mut self) -> PResult<Tech> {
        self.attempt(|p| {
            p.keyword("tech")?;
            trace!(pos = p.position(), "tech");
            p.in_context(ErrorContext::Tech, |p| {
                let name = p.quoted_parameter("name")?;
                let description = p.quoted_parameter("description")?;
                let short_description = p.quoted_parameter("shortdescription")?;
                let category = p.quoted_parameter("category")?;
                let researchable = p
                    .optional(|p| {
                        p.label("researchable")?;
                        p.boolean()
                    })
                    .unwrap_or(Tech::DEFAULT_RESEARCHABLE);
                p.label("researchcost")?;
                let research_cost = p.real()?;
                p.label("researchturns")?;
                let research_turns = p.integer()?;
                let prerequisites = p
                    .optional(|p| {
                        p.label("prerequisites")?;
                        p.list(|p| p.quoted_name().map(str::to_owned))
                    })
                    .unwrap_or_default();
                let unlocked_items = p
                    .optional(|p| {
                        p.label("unlock")?;
                        p.list(Self::unlockable_item)
                    })
                    .unwrap_or_default();
                let effects_groups = p.optional_effects_groups();
                let graphic = p.graphic()?;
                Ok(Tech {
                    name,
                    description,
                    short_description,
                    category,
                    researchable,
                    research_cost,
                    research_turns,
                    prerequisites,
                    unlocked_items,
                    effects_groups,
                    graphic,
                })
            })
        })
    }

    pub(crate) fn building_type(&mut self) -> PResult<BuildingType> {
        self.attempt(|p| {
            p.keyword("buildingtype")?;
            trace!(pos = p.position(), "building type");
            p.in_context(ErrorContext::BuildingType, |p| {
                let name = p.quoted_parameter("name")?;
                let description = p.quoted_parameter("description")?;
                p.label("buildcost")?;
                let build_cost = p.real()?;
                p.label("buildtime")?;
                let build_time = p.integer()?;
                let maintenance_cost = p
                    .optional(|p| {
                        p.label("maintenancecost")?;
                        p.real()
                    })
                    .unwrap_or(BuildingType::DEFAULT_MAINTENANCE_COST);
                p.label("location")?;
                let location = p.condition()?;
                let effects_groups = p.optional_effects_groups();
                let graphic = p.graphic()?;
                Ok(BuildingType {
                    name,
                    description,
                    build_cost,
                    build_time,
                    maintenance_cost,
                    location,
                    effects_groups,
                    graphic,
                })
            })
        })
    }

    pub(crate) fn special(&mut self) -> PResult<Special> {
        self.attempt(|p| {
            p.keyword("special")?;
            trace!(pos = p.position(), "special");
            p.in_context(ErrorContext::Special, |p| {
                let name = p.quoted_parameter("name")?;
                let description = p.quoted_parameter("description")?;
                let spawn_rate = p
                    .optional(|p| {
                        p.label("spawnrate")?;
                        p.real()
                    })
                    .unwrap_or(Special::DEFAULT_SPAWN_RATE);
                let spawn_limit = p
                    .optional(|p| {
                        p.label("spawnlimit")?;
                        p.integer()
                    })
                    .unwrap_or(Special::DEFAULT_SPAWN_LIMIT);
                let location = p.optional(|p| {
                    p.label("location")?;
                    p.condition()
                });
                let effects_groups = p.optional_effects_groups();
                let graphic = p.graphic()?;
                Ok(Special {
                    name,
                    description,
                    spawn_rate,
                    spawn_limit,
                    location,
                    effects_groups,
                    graphic,
                })
            })
        })
    }

    // === Files ===

    /// `(category | tech)*`
    pub(crate) fn tech_file(&mut self) -> PResult<TechManifest> {
        let entries = self.many(|p| {
            one_of!(p,
                |p: &mut Self| p.tech_category().map(TechFileEntry::Category),
                |p: &mut Self| p.tech().map(TechFileEntry::Tech),
            )
        });
        let mut manifest = TechManifest::default();
        for entry in entries {
            match entry {
                TechFileEntry::Category(category) => manifest.categories.push(category),
                TechFileEntry::Tech(tech) => manifest.techs.push(tech),
            }
        }
        Ok(manifest)
    }

    /// `buildingtype*`
    pub(crate) fn building_file(&mut self) -> PResult<Vec<BuildingType>> {
        Ok(self.many(Self::building_type))
    }

    /// `special*`
    pub(crate) fn special_file(&mut self) -> PResult<Vec<Special>> {
        Ok(self.many(Self::special))
    }
}
