//! Effects and effects groups.

use std::sync::OnceLock;

use astra_ir::{
    Effect, EffectsGroup, MeterType, PlanetSize, PlanetType, ResourceType, StarType,
};
use astra_lexer::{strip_affixes, SymbolTable, Vocabulary};
use tracing::trace;

use crate::error::{ErrorContext, Expected};
use crate::parser::{PResult, Parser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EffectForm {
    SetOwner,
    SetPlanetType,
    SetPlanetSize,
    SetStarType,
    SetSpecies,
    AddSpecial,
    RemoveSpecial,
    MoveTo,
    Destroy,
}

fn effect_forms() -> &'static SymbolTable<(&'static str, EffectForm)> {
    static TABLE: OnceLock<SymbolTable<(&'static str, EffectForm)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        SymbolTable::new(
            [
                ("setowner", EffectForm::SetOwner),
                ("setplanettype", EffectForm::SetPlanetType),
                ("setplanetsize", EffectForm::SetPlanetSize),
                ("setstartype", EffectForm::SetStarType),
                ("setspecies", EffectForm::SetSpecies),
                ("addspecial", EffectForm::AddSpecial),
                ("removespecial", EffectForm::RemoveSpecial),
                ("moveto", EffectForm::MoveTo),
                ("destroy", EffectForm::Destroy),
            ]
            .map(|(keyword, form)| (keyword, (keyword, form))),
        )
    })
}

const EFFECT: Expected = Expected::Item("effect");

impl Parser<'_> {
    /// A single effect.
    ///
    /// Fixed keywords are checked first, then `setempire<resource>stockpile`,
    /// then `set<meter>`.
    pub(crate) fn effect(&mut self) -> PResult<Effect> {
        self.attempt(Self::effect_inner)
    }

    fn effect_inner(&mut self) -> PResult<Effect> {
        let Some(word) = self.peek_word() else {
            return self.fail(EFFECT);
        };
        let case = self.case();

        if let Some((keyword, form)) = effect_forms().lookup(word, case) {
            self.word(EFFECT)?;
            return self.in_context(ErrorContext::Effect(keyword), |p| p.effect_form(form));
        }

        let stockpile = strip_affixes(word, "setempire", "stockpile", case)
            .and_then(|resource| ResourceType::table().lookup(resource, case));
        if let Some(stockpile) = stockpile {
            self.word(EFFECT)?;
            let keyword = stockpile.set_stockpile_keyword();
            return self.in_context(ErrorContext::Effect(keyword), |p| {
                p.label("value")?;
                let value = p.value_ref::<f64>()?;
                Ok(Effect::SetEmpireStockpile { stockpile, value })
            });
        }

        let meter = strip_affixes(word, "set", "", case)
            .and_then(|meter| MeterType::table().lookup(meter, case));
        if let Some(meter) = meter {
            self.word(EFFECT)?;
            return self.in_context(ErrorContext::SetMeter(meter), |p| {
                p.label("value")?;
                let value = p.value_ref::<f64>()?;
                Ok(Effect::SetMeter { meter, value })
            });
        }

        self.fail(EFFECT)
    }

    fn effect_form(&mut self, form: EffectForm) -> PResult<Effect> {
        match form {
            EffectForm::SetOwner => {
                self.label("empire")?;
                let empire = self.value_ref::<i32>()?;
                Ok(Effect::SetOwner { empire })
            }
            EffectForm::SetPlanetType => {
                self.label("type")?;
                let planet_type = self.value_ref::<PlanetType>()?;
                Ok(Effect::SetPlanetType { planet_type })
            }
            EffectForm::SetPlanetSize => {
                self.label("planetsize")?;
                let planet_size = self.value_ref::<PlanetSize>()?;
                Ok(Effect::SetPlanetSize { planet_size })
            }
            EffectForm::SetStarType => {
                self.label("type")?;
                let star_type = self.value_ref::<StarType>()?;
                Ok(Effect::SetStarType { star_type })
            }
            EffectForm::SetSpecies => {
                self.label("name")?;
                let species = self.value_ref::<String>()?;
                Ok(Effect::SetSpecies { species })
            }
            EffectForm::AddSpecial => {
                self.label("name")?;
                let name = self.value_ref::<String>()?;
                Ok(Effect::AddSpecial { name })
            }
            EffectForm::RemoveSpecial => {
                self.label("name")?;
                let name = self.value_ref::<String>()?;
                Ok(Effect::RemoveSpecial { name })
            }
            EffectForm::MoveTo => {
                self.label("destination")?;
                let destination = Box::new(self.condition()?);
                Ok(Effect::MoveTo { destination })
            }
            EffectForm::Destroy => Ok(Effect::Destroy),
        }
    }

    /// `effectsgroup scope = C [activation = C] [stackinggroup = "NAME"] effects = LIST<effect>`
    pub(crate) fn effects_group(&mut self) -> PResult<EffectsGroup> {
        self.attempt(|p| {
            p.keyword("effectsgroup")?;
            trace!(pos = p.position(), "effects group");
            p.in_context(ErrorContext::EffectsGroup, |p| {
                p.label("scope")?;
                let scope = p.condition()?;
                let activation = p.optional(|p| {
                    p.label("activation")?;
                    p.condition()
                });
                let stacking_group = p
                    .optional(|p| {
                        p.label("stackinggroup")?;
                        p.quoted_name()
                    })
                    .map(str::to_owned);
                p.label("effects")?;
                let effects = p.list(Self::effect)?;
                Ok(EffectsGroup {
                    scope,
                    activation,
                    stacking_group,
                    effects,
                })
            })
        })
    }

    /// `[effectsgroups = LIST<effectsgroup>]`; empty when absent.
    pub(crate) fn optional_effects_groups(&mut self) -> Vec<EffectsGroup> {
        self.optional(|p| {
            p.label("effectsgroups")?;
            p.list(Self::effects_group)
        })
        .unwrap_or_default()
    }
}
