//! Conditions.
//!
//! Every condition starts with a distinct leading keyword, so the grammar
//! dispatches on that word instead of trying forty alternatives in turn. Two
//! keyword families are open-ended and checked after the fixed table: meter
//! names (`population low = 3`) and `owner<resource>stockpile`.

mod composite;
mod numeric;
mod simple;
mod spatial;

use std::sync::OnceLock;

use astra_ir::{Condition, Keyword, MeterType, ResourceType, SortingMethod};
use astra_lexer::{strip_affixes, SymbolTable, Vocabulary};
use astra_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::error::{ErrorContext, Expected};
use crate::parser::{PResult, Parser};

/// Condition forms with a fixed leading keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    All,
    Source,
    Target,
    Capital,
    Monster,
    Armed,
    Stationary,
    OwnedBy,
    Homeworld,
    Building,
    Species,
    Focus,
    Planet,
    ObjectType,
    Star,
    DesignHasHull,
    DesignHasPart,
    Random,
    OwnerHasTech,
    VisibleToEmpire,
    ExploredByEmpire,
    ProducedByEmpire,
    ResourceSupplyConnected,
    WithinDistance,
    WithinStarlaneJumps,
    Number,
    Turn,
    CreatedOnTurn,
    NumberOf(SortingMethod),
    Contains,
    ContainedBy,
    Object,
    Described,
    And,
    Or,
    Not,
}

const FORMS: &[(&str, Form)] = &[
    ("all", Form::All),
    ("source", Form::Source),
    ("target", Form::Target),
    ("capital", Form::Capital),
    ("monster", Form::Monster),
    ("armed", Form::Armed),
    ("stationary", Form::Stationary),
    ("ownedby", Form::OwnedBy),
    ("homeworld", Form::Homeworld),
    ("building", Form::Building),
    ("species", Form::Species),
    ("focus", Form::Focus),
    ("planet", Form::Planet),
    ("objecttype", Form::ObjectType),
    ("star", Form::Star),
    ("designhashull", Form::DesignHasHull),
    ("designhaspart", Form::DesignHasPart),
    ("random", Form::Random),
    ("ownerhastech", Form::OwnerHasTech),
    ("visibletoempire", Form::VisibleToEmpire),
    ("exploredbyempire", Form::ExploredByEmpire),
    ("producedbyempire", Form::ProducedByEmpire),
    ("resourcesupplyconnectedbyempire", Form::ResourceSupplyConnected),
    ("withindistance", Form::WithinDistance),
    ("withinstarlanejumps", Form::WithinStarlaneJumps),
    ("number", Form::Number),
    ("turn", Form::Turn),
    ("createdonturn", Form::CreatedOnTurn),
    ("numberof", Form::NumberOf(SortingMethod::Random)),
    ("maximumnumberof", Form::NumberOf(SortingMethod::Maximum)),
    ("minimumnumberof", Form::NumberOf(SortingMethod::Minimum)),
    ("modenumberof", Form::NumberOf(SortingMethod::Mode)),
    ("contains", Form::Contains),
    ("containedby", Form::ContainedBy),
    ("object", Form::Object),
    ("described", Form::Described),
    ("and", Form::And),
    ("or", Form::Or),
    ("not", Form::Not),
];

/// Leading keyword to form, with the keyword's own spelling for error context.
fn forms() -> &'static SymbolTable<(&'static str, Form)> {
    static TABLE: OnceLock<SymbolTable<(&'static str, Form)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        SymbolTable::new(FORMS.iter().map(|&(keyword, form)| (keyword, (keyword, form))))
    })
}

const CONDITION: Expected = Expected::Item("condition");

impl Parser<'_> {
    /// A complete condition.
    pub(crate) fn condition(&mut self) -> PResult<Condition> {
        ensure_sufficient_stack(|| self.attempt(Self::condition_inner))
    }

    fn condition_inner(&mut self) -> PResult<Condition> {
        let Some(word) = self.peek_word() else {
            return self.fail(CONDITION);
        };
        trace!(pos = self.position(), word, "condition");
        let case = self.case();

        if let Some((keyword, form)) = forms().lookup(word, case) {
            self.word(CONDITION)?;
            return self.in_context(ErrorContext::Condition(keyword), |p| p.condition_form(form));
        }

        if let Some(meter) = MeterType::table().lookup(word, case) {
            self.word(CONDITION)?;
            return self.in_context(ErrorContext::Condition(meter.keyword()), |p| {
                p.meter_value(meter)
            });
        }

        let stockpile = strip_affixes(word, "owner", "stockpile", case)
            .and_then(|resource| ResourceType::table().lookup(resource, case));
        if let Some(stockpile) = stockpile {
            self.word(CONDITION)?;
            let keyword = stockpile.owner_stockpile_keyword();
            return self.in_context(ErrorContext::Condition(keyword), |p| {
                p.stockpile_value(stockpile)
            });
        }

        self.fail(CONDITION)
    }

    /// Parameters of a fixed-keyword form; the keyword is already consumed.
    fn condition_form(&mut self, form: Form) -> PResult<Condition> {
        match form {
            Form::All => Ok(Condition::All),
            Form::Source => Ok(Condition::Source),
            Form::Target => Ok(Condition::Target),
            Form::Capital => Ok(Condition::Capital),
            Form::Monster => Ok(Condition::Monster),
            Form::Armed => Ok(Condition::Armed),
            Form::Stationary => Ok(Condition::Stationary),
            Form::OwnedBy => self.owned_by(),
            Form::Homeworld => Ok(Condition::Homeworld {
                names: self.optional_names("name"),
            }),
            Form::Building => Ok(Condition::Building {
                names: self.optional_names("name"),
            }),
            Form::Species => Ok(Condition::Species {
                names: self.optional_names("name"),
            }),
            Form::Focus => Ok(Condition::Focus {
                names: self.optional_names("type"),
            }),
            Form::Planet => self.planet(),
            Form::ObjectType => self.object_type(),
            Form::Star => self.star(),
            Form::DesignHasHull => self.design_has_hull(),
            Form::DesignHasPart => self.design_has_part(),
            Form::Random => self.chance(),
            Form::OwnerHasTech => self.owner_has_tech(),
            Form::VisibleToEmpire => self.visible_to_empire(),
            Form::ExploredByEmpire => self.explored_by_empire(),
            Form::ProducedByEmpire => self.produced_by_empire(),
            Form::ResourceSupplyConnected => self.resource_supply_connected(),
            Form::WithinDistance => self.within_distance(),
            Form::WithinStarlaneJumps => self.within_starlane_jumps(),
            Form::Number => self.number(),
            Form::Turn => self.turn(),
            Form::CreatedOnTurn => self.created_on_turn(),
            Form::NumberOf(method) => self.sorted_number_of(method),
            Form::Contains => self.contains(),
            Form::ContainedBy => self.contained_by(),
            Form::Object => self.object(),
            Form::Described => self.described(),
            Form::And => self.and(),
            Form::Or => self.or(),
            Form::Not => self.not(),
        }
    }
}
