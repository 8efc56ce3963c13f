//! Error context for "while parsing X" notes.

use astra_ir::MeterType;

/// What the parser was working on when it failed.
///
/// The innermost context active at the furthest failure is reported with the
/// error, so `ownedby affiliation = bogus` says it went wrong inside an
/// `ownedby` condition rather than just "in a condition".
///
/// ```ignore
/// self.in_context(ErrorContext::EffectsGroup, |p| p.effects_group_body())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    // === Values ===
    /// A value expression of the named type (`int`, `double`, ...).
    Value(&'static str),
    /// A statistic over a sampled set of objects.
    Statistic,

    // === Conditions ===
    /// A condition introduced by the given keyword.
    Condition(&'static str),

    // === Effects ===
    /// An effect introduced by the given keyword.
    Effect(&'static str),
    /// A `set<meter>` effect.
    SetMeter(MeterType),
    EffectsGroup,

    // === Records ===
    Tech,
    TechCategory,
    UnlockableItem,
    BuildingType,
    Special,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> String {
        match self {
            Self::Value(type_name) => format!("{} {type_name} value", article(type_name)),
            Self::Statistic => "a statistic".to_owned(),
            Self::Condition(keyword) => format!("{} `{keyword}` condition", article(keyword)),
            Self::Effect(keyword) => format!("{} `{keyword}` effect", article(keyword)),
            Self::SetMeter(meter) => format!("a `set{meter}` effect"),
            Self::EffectsGroup => "an effects group".to_owned(),
            Self::Tech => "a tech".to_owned(),
            Self::TechCategory => "a tech category".to_owned(),
            Self::UnlockableItem => "an unlockable item".to_owned(),
            Self::BuildingType => "a building type".to_owned(),
            Self::Special => "a special".to_owned(),
        }
    }

    /// Short noun naming the construct, for logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Value(_) => "value",
            Self::Statistic => "statistic",
            Self::Condition(_) => "condition",
            Self::Effect(_) | Self::SetMeter(_) => "effect",
            Self::EffectsGroup => "effects group",
            Self::Tech => "tech",
            Self::TechCategory => "tech category",
            Self::UnlockableItem => "unlockable item",
            Self::BuildingType => "building type",
            Self::Special => "special",
        }
    }
}

fn article(word: &str) -> &'static str {
    match word.as_bytes().first() {
        Some(b'a' | b'e' | b'i' | b'o' | b'u') => "an",
        _ => "a",
    }
}
