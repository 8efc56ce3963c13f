//! Symbol tables: exact-match maps from keyword to enum constant.
//!
//! Tables are built once, on first use, and shared read-only afterwards, so
//! concurrent parses on different threads can look words up freely.

use std::sync::OnceLock;

use astra_ir::{
    ContainerType, EmpireAffiliationType, Keyword, MeterType, PlanetEnvironment, PlanetSize,
    PlanetType, ReferenceType, ResourceType, StarType, StatisticType, UniverseObjectType,
    UnlockableItemType,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// How keywords in content text are compared against table entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeywordCase {
    /// `OwnedBy` and `ownedby` are the same keyword.
    #[default]
    Insensitive,
    /// Only the lowercase spelling matches.
    Exact,
}

/// Longest word the case-insensitive lookup will lowercase.
const MAX_KEYWORD_LEN: usize = 64;

/// Run `f` on the lookup key for `word`, lowercased on the stack when
/// matching is case-insensitive.
///
/// Words longer than [`MAX_KEYWORD_LEN`] cannot be keywords and yield `None`.
pub(crate) fn with_key<R>(
    word: &str,
    case: KeywordCase,
    f: impl FnOnce(&str) -> Option<R>,
) -> Option<R> {
    match case {
        KeywordCase::Exact => f(word),
        KeywordCase::Insensitive => {
            let bytes = word.as_bytes();
            if bytes.len() > MAX_KEYWORD_LEN {
                return None;
            }
            let mut buf = [0u8; MAX_KEYWORD_LEN];
            let lowered = &mut buf[..bytes.len()];
            lowered.copy_from_slice(bytes);
            lowered.make_ascii_lowercase();
            f(std::str::from_utf8(lowered).ok()?)
        }
    }
}

/// Exact-match map from lowercase keyword to constant.
#[derive(Debug)]
pub struct SymbolTable<E: 'static> {
    map: FxHashMap<&'static str, E>,
}

impl<E: Copy + 'static> SymbolTable<E> {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, E)>) -> Self {
        let map: FxHashMap<_, _> = entries.into_iter().collect();
        debug_assert!(map.keys().all(|k| k.len() <= MAX_KEYWORD_LEN));
        debug_assert!(map.keys().all(|k| k.bytes().all(|b| !b.is_ascii_uppercase())));
        SymbolTable { map }
    }

    /// Look a whole word up. Misses return `None`.
    pub fn lookup(&self, word: &str, case: KeywordCase) -> Option<E> {
        with_key(word, case, |key| self.map.get(key).copied())
    }

    /// Every keyword in the table, in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.map.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<E: Keyword> SymbolTable<E> {
    /// Table of every constant of a keyword enum. Constants without a
    /// spelling are left out.
    pub fn from_keywords() -> Self {
        SymbolTable::new(
            E::ALL
                .iter()
                .filter(|e| !e.keyword().is_empty())
                .map(|&e| (e.keyword(), e)),
        )
    }
}

/// A keyword enum with a shared symbol table.
pub trait Vocabulary: Keyword {
    /// Human-readable description for "expected ..." messages.
    const DESCRIPTION: &'static str;

    fn table() -> &'static SymbolTable<Self>;
}

macro_rules! vocabulary {
    ($($ty:ty => $description:literal),+ $(,)?) => {
        $(
            impl Vocabulary for $ty {
                const DESCRIPTION: &'static str = $description;

                fn table() -> &'static SymbolTable<$ty> {
                    static TABLE: OnceLock<SymbolTable<$ty>> = OnceLock::new();
                    TABLE.get_or_init(SymbolTable::from_keywords)
                }
            }
        )+
    };
}

vocabulary! {
    PlanetType => "planet type",
    PlanetSize => "planet size",
    PlanetEnvironment => "planet environment",
    StarType => "star type",
    UniverseObjectType => "object type",
    EmpireAffiliationType => "empire affiliation",
    UnlockableItemType => "unlockable item type",
    ResourceType => "resource",
    MeterType => "meter",
    StatisticType => "statistic",
    ReferenceType => "object reference",
    ContainerType => "container",
}

/// Strip `prefix` and `suffix` from `word`, matching them by `case`.
///
/// `owner` + `food` + `stockpile` style compound keywords use this to pull
/// out the embedded vocabulary word.
pub fn strip_affixes<'w>(
    word: &'w str,
    prefix: &str,
    suffix: &str,
    case: KeywordCase,
) -> Option<&'w str> {
    if word.len() <= prefix.len() + suffix.len() {
        return None;
    }
    let (head, rest) = word.split_at_checked(prefix.len())?;
    let (middle, tail) = rest.split_at_checked(rest.len() - suffix.len())?;
    let matches = match case {
        KeywordCase::Exact => head == prefix && tail == suffix,
        KeywordCase::Insensitive => {
            head.eq_ignore_ascii_case(prefix) && tail.eq_ignore_ascii_case(suffix)
        }
    };
    matches.then_some(middle)
}

/// Set of property names valid for one value type.
#[derive(Debug)]
pub struct PropertyTable {
    names: FxHashSet<&'static str>,
}

impl PropertyTable {
    pub fn new(names: impl IntoIterator<Item = &'static str>) -> Self {
        PropertyTable {
            names: names.into_iter().collect(),
        }
    }

    /// The table's own spelling of `word`, if it is a property here.
    pub fn lookup(&self, word: &str, case: KeywordCase) -> Option<&'static str> {
        with_key(word, case, |key| self.names.get(key).copied())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.names.contains(word)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
