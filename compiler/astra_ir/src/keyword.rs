//! Keyword-backed enumerations.
//!
//! Every closed vocabulary of the content language (planet types, meters,
//! affiliations, ...) is an enum implementing [`Keyword`]: it knows the
//! lowercase word that spells it in content files and the canonical engine
//! name (`PT_SWAMP`, `METER_POPULATION`) it stands for.

use std::fmt;

/// A closed set of constants spelled by single lowercase words.
pub trait Keyword: Copy + Eq + fmt::Debug + 'static {
    /// Every constant, in declaration order.
    const ALL: &'static [Self];

    /// The lowercase word used in content text.
    fn keyword(self) -> &'static str;

    /// The canonical engine name of this constant.
    fn canonical_name(self) -> &'static str;
}

/// Declare a keyword enum: `Variant = ("word", "CANONICAL"),`.
///
/// Generates the enum with the usual derives, a [`Keyword`] impl, and a
/// `Display` impl printing the keyword.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = ($kw:literal, $canon:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::Keyword for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn keyword(self) -> &'static str {
                match self {
                    $($name::$variant => $kw,)+
                }
            }

            fn canonical_name(self) -> &'static str {
                match self {
                    $($name::$variant => $canon,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::Keyword::keyword(*self))
            }
        }
    };
}
