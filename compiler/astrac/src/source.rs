//! Content sources and what they parse into.

use std::fmt;

use astra_ir::{BuildingType, Special, TechManifest};

use crate::ContentError;

/// Which record grammar a source file holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Techs,
    Buildings,
    Specials,
}

impl ContentKind {
    /// Guess the kind from a file name: `techs.inf`, `buildings.inf`,
    /// `specials.inf`, with any directory prefix and in any case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let file = name.rsplit(['/', '\\']).next().unwrap_or(name);
        let stem = file.split('.').next().unwrap_or(file).to_ascii_lowercase();
        match stem.as_str() {
            "techs" => Some(ContentKind::Techs),
            "buildings" => Some(ContentKind::Buildings),
            "specials" => Some(ContentKind::Specials),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Techs => "techs",
            ContentKind::Buildings => "buildings",
            ContentKind::Specials => "specials",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named content text held in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub kind: ContentKind,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, kind: ContentKind, text: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            kind,
            text: text.into(),
        }
    }

    /// A source whose kind follows from its file name.
    pub fn detect(name: impl Into<String>, text: impl Into<String>) -> Result<Self, ContentError> {
        let name = name.into();
        match ContentKind::from_file_name(&name) {
            Some(kind) => Ok(SourceFile::new(name, kind, text)),
            None => Err(ContentError::UnknownKind { name }),
        }
    }
}

/// The records parsed from one source.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Techs(TechManifest),
    Buildings(Vec<BuildingType>),
    Specials(Vec<Special>),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Techs(_) => ContentKind::Techs,
            Content::Buildings(_) => ContentKind::Buildings,
            Content::Specials(_) => ContentKind::Specials,
        }
    }

    /// Number of top-level records, tech categories included.
    pub fn record_count(&self) -> usize {
        match self {
            Content::Techs(manifest) => manifest.categories.len() + manifest.techs.len(),
            Content::Buildings(buildings) => buildings.len(),
            Content::Specials(specials) => specials.len(),
        }
    }
}
