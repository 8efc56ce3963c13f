//! Driver-level errors.

use astra_diagnostic::{Diagnostic, ErrorCode};
use astra_parse::ParseError;
use thiserror::Error;

/// Why a content source produced no records.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("{name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("{name}: cannot tell techs, buildings or specials apart from the file name")]
    UnknownKind { name: String },
}

impl ContentError {
    /// Name of the source the error belongs to.
    pub fn source_name(&self) -> &str {
        match self {
            ContentError::Parse { name, .. } | ContentError::UnknownKind { name } => name,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ContentError::Parse { source, .. } => source.to_diagnostic(),
            ContentError::UnknownKind { name } => {
                let code = ErrorCode::E2001;
                Diagnostic::error(code)
                    .with_message(format!("{} for `{name}`", code.description()))
                    .with_note("expected a file named techs, buildings or specials")
            }
        }
    }
}
