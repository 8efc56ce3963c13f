//! Driver for Astra content files.
//!
//! Parses many in-memory sources at once, keeps one result per source, and
//! renders failures as diagnostics against their own source text.

mod batch;
mod error;
mod source;

use std::sync::Once;

pub use batch::{parse_batch, parse_source, report, BatchConfig, BatchSummary};
pub use error::ContentError;
pub use source::{Content, ContentKind, SourceFile};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=astra_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
