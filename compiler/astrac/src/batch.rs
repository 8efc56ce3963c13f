//! Parsing many sources at once.

use std::io::Write;
use std::time::{Duration, Instant};

use astra_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use astra_parse::{
    parse_buildings_with_options, parse_specials_with_options, parse_techs_with_options,
    ParseOptions,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{Content, ContentError, ContentKind, SourceFile};

/// Configuration for a batch parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Parse sources on a rayon pool.
    pub parallel: bool,
    pub options: ParseOptions,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            parallel: true,
            options: ParseOptions::default(),
        }
    }
}

impl BatchConfig {
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }
}

/// Counts over a finished batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub sources: usize,
    pub failed: usize,
    pub records: usize,
    pub duration: Duration,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.sources - self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Parse one source with the grammar its kind names.
pub fn parse_source(source: &SourceFile, options: &ParseOptions) -> Result<Content, ContentError> {
    let text = source.text.as_str();
    let parsed = match source.kind {
        ContentKind::Techs => parse_techs_with_options(text, options).map(Content::Techs),
        ContentKind::Buildings => {
            parse_buildings_with_options(text, options).map(Content::Buildings)
        }
        ContentKind::Specials => parse_specials_with_options(text, options).map(Content::Specials),
    };
    match parsed {
        Ok(content) => {
            info!(
                source = %source.name,
                kind = %source.kind,
                records = content.record_count(),
                "parsed"
            );
            Ok(content)
        }
        Err(error) => {
            warn!(
                source = %source.name,
                code = %error.code,
                line = error.line,
                column = error.column,
                "parse failed"
            );
            Err(ContentError::Parse {
                name: source.name.clone(),
                source: error,
            })
        }
    }
}

/// Parse every source, returning results in input order.
///
/// A failing source never stops the others.
pub fn parse_batch(
    sources: &[SourceFile],
    config: &BatchConfig,
) -> (Vec<Result<Content, ContentError>>, BatchSummary) {
    let start = Instant::now();
    debug!(sources = sources.len(), parallel = config.parallel, "batch start");

    let results: Vec<_> = if config.parallel {
        sources
            .par_iter()
            .map(|source| parse_source(source, &config.options))
            .collect()
    } else {
        sources
            .iter()
            .map(|source| parse_source(source, &config.options))
            .collect()
    };

    let mut summary = BatchSummary {
        sources: sources.len(),
        duration: start.elapsed(),
        ..BatchSummary::default()
    };
    for result in &results {
        match result {
            Ok(content) => summary.records += content.record_count(),
            Err(_) => summary.failed += 1,
        }
    }
    info!(
        sources = summary.sources,
        failed = summary.failed,
        records = summary.records,
        "batch done"
    );
    (results, summary)
}

/// Render every failed result as a diagnostic against its own source, then
/// a summary line. Returns the writer.
///
/// `results` pairs with `sources` by index, as returned by [`parse_batch`].
pub fn report<W: Write>(
    sources: &[SourceFile],
    results: &[Result<Content, ContentError>],
    writer: W,
    mode: ColorMode,
) -> W {
    let mut writer = writer;
    let mut errors = 0;
    for (source, result) in sources.iter().zip(results) {
        let Err(error) = result else { continue };
        errors += 1;
        let mut emitter = TerminalEmitter::with_color_mode(writer, mode, false)
            .with_source(source.name.as_str(), source.text.as_str());
        emitter.emit(&error.to_diagnostic());
        emitter.flush();
        writer = emitter.into_inner();
    }
    let mut emitter = TerminalEmitter::with_color_mode(writer, mode, false);
    emitter.emit_summary(errors);
    emitter.flush();
    emitter.into_inner()
}
