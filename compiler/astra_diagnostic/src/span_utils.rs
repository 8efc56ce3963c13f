//! Line and column lookup for byte offsets.
//!
//! Content files are reported by 1-based line and character column. For
//! repeated lookups on one source, build a [`LineOffsetTable`] once and
//! binary-search it.

/// Pre-computed byte offsets of every line start.
///
/// # Example
///
/// ```
/// use astra_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "tech\nname = \"X\"";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 5), (2, 1));
/// assert_eq!(table.line_text(source, 2), Some("name = \"X\""));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[i]` is the byte offset where line `i + 1` starts.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build the table with one scan over the source.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column); the column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());

        let col_text = source.get(line_start..offset).unwrap_or("");
        let col = u32::try_from(col_text.chars().count()).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    /// Byte offset of a 1-based line start.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Padding that puts a caret under the 1-based `column` of `line`.
///
/// Tabs before the column are copied so the caret lands where the terminal
/// draws the character, whatever its tab width.
///
/// ```
/// use astra_diagnostic::span_utils::caret_indent;
///
/// assert_eq!(caret_indent("\tall", 3), "\t ");
/// ```
pub fn caret_indent(line: &str, column: u32) -> String {
    line.chars()
        .take((column as usize).saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

/// 1-based (line, column) of a byte offset, scanning from the start.
///
/// For repeated lookups, use [`LineOffsetTable`] instead.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    LineOffsetTable::build(source).offset_to_line_col(source, offset)
}

#[cfg(test)]
mod tests;
