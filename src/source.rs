//! Source text handling
//!
//! [`SourceFile`] carries the raw text of one file plus its index-relative
//! uri; [`LineMap`] translates byte offsets in that text into 0-based
//! line/character positions for occurrence ranges.

use std::fs;
use std::path::Path;

use crate::document::Range;
use crate::error::{IndexError, Result};

/// One source file to be indexed: uri relative to the source root
/// (forward-slash separated) plus the raw text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    uri: String,
    text: String,
}

impl SourceFile {
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Self {
        let uri = uri.into().replace('\\', "/");
        Self { uri, text: text.into() }
    }

    /// Reads a file from disk, relativizing its path against `sourceroot`.
    pub fn from_path(sourceroot: &Path, path: &Path) -> Result<Self> {
        let relative = path
            .strip_prefix(sourceroot)
            .map_err(|_| IndexError::OutsideSourceRoot(path.to_path_buf()))?;
        let text = fs::read_to_string(path)?;
        Ok(Self::new(relative.to_string_lossy(), text))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Offset to line/character translator for one file's text.
///
/// Lines and characters are 0-based; characters count Unicode scalar values
/// from the start of the line, not bytes.
#[derive(Debug)]
pub struct LineMap {
    /// Byte offset of the start of each line. Always non-empty; line 0
    /// starts at offset 0.
    line_starts: Vec<usize>,
    len: usize,
    chars: Vec<(usize, char)>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            len: text.len(),
            chars: text.char_indices().collect(),
        }
    }

    /// 0-based line containing the byte offset.
    pub fn line(&self, offset: usize) -> u32 {
        let offset = offset.min(self.len);
        (self.line_starts.partition_point(|&s| s <= offset) - 1) as u32
    }

    /// 0-based character column of the byte offset within its line.
    pub fn character(&self, offset: usize) -> u32 {
        let offset = offset.min(self.len);
        let line_start = self.line_starts[self.line(offset) as usize];
        let chars_before = |o: usize| self.chars.partition_point(|&(i, _)| i < o);
        (chars_before(offset) - chars_before(line_start)) as u32
    }

    /// Occurrence range for a byte span.
    ///
    /// Spans that cross a line boundary collapse to the start line: the end
    /// character is still taken from the span's end offset within its own
    /// line, but both line numbers report the start line.
    pub fn range(&self, start: usize, end: usize) -> Range {
        let start_line = self.line(start);
        Range {
            start_line,
            start_character: self.character(start),
            end_line: start_line,
            end_character: self.character(end),
        }
    }
}
