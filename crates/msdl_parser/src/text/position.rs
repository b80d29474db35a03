use serde::{Deserialize, Serialize};

/// A line/column pair in the source text.
///
/// Lines are 1-based. Columns are 1-based within a line; the scanner's
/// internal column state uses `-1` to mean "before the first character
/// of the line", so a materialized position always has `column >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsdlPosition {
    pub line: u32,
    pub column: i32,
}

impl MsdlPosition {
    pub fn new(line: u32, column: i32) -> Self {
        MsdlPosition { line, column }
    }

    /// The position of the very first character of the input.
    pub const START: MsdlPosition = MsdlPosition { line: 1, column: 1 };
}

impl Default for MsdlPosition {
    fn default() -> Self {
        MsdlPosition::START
    }
}

impl std::fmt::Display for MsdlPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
