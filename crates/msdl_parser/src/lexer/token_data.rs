use crate::kind::{MsdlKeywordKind, MsdlTokenKind};
use crate::text::{MsdlPosition, SourceRange};

/// The payload carried by a token. Exactly one variant matches a given
/// token kind, so a mismatched read is a type error, not a runtime one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MsdlTokenValue {
    #[default]
    None,
    Keyword(MsdlKeywordKind),
    Integer(i64),
    Double(f64),
    Character(char),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MsdlToken {
    pub kind: MsdlTokenKind,
    pub value: MsdlTokenValue,
    pub range: SourceRange,
    pub position: MsdlPosition,
}

impl MsdlToken {
    pub fn new(
        kind: MsdlTokenKind,
        value: MsdlTokenValue,
        range: SourceRange,
        position: MsdlPosition,
    ) -> Self {
        MsdlToken {
            kind,
            value,
            range,
            position,
        }
    }

    /// The placeholder held before the first fetch.
    pub fn start_of_input() -> Self {
        MsdlToken::new(
            MsdlTokenKind::None,
            MsdlTokenValue::None,
            SourceRange::EMPTY,
            MsdlPosition::START,
        )
    }

    pub fn keyword(&self) -> Option<MsdlKeywordKind> {
        match &self.value {
            MsdlTokenValue::Keyword(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn integer(&self) -> Option<i64> {
        match &self.value {
            MsdlTokenValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn double(&self) -> Option<f64> {
        match &self.value {
            MsdlTokenValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn character(&self) -> Option<char> {
        match &self.value {
            MsdlTokenValue::Character(value) => Some(*value),
            _ => None,
        }
    }

    pub fn string(&self) -> Option<&str> {
        match &self.value {
            MsdlTokenValue::String(value) => Some(value),
            _ => None,
        }
    }
}
