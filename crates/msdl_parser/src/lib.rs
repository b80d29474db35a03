mod diagnostics;
mod grammar;
mod kind;
mod lexer;
mod parser;
mod score;
mod text;

pub use diagnostics::{MsdlDiagnostic, MsdlDiagnosticKind, MsdlDiagnostics};
pub use kind::*;
pub use lexer::{KeywordTable, LexerConfig, MsdlLexer, MsdlToken, MsdlTokenValue};
pub use parser::{MsdlParseResult, MsdlParser, ParserConfig};
pub use score::{
    MsdlBook, MsdlIdentification, MsdlMeasure, MsdlNote, MsdlPart, MsdlPartGroup, MsdlScore,
    MsdlStaff, MsdlVoice, ScoreBuilder,
};
pub use text::{MsdlPosition, Reader, SourceRange};

#[macro_use]
extern crate rust_i18n;

rust_i18n::i18n!("./locales", fallback = "en");

pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}
