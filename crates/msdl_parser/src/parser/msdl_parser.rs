use crate::diagnostics::{MsdlDiagnostic, MsdlDiagnostics};
use crate::grammar::parse_specification;
use crate::kind::{MsdlDurationKind, MsdlTokenKind, MsdlTokenKindSet};
use crate::lexer::{MsdlLexer, MsdlToken};
use crate::score::{MsdlBook, ScoreBuilder};
use crate::text::Reader;

use super::parser_config::ParserConfig;

/// What a parse leaves behind: the (possibly partial) score skeleton,
/// every diagnostic reported along the way, and the two correctness
/// verdicts. Malformed input never aborts a parse.
#[derive(Debug)]
pub struct MsdlParseResult {
    pub book: Option<MsdlBook>,
    pub diagnostics: Vec<MsdlDiagnostic>,
    pub lexically_correct: bool,
    pub syntactically_correct: bool,
}

/// Recursive-descent parser over the scanner's token stream.
///
/// The parser owns its copy of the current token (refreshed by
/// `advance`), the stack of stopper sets driving panic-mode recovery,
/// the diagnostics collector, and the score builder.
pub struct MsdlParser<'a> {
    lexer: MsdlLexer<'a>,
    current_token: MsdlToken,
    stoppers: Vec<MsdlTokenKindSet>,
    diagnostics: MsdlDiagnostics,
    builder: ScoreBuilder,
    pitches_language: Option<String>,
    last_duration: (MsdlDurationKind, u32),
    syntactically_correct: bool,
}

impl<'a> MsdlParser<'a> {
    pub fn parse(text: &'a str, config: ParserConfig) -> MsdlParseResult {
        let mut parser = MsdlParser::new(text, config);
        parser.advance();
        parse_specification(&mut parser);
        parser.finish()
    }

    pub(crate) fn new(text: &'a str, config: ParserConfig) -> Self {
        MsdlParser {
            lexer: MsdlLexer::new(Reader::new(text), config.lexer_config()),
            current_token: MsdlToken::start_of_input(),
            stoppers: Vec::new(),
            diagnostics: MsdlDiagnostics::new(),
            builder: ScoreBuilder::new(),
            pitches_language: None,
            last_duration: (MsdlDurationKind::Quarter, 0),
            syntactically_correct: true,
        }
    }

    pub(crate) fn finish(mut self) -> MsdlParseResult {
        debug_assert_eq!(self.stoppers.len(), 0);

        let lexically_correct = self.lexer.source_is_lexically_correct();
        if lexically_correct {
            self.diagnostics
                .report(MsdlDiagnostic::input_is_lexically_correct(
                    self.lexer.tokens_count(),
                ));
        } else {
            self.diagnostics
                .report(MsdlDiagnostic::input_is_lexically_incorrect(
                    self.lexer.tokens_count(),
                ));
        }

        if self.syntactically_correct {
            self.diagnostics
                .report(MsdlDiagnostic::input_is_syntactically_correct());
        } else {
            self.diagnostics
                .report(MsdlDiagnostic::input_is_syntactically_incorrect());
        }

        MsdlParseResult {
            book: self.builder.finish(),
            lexically_correct,
            syntactically_correct: self.syntactically_correct,
            diagnostics: self.diagnostics.into_entries(),
        }
    }

    /// Fetches the next non-separator token from the scanner and takes
    /// an owned copy of it as the current token.
    pub(crate) fn advance(&mut self) -> MsdlTokenKind {
        self.lexer.fetch_next_token(true, &mut self.diagnostics);
        self.current_token = self.lexer.current_token().clone();
        self.current_token.kind
    }

    pub(crate) fn current_token(&self) -> &MsdlToken {
        &self.current_token
    }

    pub(crate) fn current_kind(&self) -> MsdlTokenKind {
        self.current_token.kind
    }

    pub(crate) fn builder(&mut self) -> &mut ScoreBuilder {
        &mut self.builder
    }

    pub(crate) fn report(&mut self, diagnostic: MsdlDiagnostic) {
        self.diagnostics.report(diagnostic);
    }

    pub(crate) fn mark_syntactically_incorrect(&mut self) {
        self.syntactically_correct = false;
    }

    pub(crate) fn is_source_syntactically_correct(&self) -> bool {
        self.syntactically_correct
    }

    pub(crate) fn set_pitches_language(&mut self, name: &str) {
        self.pitches_language = Some(name.to_string());
    }

    pub(crate) fn pitches_language(&self) -> Option<&str> {
        self.pitches_language.as_deref()
    }

    pub(crate) fn last_duration(&self) -> (MsdlDurationKind, u32) {
        self.last_duration
    }

    pub(crate) fn set_last_duration(&mut self, kind: MsdlDurationKind, dots: u32) {
        self.last_duration = (kind, dots);
    }

    pub(crate) fn stopper_depth(&self) -> usize {
        self.stoppers.len()
    }

    /// Runs a grammar rule with its stopper set pushed; the pop happens
    /// on the single exit point every return path of the rule funnels
    /// through. Rules entered with an empty set push nothing.
    pub(crate) fn with_stoppers<R>(
        &mut self,
        stoppers: MsdlTokenKindSet,
        rule: impl FnOnce(&mut Self) -> R,
    ) -> R {
        if stoppers.is_empty() {
            return rule(self);
        }
        self.stoppers.push(stoppers);
        let result = rule(self);
        self.stoppers.pop();
        result
    }

    fn kind_is_stopper(&self, kind: MsdlTokenKind) -> bool {
        self.stoppers.iter().any(|set| set.contains(kind))
    }

    pub(crate) fn check_mandatory_kind(&mut self, expected: MsdlTokenKind, context: &str) -> bool {
        self.check_mandatory_set(MsdlTokenKindSet::from_kinds(&[expected]), context)
    }

    /// The panic-mode primitive. A current token already in `expected`
    /// succeeds without consuming. Otherwise the mismatch is reported
    /// and, unless the current token belongs to a stacked stopper set
    /// (an enclosing rule can continue from it), tokens are skipped one
    /// by one until one matches the expectation, resynchronizing there.
    pub(crate) fn check_mandatory_set(
        &mut self,
        expected: MsdlTokenKindSet,
        context: &str,
    ) -> bool {
        if expected.contains(self.current_token.kind) {
            return true;
        }

        self.syntactically_correct = false;
        self.report(MsdlDiagnostic::unexpected_token(&self.current_token, context));

        if self.kind_is_stopper(self.current_token.kind) {
            return false;
        }

        loop {
            self.report(MsdlDiagnostic::ignoring_token(&self.current_token, context));
            let kind = self.advance();
            if expected.contains(kind) {
                return true;
            }
            if kind == MsdlTokenKind::TkEof || self.kind_is_stopper(kind) {
                return false;
            }
        }
    }

    pub(crate) fn check_optional_kind(&self, expected: MsdlTokenKind) -> bool {
        if self.current_token.kind == MsdlTokenKind::TkEof {
            return false;
        }
        self.current_token.kind == expected
    }

    /// Optional constructs are recognized by simple non-match: this
    /// never consumes and never skips ahead.
    pub(crate) fn check_optional_set(&self, expected: MsdlTokenKindSet) -> bool {
        if self.current_token.kind == MsdlTokenKind::TkEof {
            return false;
        }
        expected.contains(self.current_token.kind)
    }
}
