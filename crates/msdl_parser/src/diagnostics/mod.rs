use crate::kind::MsdlKeywordsLanguage;
use crate::lexer::MsdlToken;
use crate::text::SourceRange;

/// The closed set of events the scanner and parser report. Tests and
/// embedders dispatch on the kind; the human-readable message is
/// rendered through the locale catalogs at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsdlDiagnosticKind {
    // lexical
    IllegalCharacter,
    IllegalCharacters,
    DigitExpectedAfterDecimalDot,
    DigitExpectedInExponent,
    IllegalEscapedCharacterInString,
    InputIsLexicallyCorrect,
    InputIsLexicallyIncorrect,
    InputIsAlreadyInKeywordsLanguage,

    // syntactic
    UnexpectedToken,
    IgnoringToken,
    InputIsSyntacticallyCorrect,
    InputIsSyntacticallyIncorrect,

    // semantic values
    MixedCommasAndQuotesInOctaveIndication,
    MalformedNoteDuration,
    MultipleIdentifications,
    StringExpectedAsTitle,
    StringExpectedAsComposer,
    StringExpectedAsOpus,
}

impl MsdlDiagnosticKind {
    /// Correctness verdicts and the already-translated notice are
    /// informational; everything else marks the input as broken.
    pub fn is_error(self) -> bool {
        !matches!(
            self,
            MsdlDiagnosticKind::InputIsLexicallyCorrect
                | MsdlDiagnosticKind::InputIsSyntacticallyCorrect
                | MsdlDiagnosticKind::InputIsAlreadyInKeywordsLanguage
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MsdlDiagnostic {
    pub kind: MsdlDiagnosticKind,
    pub message: String,
    pub range: SourceRange,
}

impl MsdlDiagnostic {
    fn new(kind: MsdlDiagnosticKind, message: &str, range: SourceRange) -> Self {
        MsdlDiagnostic {
            kind,
            message: message.to_string(),
            range,
        }
    }

    pub fn illegal_character(ch: char, range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::IllegalCharacter,
            &t!("illegal character '%{ch}'", ch = ch),
            range,
        )
    }

    pub fn illegal_characters(text: &str, range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::IllegalCharacters,
            &t!("illegal characters '%{text}'", text = text),
            range,
        )
    }

    pub fn digit_expected_after_decimal_dot(ch: char, range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::DigitExpectedAfterDecimalDot,
            &t!("a digit was expected after the decimal dot, found '%{ch}'", ch = ch),
            range,
        )
    }

    pub fn digit_expected_in_exponent(ch: char, range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::DigitExpectedInExponent,
            &t!("a digit was expected in the exponent, found '%{ch}'", ch = ch),
            range,
        )
    }

    pub fn illegal_escaped_character_in_string(ch: char, range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::IllegalEscapedCharacterInString,
            &t!("illegal escaped character '%{ch}' in string", ch = ch),
            range,
        )
    }

    pub fn unterminated_string(range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::IllegalCharacters,
            &t!("unterminated string"),
            range,
        )
    }

    pub fn input_is_lexically_correct(tokens_count: usize) -> Self {
        Self::new(
            MsdlDiagnosticKind::InputIsLexicallyCorrect,
            &t!("the input is lexically correct, %{count} tokens", count = tokens_count),
            SourceRange::EMPTY,
        )
    }

    pub fn input_is_lexically_incorrect(tokens_count: usize) -> Self {
        Self::new(
            MsdlDiagnosticKind::InputIsLexicallyIncorrect,
            &t!("the input is lexically incorrect, %{count} tokens", count = tokens_count),
            SourceRange::EMPTY,
        )
    }

    pub fn input_is_already_in_keywords_language(language: MsdlKeywordsLanguage) -> Self {
        Self::new(
            MsdlDiagnosticKind::InputIsAlreadyInKeywordsLanguage,
            &t!(
                "the input is already in keywords language '%{language}'",
                language = language
            ),
            SourceRange::EMPTY,
        )
    }

    pub fn unexpected_token(token: &MsdlToken, context: &str) -> Self {
        Self::new(
            MsdlDiagnosticKind::UnexpectedToken,
            &t!(
                "unexpected token %{token} while parsing %{context}",
                token = token.kind,
                context = context
            ),
            token.range,
        )
    }

    pub fn ignoring_token(token: &MsdlToken, context: &str) -> Self {
        Self::new(
            MsdlDiagnosticKind::IgnoringToken,
            &t!(
                "ignoring token %{token} while parsing %{context}",
                token = token.kind,
                context = context
            ),
            token.range,
        )
    }

    pub fn input_is_syntactically_correct() -> Self {
        Self::new(
            MsdlDiagnosticKind::InputIsSyntacticallyCorrect,
            &t!("the input is syntactically correct"),
            SourceRange::EMPTY,
        )
    }

    pub fn input_is_syntactically_incorrect() -> Self {
        Self::new(
            MsdlDiagnosticKind::InputIsSyntacticallyIncorrect,
            &t!("the input is syntactically incorrect"),
            SourceRange::EMPTY,
        )
    }

    pub fn mixed_commas_and_quotes_in_octave_indication(range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::MixedCommasAndQuotesInOctaveIndication,
            &t!("commas and quotes may not be mixed in an octave indication"),
            range,
        )
    }

    pub fn malformed_note_duration(text: &str, range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::MalformedNoteDuration,
            &t!("malformed note duration '%{text}'", text = text),
            range,
        )
    }

    pub fn multiple_identifications(field: &str, range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::MultipleIdentifications,
            &t!("'%{field}' appears more than once in the identification", field = field),
            range,
        )
    }

    pub fn string_expected_as_title(range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::StringExpectedAsTitle,
            &t!("a string was expected as the title"),
            range,
        )
    }

    pub fn string_expected_as_composer(range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::StringExpectedAsComposer,
            &t!("a string was expected as the composer"),
            range,
        )
    }

    pub fn string_expected_as_opus(range: SourceRange) -> Self {
        Self::new(
            MsdlDiagnosticKind::StringExpectedAsOpus,
            &t!("a string was expected as the opus"),
            range,
        )
    }
}

/// Collector the scanner and parser report into. Fire-and-forget: no
/// report returns a value to the caller.
#[derive(Debug, Default)]
pub struct MsdlDiagnostics {
    entries: Vec<MsdlDiagnostic>,
}

impl MsdlDiagnostics {
    pub fn new() -> Self {
        MsdlDiagnostics::default()
    }

    pub fn report(&mut self, diagnostic: MsdlDiagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[MsdlDiagnostic] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<MsdlDiagnostic> {
        self.entries
    }

    pub fn has(&self, kind: MsdlDiagnosticKind) -> bool {
        self.entries.iter().any(|entry| entry.kind == kind)
    }

    pub fn count_of(&self, kind: MsdlDiagnosticKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.kind.is_error()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
