use crate::diagnostics::{MsdlDiagnostic, MsdlDiagnostics};
use crate::kind::{MsdlCommentStyle, MsdlKeywordsLanguage, MsdlTokenKind};
use crate::text::{MsdlPosition, Reader, SourceRange};

use super::keyword_table::KeywordTable;
use super::lexer_config::LexerConfig;
use super::token_data::{MsdlToken, MsdlTokenValue};
use super::{is_name_continue, is_name_start};

/// The MSDL scanner: produces one token per call over a character
/// stream, tracking 1-based line numbers and in-line columns (with the
/// -1 before-line-start sentinel). Never fails: anything unlexable is
/// reported to the diagnostics collector and surfaces as `TkMalformed`.
pub struct MsdlLexer<'a> {
    reader: Reader<'a>,
    config: LexerConfig,
    current_token: MsdlToken,
    line: u32,
    column: i32,
    tokens_count: usize,
    lexically_correct: bool,
}

impl<'a> MsdlLexer<'a> {
    pub fn new(reader: Reader<'a>, config: LexerConfig) -> Self {
        MsdlLexer {
            reader,
            config,
            current_token: MsdlToken::start_of_input(),
            line: 1,
            column: -1,
            tokens_count: 0,
            lexically_correct: true,
        }
    }

    pub fn current_token(&self) -> &MsdlToken {
        &self.current_token
    }

    pub fn source_is_lexically_correct(&self) -> bool {
        self.lexically_correct
    }

    pub fn tokens_count(&self) -> usize {
        self.tokens_count
    }

    /// Advances to the next token and returns its kind; the full token
    /// is available through `current_token`. With `ignore_separators`
    /// set, separator and comment tokens are produced internally but
    /// never surfaced.
    pub fn fetch_next_token(
        &mut self,
        ignore_separators: bool,
        diagnostics: &mut MsdlDiagnostics,
    ) -> MsdlTokenKind {
        loop {
            let token = self.lex_token(diagnostics);
            let kind = token.kind;
            self.current_token = token;
            if ignore_separators && kind.is_separator() {
                continue;
            }
            return kind;
        }
    }

    /// Eagerly tokenizes the remaining input into a list, leaving the
    /// incremental current-token state untouched, then reports the
    /// lexical correctness verdict with the total token count.
    pub fn scan_all_the_input_at_once(
        &mut self,
        ignore_separators: bool,
        diagnostics: &mut MsdlDiagnostics,
    ) -> Vec<MsdlToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.lex_token(diagnostics);
            if token.kind == MsdlTokenKind::TkEof {
                break;
            }
            if ignore_separators && token.kind.is_separator() {
                continue;
            }
            tokens.push(token);
        }

        if self.lexically_correct {
            diagnostics.report(MsdlDiagnostic::input_is_lexically_correct(self.tokens_count));
        } else {
            diagnostics.report(MsdlDiagnostic::input_is_lexically_incorrect(self.tokens_count));
        }

        tokens
    }

    /// Scans the whole input and re-renders it with keywords spelled in
    /// `target_language` and comments delimited in `comment_style`.
    /// Separators reproduce one-for-one so the output stays valid MSDL;
    /// every other token reproduces its source text verbatim.
    pub fn translate_all_the_input_to_keywords_language(
        &mut self,
        target_language: MsdlKeywordsLanguage,
        comment_style: MsdlCommentStyle,
        diagnostics: &mut MsdlDiagnostics,
    ) -> String {
        if self.config.keywords_language == target_language {
            diagnostics.report(MsdlDiagnostic::input_is_already_in_keywords_language(
                target_language,
            ));
        }

        let mut output = String::new();
        loop {
            let token = self.lex_token(diagnostics);
            if token.kind == MsdlTokenKind::TkEof {
                break;
            }
            self.render_token(&token, target_language, comment_style, &mut output);
        }
        output
    }

    fn render_token(
        &self,
        token: &MsdlToken,
        target_language: MsdlKeywordsLanguage,
        comment_style: MsdlCommentStyle,
        output: &mut String,
    ) {
        match token.kind {
            MsdlTokenKind::TkSpace => output.push(' '),
            MsdlTokenKind::TkTab => output.push('\t'),
            MsdlTokenKind::TkCarriageReturn => output.push('\r'),
            MsdlTokenKind::TkEndOfLine => output.push('\n'),
            MsdlTokenKind::TkLineComment => {
                let content = token.string().unwrap_or("");
                match comment_style {
                    MsdlCommentStyle::Percent => output.push('%'),
                    MsdlCommentStyle::Star => output.push_str("//"),
                }
                output.push_str(content);
            }
            MsdlTokenKind::TkBlockComment => {
                let content = token.string().unwrap_or("");
                match comment_style {
                    MsdlCommentStyle::Percent => {
                        output.push_str("%{");
                        output.push_str(content);
                        output.push_str("%}");
                    }
                    MsdlCommentStyle::Star => {
                        output.push_str("/*");
                        output.push_str(content);
                        output.push_str("*/");
                    }
                }
            }
            _ => {
                if let Some(keyword) = token.keyword() {
                    output.push_str(KeywordTable::translated_spelling_of(
                        target_language,
                        keyword,
                    ));
                } else {
                    output.push_str(self.source_slice(token.range));
                }
            }
        }
    }

    fn source_slice(&self, range: SourceRange) -> &'a str {
        &self.reader.get_source_text()[range.start_offset..range.end_offset()]
    }

    fn lex_token(&mut self, diagnostics: &mut MsdlDiagnostics) -> MsdlToken {
        self.reader.reset_buff();
        let position = self.next_char_position();
        let (kind, value) = self.lex(diagnostics);
        let range = self.reader.current_range();
        let text = self.reader.current_text();
        self.track_text(text);
        if kind != MsdlTokenKind::TkEof {
            self.tokens_count += 1;
        }
        MsdlToken::new(kind, value, range, position)
    }

    fn lex(&mut self, diagnostics: &mut MsdlDiagnostics) -> (MsdlTokenKind, MsdlTokenValue) {
        match self.reader.current_char() {
            ' ' => {
                self.reader.eat_when(' ');
                (MsdlTokenKind::TkSpace, MsdlTokenValue::None)
            }
            '\t' => {
                self.reader.eat_when('\t');
                (MsdlTokenKind::TkTab, MsdlTokenValue::None)
            }
            '\n' => {
                self.reader.bump();
                (MsdlTokenKind::TkEndOfLine, MsdlTokenValue::None)
            }
            '\r' => {
                self.reader.bump();
                if self.reader.current_char() == '\n' {
                    self.reader.bump();
                    (MsdlTokenKind::TkEndOfLine, MsdlTokenValue::None)
                } else {
                    (MsdlTokenKind::TkCarriageReturn, MsdlTokenValue::None)
                }
            }
            '%' => {
                self.reader.bump();
                if self.reader.current_char() == '{' {
                    self.reader.bump();
                    self.lex_block_comment(diagnostics, '%', '}')
                } else {
                    self.lex_line_comment(1)
                }
            }
            '/' => {
                self.reader.bump();
                match self.reader.current_char() {
                    '/' => {
                        self.reader.bump();
                        self.lex_line_comment(2)
                    }
                    '*' => {
                        self.reader.bump();
                        self.lex_block_comment(diagnostics, '*', '/')
                    }
                    _ => (MsdlTokenKind::TkSlash, MsdlTokenValue::None),
                }
            }
            '"' => self.lex_string(diagnostics),
            '0'..='9' => self.lex_number(diagnostics),
            '|' => self.lex_bars(diagnostics),
            ':' => {
                self.reader.bump();
                if self.reader.current_char() != '|' {
                    return (MsdlTokenKind::TkColon, MsdlTokenValue::None);
                }
                let count = self.reader.eat_when('|');
                if count == 3 {
                    (MsdlTokenKind::TkEndRepeat, MsdlTokenValue::None)
                } else {
                    let text = self.reader.current_text();
                    self.report_lexical(
                        diagnostics,
                        MsdlDiagnostic::illegal_characters(text, self.reader.current_range()),
                    );
                    (MsdlTokenKind::TkMalformed, MsdlTokenValue::None)
                }
            }
            '!' => {
                self.reader.bump();
                if self.reader.current_char() == '!' {
                    self.reader.bump();
                    (MsdlTokenKind::TkDoubleBang, MsdlTokenValue::None)
                } else {
                    self.report_lexical(
                        diagnostics,
                        MsdlDiagnostic::illegal_character('!', self.reader.current_range()),
                    );
                    (MsdlTokenKind::TkMalformed, MsdlTokenValue::Character('!'))
                }
            }
            '=' => self.single_char(MsdlTokenKind::TkEqual),
            ',' => self.single_char(MsdlTokenKind::TkComma),
            ';' => self.single_char(MsdlTokenKind::TkSemicolon),
            '+' => self.single_char(MsdlTokenKind::TkPlus),
            '-' => self.single_char(MsdlTokenKind::TkMinus),
            '*' => self.single_char(MsdlTokenKind::TkStar),
            '?' => self.single_char(MsdlTokenKind::TkQuestion),
            '~' => self.single_char(MsdlTokenKind::TkTilde),
            '<' => self.single_char(MsdlTokenKind::TkLess),
            '>' => self.single_char(MsdlTokenKind::TkGreater),
            '(' => self.single_char(MsdlTokenKind::TkLeftParen),
            ')' => self.single_char(MsdlTokenKind::TkRightParen),
            '{' => self.single_char(MsdlTokenKind::TkLeftBrace),
            '}' => self.single_char(MsdlTokenKind::TkRightBrace),
            '\'' => self.single_char(MsdlTokenKind::TkQuote),
            '.' => self.single_char(MsdlTokenKind::TkDot),
            _ if self.reader.is_eof() => (MsdlTokenKind::TkEof, MsdlTokenValue::None),
            ch if is_name_start(ch) => self.lex_name(),
            ch => {
                self.reader.bump();
                self.report_lexical(
                    diagnostics,
                    MsdlDiagnostic::illegal_character(ch, self.reader.current_range()),
                );
                (MsdlTokenKind::TkMalformed, MsdlTokenValue::Character(ch))
            }
        }
    }

    fn single_char(&mut self, kind: MsdlTokenKind) -> (MsdlTokenKind, MsdlTokenValue) {
        self.reader.bump();
        (kind, MsdlTokenValue::None)
    }

    fn lex_line_comment(&mut self, prefix_len: usize) -> (MsdlTokenKind, MsdlTokenValue) {
        self.reader.eat_while(|ch| ch != '\n' && ch != '\r');
        let content = &self.reader.current_text()[prefix_len..];
        (
            MsdlTokenKind::TkLineComment,
            MsdlTokenValue::String(content.to_string()),
        )
    }

    fn lex_block_comment(
        &mut self,
        diagnostics: &mut MsdlDiagnostics,
        first: char,
        second: char,
    ) -> (MsdlTokenKind, MsdlTokenValue) {
        let mut terminated = false;
        while !self.reader.is_eof() {
            if self.reader.current_char() == first && self.reader.next_char() == second {
                self.reader.bump();
                self.reader.bump();
                terminated = true;
                break;
            }
            self.reader.bump();
        }

        let text = self.reader.current_text();
        if !terminated {
            self.report_lexical(
                diagnostics,
                MsdlDiagnostic::illegal_characters(text, self.reader.current_range()),
            );
            return (
                MsdlTokenKind::TkBlockComment,
                MsdlTokenValue::String(text[2..].to_string()),
            );
        }

        (
            MsdlTokenKind::TkBlockComment,
            MsdlTokenValue::String(text[2..text.len() - 2].to_string()),
        )
    }

    fn lex_string(&mut self, diagnostics: &mut MsdlDiagnostics) -> (MsdlTokenKind, MsdlTokenValue) {
        self.reader.bump();
        let mut value = String::new();
        let mut malformed = false;

        loop {
            if self.reader.is_eof() {
                self.report_lexical(
                    diagnostics,
                    MsdlDiagnostic::unterminated_string(self.reader.current_range()),
                );
                return (MsdlTokenKind::TkMalformed, MsdlTokenValue::String(value));
            }

            match self.reader.current_char() {
                '"' => {
                    self.reader.bump();
                    break;
                }
                '\n' | '\r' => {
                    self.report_lexical(
                        diagnostics,
                        MsdlDiagnostic::unterminated_string(self.reader.current_range()),
                    );
                    return (MsdlTokenKind::TkMalformed, MsdlTokenValue::String(value));
                }
                '\\' => {
                    self.reader.bump();
                    let escaped = self.reader.current_char();
                    match escaped {
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        _ => {
                            self.report_lexical(
                                diagnostics,
                                MsdlDiagnostic::illegal_escaped_character_in_string(
                                    escaped,
                                    self.reader.current_range(),
                                ),
                            );
                            malformed = true;
                        }
                    }
                    if !self.reader.is_eof() {
                        self.reader.bump();
                    }
                }
                ch => {
                    value.push(ch);
                    self.reader.bump();
                }
            }
        }

        if malformed {
            (MsdlTokenKind::TkMalformed, MsdlTokenValue::String(value))
        } else {
            (MsdlTokenKind::TkString, MsdlTokenValue::String(value))
        }
    }

    fn lex_number(&mut self, diagnostics: &mut MsdlDiagnostics) -> (MsdlTokenKind, MsdlTokenValue) {
        self.reader.eat_while(|ch| ch.is_ascii_digit());
        let mut is_double = false;

        if self.reader.current_char() == '.' {
            if self.reader.next_char().is_ascii_digit() {
                self.reader.bump();
                self.reader.eat_while(|ch| ch.is_ascii_digit());
                is_double = true;
            } else {
                self.reader.bump();
                let found = self.reader.current_char();
                self.report_lexical(
                    diagnostics,
                    MsdlDiagnostic::digit_expected_after_decimal_dot(
                        found,
                        self.reader.current_range(),
                    ),
                );
                return (MsdlTokenKind::TkMalformed, MsdlTokenValue::None);
            }
        }

        if matches!(self.reader.current_char(), 'e' | 'E') {
            self.reader.bump();
            if matches!(self.reader.current_char(), '+' | '-') {
                self.reader.bump();
            }
            if !self.reader.current_char().is_ascii_digit() {
                let found = self.reader.current_char();
                self.report_lexical(
                    diagnostics,
                    MsdlDiagnostic::digit_expected_in_exponent(found, self.reader.current_range()),
                );
                return (MsdlTokenKind::TkMalformed, MsdlTokenValue::None);
            }
            self.reader.eat_while(|ch| ch.is_ascii_digit());
            is_double = true;
        }

        let text = self.reader.current_text();
        if is_double {
            (
                MsdlTokenKind::TkDouble,
                MsdlTokenValue::Double(text.parse().unwrap_or(0.0)),
            )
        } else {
            (
                MsdlTokenKind::TkInteger,
                MsdlTokenValue::Integer(text.parse().unwrap_or(0)),
            )
        }
    }

    fn lex_name(&mut self) -> (MsdlTokenKind, MsdlTokenValue) {
        self.reader.bump();
        self.reader.eat_while(is_name_continue);
        let text = self.reader.current_text();

        if text.chars().any(|ch| ch.is_ascii_digit()) {
            return (
                MsdlTokenKind::TkIdentifier,
                MsdlTokenValue::String(text.to_string()),
            );
        }

        match KeywordTable::keyword_kind_of(self.config.keywords_language, text) {
            Some(keyword) => (keyword.token_kind(), MsdlTokenValue::Keyword(keyword)),
            None => (MsdlTokenKind::TkName, MsdlTokenValue::String(text.to_string())),
        }
    }

    fn lex_bars(&mut self, diagnostics: &mut MsdlDiagnostics) -> (MsdlTokenKind, MsdlTokenValue) {
        let count = self.reader.eat_when('|');
        match count {
            1 => (MsdlTokenKind::TkBar, MsdlTokenValue::None),
            2 => (MsdlTokenKind::TkDoubleBar, MsdlTokenValue::None),
            3 => {
                if self.reader.current_char() == ':' {
                    self.reader.bump();
                    (MsdlTokenKind::TkBeginRepeat, MsdlTokenValue::None)
                } else {
                    (MsdlTokenKind::TkFinalBar, MsdlTokenValue::None)
                }
            }
            _ => {
                let text = self.reader.current_text();
                self.report_lexical(
                    diagnostics,
                    MsdlDiagnostic::illegal_characters(text, self.reader.current_range()),
                );
                (MsdlTokenKind::TkMalformed, MsdlTokenValue::None)
            }
        }
    }

    fn report_lexical(&mut self, diagnostics: &mut MsdlDiagnostics, diagnostic: MsdlDiagnostic) {
        self.lexically_correct = false;
        diagnostics.report(diagnostic);
    }

    fn next_char_position(&self) -> MsdlPosition {
        let column = if self.column < 0 { 1 } else { self.column + 1 };
        MsdlPosition::new(self.line, column)
    }

    fn track_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = -1;
            } else if self.column < 0 {
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}
