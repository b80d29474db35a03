/// The closed set of MSDL token kinds, laid out in sub-ranges:
/// bookkeeping, separators, language-independent punctuation,
/// translatable tokens, and language-dependent keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum MsdlTokenKind {
    None,
    TkEof,
    TkMalformed,

    // separators
    TkSpace,
    TkTab,
    TkCarriageReturn,
    TkEndOfLine,
    TkLineComment,
    TkBlockComment,

    // language-independent punctuation
    TkEqual,
    TkComma,
    TkColon,
    TkSemicolon,
    TkPlus,
    TkMinus,
    TkStar,
    TkSlash,
    TkPercent,
    TkDoubleBang,
    TkQuestion,
    TkTilde,
    TkLess,
    TkGreater,
    TkLeftParen,
    TkRightParen,
    TkLeftBrace,
    TkRightBrace,
    TkQuote,
    TkDot,
    TkBar,
    TkDoubleBar,
    TkFinalBar,
    TkBeginRepeat,
    TkEndRepeat,

    // translatable
    TkInteger,
    TkDouble,
    TkString,
    TkName,
    TkIdentifier,

    // language-dependent keywords
    TkTitle,
    TkComposer,
    TkOpus,
    TkPitches,
    TkOctaves,
    TkAnacrusis,
    TkBook,
    TkScore,
    TkPartGroup,
    TkPart,
    TkMusic,
    TkFragment,
    TkClef,
    TkTreble,
    TkSoprano,
    TkAlto,
    TkTenor,
    TkBaritone,
    TkBass,
    TkTablature,
    TkKey,
    TkTime,
}

impl MsdlTokenKind {
    pub fn is_separator(self) -> bool {
        matches!(
            self,
            MsdlTokenKind::TkSpace
                | MsdlTokenKind::TkTab
                | MsdlTokenKind::TkCarriageReturn
                | MsdlTokenKind::TkEndOfLine
                | MsdlTokenKind::TkLineComment
                | MsdlTokenKind::TkBlockComment
        )
    }

    pub fn is_keyword(self) -> bool {
        self >= MsdlTokenKind::TkTitle
    }

    /// The fixed source spelling of a punctuation kind; `None` for every
    /// kind whose spelling depends on its payload or on the keywords
    /// language.
    pub fn punctuation_spelling(self) -> Option<&'static str> {
        let spelling = match self {
            MsdlTokenKind::TkEqual => "=",
            MsdlTokenKind::TkComma => ",",
            MsdlTokenKind::TkColon => ":",
            MsdlTokenKind::TkSemicolon => ";",
            MsdlTokenKind::TkPlus => "+",
            MsdlTokenKind::TkMinus => "-",
            MsdlTokenKind::TkStar => "*",
            MsdlTokenKind::TkSlash => "/",
            MsdlTokenKind::TkPercent => "%",
            MsdlTokenKind::TkDoubleBang => "!!",
            MsdlTokenKind::TkQuestion => "?",
            MsdlTokenKind::TkTilde => "~",
            MsdlTokenKind::TkLess => "<",
            MsdlTokenKind::TkGreater => ">",
            MsdlTokenKind::TkLeftParen => "(",
            MsdlTokenKind::TkRightParen => ")",
            MsdlTokenKind::TkLeftBrace => "{",
            MsdlTokenKind::TkRightBrace => "}",
            MsdlTokenKind::TkQuote => "'",
            MsdlTokenKind::TkDot => ".",
            MsdlTokenKind::TkBar => "|",
            MsdlTokenKind::TkDoubleBar => "||",
            MsdlTokenKind::TkFinalBar => "|||",
            MsdlTokenKind::TkBeginRepeat => "|||:",
            MsdlTokenKind::TkEndRepeat => ":|||",
            _ => return None,
        };
        Some(spelling)
    }
}

impl std::fmt::Display for MsdlTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(spelling) = self.punctuation_spelling() {
            return write!(f, "'{}'", spelling);
        }

        match self {
            MsdlTokenKind::None => write!(f, "none"),
            MsdlTokenKind::TkEof => write!(f, "end of input"),
            MsdlTokenKind::TkMalformed => write!(f, "malformed token"),
            MsdlTokenKind::TkSpace => write!(f, "space"),
            MsdlTokenKind::TkTab => write!(f, "tab"),
            MsdlTokenKind::TkCarriageReturn => write!(f, "carriage return"),
            MsdlTokenKind::TkEndOfLine => write!(f, "end of line"),
            MsdlTokenKind::TkLineComment => write!(f, "line comment"),
            MsdlTokenKind::TkBlockComment => write!(f, "block comment"),
            MsdlTokenKind::TkInteger => write!(f, "integer"),
            MsdlTokenKind::TkDouble => write!(f, "double"),
            MsdlTokenKind::TkString => write!(f, "string"),
            MsdlTokenKind::TkName => write!(f, "name"),
            MsdlTokenKind::TkIdentifier => write!(f, "identifier"),
            MsdlTokenKind::TkTitle => write!(f, "'title'"),
            MsdlTokenKind::TkComposer => write!(f, "'composer'"),
            MsdlTokenKind::TkOpus => write!(f, "'opus'"),
            MsdlTokenKind::TkPitches => write!(f, "'pitches'"),
            MsdlTokenKind::TkOctaves => write!(f, "'octaves'"),
            MsdlTokenKind::TkAnacrusis => write!(f, "'anacrusis'"),
            MsdlTokenKind::TkBook => write!(f, "'book'"),
            MsdlTokenKind::TkScore => write!(f, "'score'"),
            MsdlTokenKind::TkPartGroup => write!(f, "'partgroup'"),
            MsdlTokenKind::TkPart => write!(f, "'part'"),
            MsdlTokenKind::TkMusic => write!(f, "'music'"),
            MsdlTokenKind::TkFragment => write!(f, "'fragment'"),
            MsdlTokenKind::TkClef => write!(f, "'clef'"),
            MsdlTokenKind::TkTreble => write!(f, "'treble'"),
            MsdlTokenKind::TkSoprano => write!(f, "'soprano'"),
            MsdlTokenKind::TkAlto => write!(f, "'alto'"),
            MsdlTokenKind::TkTenor => write!(f, "'tenor'"),
            MsdlTokenKind::TkBaritone => write!(f, "'baritone'"),
            MsdlTokenKind::TkBass => write!(f, "'bass'"),
            MsdlTokenKind::TkTablature => write!(f, "'tab'"),
            MsdlTokenKind::TkKey => write!(f, "'key'"),
            MsdlTokenKind::TkTime => write!(f, "'time'"),
            _ => write!(f, "{:?}", self),
        }
    }
}
