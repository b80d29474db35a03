use crate::kind::MsdlKeywordsLanguage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerConfig {
    pub keywords_language: MsdlKeywordsLanguage,
}

impl LexerConfig {
    pub fn with_keywords_language(keywords_language: MsdlKeywordsLanguage) -> Self {
        LexerConfig { keywords_language }
    }
}
