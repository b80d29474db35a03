/// The natural language MSDL keywords are spelled in. English is the
/// reference language and is always complete; other languages may leave
/// some keyword kinds unimplemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MsdlKeywordsLanguage {
    #[default]
    English,
    French,
    Italian,
    German,
}

impl std::fmt::Display for MsdlKeywordsLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MsdlKeywordsLanguage::English => "english",
            MsdlKeywordsLanguage::French => "french",
            MsdlKeywordsLanguage::Italian => "italian",
            MsdlKeywordsLanguage::German => "german",
        };
        write!(f, "{}", name)
    }
}

/// How comments are delimited when MSDL source is re-rendered:
/// percent-style (`% ...`, `%{ ... %}`) or star-style
/// (`// ...`, `/* ... */`). Both styles are always accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MsdlCommentStyle {
    #[default]
    Percent,
    Star,
}
