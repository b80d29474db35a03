use crate::kind::{MsdlKeywordKind, MsdlKeywordsLanguage};

/// Per-language keyword spellings. English is complete by construction;
/// a language may deliberately leave kinds unimplemented, in which case
/// `keyword_kind_of` misses (the scanner then produces a plain name)
/// and `spelling_of` returns `None` (translation falls back to the
/// English spelling).
pub struct KeywordTable;

impl KeywordTable {
    pub fn keyword_kind_of(
        language: MsdlKeywordsLanguage,
        spelling: &str,
    ) -> Option<MsdlKeywordKind> {
        match language {
            MsdlKeywordsLanguage::English => english_keyword_kind_of(spelling),
            MsdlKeywordsLanguage::French => french_keyword_kind_of(spelling),
            MsdlKeywordsLanguage::Italian => italian_keyword_kind_of(spelling),
            MsdlKeywordsLanguage::German => german_keyword_kind_of(spelling),
        }
    }

    pub fn spelling_of(
        language: MsdlKeywordsLanguage,
        kind: MsdlKeywordKind,
    ) -> Option<&'static str> {
        match language {
            MsdlKeywordsLanguage::English => Some(english_spelling_of(kind)),
            MsdlKeywordsLanguage::French => Some(french_spelling_of(kind)),
            MsdlKeywordsLanguage::Italian => Some(italian_spelling_of(kind)),
            MsdlKeywordsLanguage::German => german_spelling_of(kind),
        }
    }

    /// Spelling for rendering: the language's own spelling, or the
    /// English one where the language leaves the kind unimplemented.
    pub fn translated_spelling_of(
        language: MsdlKeywordsLanguage,
        kind: MsdlKeywordKind,
    ) -> &'static str {
        Self::spelling_of(language, kind).unwrap_or_else(|| english_spelling_of(kind))
    }
}

fn english_spelling_of(kind: MsdlKeywordKind) -> &'static str {
    match kind {
        MsdlKeywordKind::Title => "title",
        MsdlKeywordKind::Composer => "composer",
        MsdlKeywordKind::Opus => "opus",
        MsdlKeywordKind::Pitches => "pitches",
        MsdlKeywordKind::Octaves => "octaves",
        MsdlKeywordKind::Anacrusis => "anacrusis",
        MsdlKeywordKind::Book => "book",
        MsdlKeywordKind::Score => "score",
        MsdlKeywordKind::PartGroup => "partgroup",
        MsdlKeywordKind::Part => "part",
        MsdlKeywordKind::Music => "music",
        MsdlKeywordKind::Fragment => "fragment",
        MsdlKeywordKind::Clef => "clef",
        MsdlKeywordKind::Treble => "treble",
        MsdlKeywordKind::Soprano => "soprano",
        MsdlKeywordKind::Alto => "alto",
        MsdlKeywordKind::Tenor => "tenor",
        MsdlKeywordKind::Baritone => "baritone",
        MsdlKeywordKind::Bass => "bass",
        MsdlKeywordKind::Tablature => "tab",
        MsdlKeywordKind::Key => "key",
        MsdlKeywordKind::Time => "time",
    }
}

fn english_keyword_kind_of(spelling: &str) -> Option<MsdlKeywordKind> {
    let kind = match spelling {
        "title" => MsdlKeywordKind::Title,
        "composer" => MsdlKeywordKind::Composer,
        "opus" => MsdlKeywordKind::Opus,
        "pitches" => MsdlKeywordKind::Pitches,
        "octaves" => MsdlKeywordKind::Octaves,
        "anacrusis" => MsdlKeywordKind::Anacrusis,
        "book" => MsdlKeywordKind::Book,
        "score" => MsdlKeywordKind::Score,
        "partgroup" => MsdlKeywordKind::PartGroup,
        "part" => MsdlKeywordKind::Part,
        "music" => MsdlKeywordKind::Music,
        "fragment" => MsdlKeywordKind::Fragment,
        "clef" => MsdlKeywordKind::Clef,
        "treble" => MsdlKeywordKind::Treble,
        "soprano" => MsdlKeywordKind::Soprano,
        "alto" => MsdlKeywordKind::Alto,
        "tenor" => MsdlKeywordKind::Tenor,
        "baritone" => MsdlKeywordKind::Baritone,
        "bass" => MsdlKeywordKind::Bass,
        "tab" => MsdlKeywordKind::Tablature,
        "key" => MsdlKeywordKind::Key,
        "time" => MsdlKeywordKind::Time,
        _ => return None,
    };
    Some(kind)
}

fn french_spelling_of(kind: MsdlKeywordKind) -> &'static str {
    match kind {
        MsdlKeywordKind::Title => "titre",
        MsdlKeywordKind::Composer => "compositeur",
        MsdlKeywordKind::Opus => "opus",
        MsdlKeywordKind::Pitches => "hauteurs",
        MsdlKeywordKind::Octaves => "octaves",
        MsdlKeywordKind::Anacrusis => "anacrouse",
        MsdlKeywordKind::Book => "livre",
        MsdlKeywordKind::Score => "partition",
        MsdlKeywordKind::PartGroup => "groupe",
        MsdlKeywordKind::Part => "partie",
        MsdlKeywordKind::Music => "musique",
        MsdlKeywordKind::Fragment => "fragment",
        MsdlKeywordKind::Clef => "cle",
        MsdlKeywordKind::Treble => "sol",
        MsdlKeywordKind::Soprano => "soprano",
        MsdlKeywordKind::Alto => "alto",
        MsdlKeywordKind::Tenor => "tenor",
        MsdlKeywordKind::Baritone => "baryton",
        MsdlKeywordKind::Bass => "fa",
        MsdlKeywordKind::Tablature => "tablature",
        MsdlKeywordKind::Key => "armure",
        MsdlKeywordKind::Time => "metrique",
    }
}

fn french_keyword_kind_of(spelling: &str) -> Option<MsdlKeywordKind> {
    let kind = match spelling {
        "titre" => MsdlKeywordKind::Title,
        "compositeur" => MsdlKeywordKind::Composer,
        "opus" => MsdlKeywordKind::Opus,
        "hauteurs" => MsdlKeywordKind::Pitches,
        "octaves" => MsdlKeywordKind::Octaves,
        "anacrouse" => MsdlKeywordKind::Anacrusis,
        "livre" => MsdlKeywordKind::Book,
        "partition" => MsdlKeywordKind::Score,
        "groupe" => MsdlKeywordKind::PartGroup,
        "partie" => MsdlKeywordKind::Part,
        "musique" => MsdlKeywordKind::Music,
        "fragment" => MsdlKeywordKind::Fragment,
        "cle" => MsdlKeywordKind::Clef,
        "sol" => MsdlKeywordKind::Treble,
        "soprano" => MsdlKeywordKind::Soprano,
        "alto" => MsdlKeywordKind::Alto,
        "tenor" => MsdlKeywordKind::Tenor,
        "baryton" => MsdlKeywordKind::Baritone,
        "fa" => MsdlKeywordKind::Bass,
        "tablature" => MsdlKeywordKind::Tablature,
        "armure" => MsdlKeywordKind::Key,
        "metrique" => MsdlKeywordKind::Time,
        _ => return None,
    };
    Some(kind)
}

fn italian_spelling_of(kind: MsdlKeywordKind) -> &'static str {
    match kind {
        MsdlKeywordKind::Title => "titolo",
        MsdlKeywordKind::Composer => "compositore",
        MsdlKeywordKind::Opus => "opus",
        MsdlKeywordKind::Pitches => "altezze",
        MsdlKeywordKind::Octaves => "ottave",
        MsdlKeywordKind::Anacrusis => "anacrusi",
        MsdlKeywordKind::Book => "libro",
        MsdlKeywordKind::Score => "partitura",
        MsdlKeywordKind::PartGroup => "gruppo",
        MsdlKeywordKind::Part => "parte",
        MsdlKeywordKind::Music => "musica",
        MsdlKeywordKind::Fragment => "frammento",
        MsdlKeywordKind::Clef => "chiave",
        MsdlKeywordKind::Treble => "violino",
        MsdlKeywordKind::Soprano => "soprano",
        MsdlKeywordKind::Alto => "contralto",
        MsdlKeywordKind::Tenor => "tenore",
        MsdlKeywordKind::Baritone => "baritono",
        MsdlKeywordKind::Bass => "basso",
        MsdlKeywordKind::Tablature => "intavolatura",
        MsdlKeywordKind::Key => "tonalita",
        MsdlKeywordKind::Time => "tempo",
    }
}

fn italian_keyword_kind_of(spelling: &str) -> Option<MsdlKeywordKind> {
    let kind = match spelling {
        "titolo" => MsdlKeywordKind::Title,
        "compositore" => MsdlKeywordKind::Composer,
        "opus" => MsdlKeywordKind::Opus,
        "altezze" => MsdlKeywordKind::Pitches,
        "ottave" => MsdlKeywordKind::Octaves,
        "anacrusi" => MsdlKeywordKind::Anacrusis,
        "libro" => MsdlKeywordKind::Book,
        "partitura" => MsdlKeywordKind::Score,
        "gruppo" => MsdlKeywordKind::PartGroup,
        "parte" => MsdlKeywordKind::Part,
        "musica" => MsdlKeywordKind::Music,
        "frammento" => MsdlKeywordKind::Fragment,
        "chiave" => MsdlKeywordKind::Clef,
        "violino" => MsdlKeywordKind::Treble,
        "soprano" => MsdlKeywordKind::Soprano,
        "contralto" => MsdlKeywordKind::Alto,
        "tenore" => MsdlKeywordKind::Tenor,
        "baritono" => MsdlKeywordKind::Baritone,
        "basso" => MsdlKeywordKind::Bass,
        "intavolatura" => MsdlKeywordKind::Tablature,
        "tonalita" => MsdlKeywordKind::Key,
        "tempo" => MsdlKeywordKind::Time,
        _ => return None,
    };
    Some(kind)
}

// German deliberately leaves Fragment and Tablature unimplemented.
fn german_spelling_of(kind: MsdlKeywordKind) -> Option<&'static str> {
    let spelling = match kind {
        MsdlKeywordKind::Title => "titel",
        MsdlKeywordKind::Composer => "komponist",
        MsdlKeywordKind::Opus => "opus",
        MsdlKeywordKind::Pitches => "tonhoehen",
        MsdlKeywordKind::Octaves => "oktaven",
        MsdlKeywordKind::Anacrusis => "auftakt",
        MsdlKeywordKind::Book => "buch",
        MsdlKeywordKind::Score => "partitur",
        MsdlKeywordKind::PartGroup => "gruppe",
        MsdlKeywordKind::Part => "stimme",
        MsdlKeywordKind::Music => "musik",
        MsdlKeywordKind::Clef => "schluessel",
        MsdlKeywordKind::Treble => "violinschluessel",
        MsdlKeywordKind::Soprano => "sopran",
        MsdlKeywordKind::Alto => "alt",
        MsdlKeywordKind::Tenor => "tenor",
        MsdlKeywordKind::Baritone => "bariton",
        MsdlKeywordKind::Bass => "bassschluessel",
        MsdlKeywordKind::Key => "tonart",
        MsdlKeywordKind::Time => "takt",
        MsdlKeywordKind::Fragment | MsdlKeywordKind::Tablature => return None,
    };
    Some(spelling)
}

fn german_keyword_kind_of(spelling: &str) -> Option<MsdlKeywordKind> {
    let kind = match spelling {
        "titel" => MsdlKeywordKind::Title,
        "komponist" => MsdlKeywordKind::Composer,
        "opus" => MsdlKeywordKind::Opus,
        "tonhoehen" => MsdlKeywordKind::Pitches,
        "oktaven" => MsdlKeywordKind::Octaves,
        "auftakt" => MsdlKeywordKind::Anacrusis,
        "buch" => MsdlKeywordKind::Book,
        "partitur" => MsdlKeywordKind::Score,
        "gruppe" => MsdlKeywordKind::PartGroup,
        "stimme" => MsdlKeywordKind::Part,
        "musik" => MsdlKeywordKind::Music,
        "schluessel" => MsdlKeywordKind::Clef,
        "violinschluessel" => MsdlKeywordKind::Treble,
        "sopran" => MsdlKeywordKind::Soprano,
        "alt" => MsdlKeywordKind::Alto,
        "tenor" => MsdlKeywordKind::Tenor,
        "bariton" => MsdlKeywordKind::Baritone,
        "bassschluessel" => MsdlKeywordKind::Bass,
        "tonart" => MsdlKeywordKind::Key,
        "takt" => MsdlKeywordKind::Time,
        _ => return None,
    };
    Some(kind)
}
