use super::msdl_token_kind::MsdlTokenKind;

/// The language-independent identity of an MSDL keyword, distinct from
/// its spelling in any one keywords language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum MsdlKeywordKind {
    Title,
    Composer,
    Opus,
    Pitches,
    Octaves,
    Anacrusis,
    Book,
    Score,
    PartGroup,
    Part,
    Music,
    Fragment,
    Clef,
    Treble,
    Soprano,
    Alto,
    Tenor,
    Baritone,
    Bass,
    Tablature,
    Key,
    Time,
}

impl MsdlKeywordKind {
    pub const ALL: [MsdlKeywordKind; 22] = [
        MsdlKeywordKind::Title,
        MsdlKeywordKind::Composer,
        MsdlKeywordKind::Opus,
        MsdlKeywordKind::Pitches,
        MsdlKeywordKind::Octaves,
        MsdlKeywordKind::Anacrusis,
        MsdlKeywordKind::Book,
        MsdlKeywordKind::Score,
        MsdlKeywordKind::PartGroup,
        MsdlKeywordKind::Part,
        MsdlKeywordKind::Music,
        MsdlKeywordKind::Fragment,
        MsdlKeywordKind::Clef,
        MsdlKeywordKind::Treble,
        MsdlKeywordKind::Soprano,
        MsdlKeywordKind::Alto,
        MsdlKeywordKind::Tenor,
        MsdlKeywordKind::Baritone,
        MsdlKeywordKind::Bass,
        MsdlKeywordKind::Tablature,
        MsdlKeywordKind::Key,
        MsdlKeywordKind::Time,
    ];

    pub fn token_kind(self) -> MsdlTokenKind {
        match self {
            MsdlKeywordKind::Title => MsdlTokenKind::TkTitle,
            MsdlKeywordKind::Composer => MsdlTokenKind::TkComposer,
            MsdlKeywordKind::Opus => MsdlTokenKind::TkOpus,
            MsdlKeywordKind::Pitches => MsdlTokenKind::TkPitches,
            MsdlKeywordKind::Octaves => MsdlTokenKind::TkOctaves,
            MsdlKeywordKind::Anacrusis => MsdlTokenKind::TkAnacrusis,
            MsdlKeywordKind::Book => MsdlTokenKind::TkBook,
            MsdlKeywordKind::Score => MsdlTokenKind::TkScore,
            MsdlKeywordKind::PartGroup => MsdlTokenKind::TkPartGroup,
            MsdlKeywordKind::Part => MsdlTokenKind::TkPart,
            MsdlKeywordKind::Music => MsdlTokenKind::TkMusic,
            MsdlKeywordKind::Fragment => MsdlTokenKind::TkFragment,
            MsdlKeywordKind::Clef => MsdlTokenKind::TkClef,
            MsdlKeywordKind::Treble => MsdlTokenKind::TkTreble,
            MsdlKeywordKind::Soprano => MsdlTokenKind::TkSoprano,
            MsdlKeywordKind::Alto => MsdlTokenKind::TkAlto,
            MsdlKeywordKind::Tenor => MsdlTokenKind::TkTenor,
            MsdlKeywordKind::Baritone => MsdlTokenKind::TkBaritone,
            MsdlKeywordKind::Bass => MsdlTokenKind::TkBass,
            MsdlKeywordKind::Tablature => MsdlTokenKind::TkTablature,
            MsdlKeywordKind::Key => MsdlTokenKind::TkKey,
            MsdlKeywordKind::Time => MsdlTokenKind::TkTime,
        }
    }
}

impl From<MsdlKeywordKind> for MsdlTokenKind {
    fn from(kind: MsdlKeywordKind) -> Self {
        kind.token_kind()
    }
}
