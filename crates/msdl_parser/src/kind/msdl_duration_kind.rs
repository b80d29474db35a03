use num_rational::Rational64;

/// Note duration kinds, from maxima down to the 256th note. `Unknown`
/// is the sentinel a malformed duration falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsdlDurationKind {
    Maxima,
    Long,
    Breve,
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    HundredTwentyEighth,
    TwoHundredFiftySixth,
    Unknown,
}

impl MsdlDurationKind {
    /// Duration written as an integer: 1 is a whole note, 4 a quarter,
    /// 8 an eighth, and so on down to 256.
    pub fn from_integer(value: i64) -> Option<MsdlDurationKind> {
        let kind = match value {
            1 => MsdlDurationKind::Whole,
            2 => MsdlDurationKind::Half,
            4 => MsdlDurationKind::Quarter,
            8 => MsdlDurationKind::Eighth,
            16 => MsdlDurationKind::Sixteenth,
            32 => MsdlDurationKind::ThirtySecond,
            64 => MsdlDurationKind::SixtyFourth,
            128 => MsdlDurationKind::HundredTwentyEighth,
            256 => MsdlDurationKind::TwoHundredFiftySixth,
            _ => return None,
        };
        Some(kind)
    }

    /// Duration written as a name; covers the values that have no
    /// integer spelling plus the spoken forms of the common ones.
    pub fn from_name(name: &str) -> Option<MsdlDurationKind> {
        let kind = match name {
            "maxima" => MsdlDurationKind::Maxima,
            "long" => MsdlDurationKind::Long,
            "breve" => MsdlDurationKind::Breve,
            "whole" => MsdlDurationKind::Whole,
            "half" => MsdlDurationKind::Half,
            _ => return None,
        };
        Some(kind)
    }

    /// The notated value in whole notes, ignoring any dots. This is the
    /// display duration: the idealized shape on the page.
    pub fn whole_notes(self) -> Rational64 {
        match self {
            MsdlDurationKind::Maxima => Rational64::from_integer(8),
            MsdlDurationKind::Long => Rational64::from_integer(4),
            MsdlDurationKind::Breve => Rational64::from_integer(2),
            MsdlDurationKind::Whole => Rational64::from_integer(1),
            MsdlDurationKind::Half => Rational64::new(1, 2),
            MsdlDurationKind::Quarter => Rational64::new(1, 4),
            MsdlDurationKind::Eighth => Rational64::new(1, 8),
            MsdlDurationKind::Sixteenth => Rational64::new(1, 16),
            MsdlDurationKind::ThirtySecond => Rational64::new(1, 32),
            MsdlDurationKind::SixtyFourth => Rational64::new(1, 64),
            MsdlDurationKind::HundredTwentyEighth => Rational64::new(1, 128),
            MsdlDurationKind::TwoHundredFiftySixth => Rational64::new(1, 256),
            MsdlDurationKind::Unknown => Rational64::from_integer(0),
        }
    }

    /// The sounding value in whole notes: every dot adds half of the
    /// previous term, i.e. `base * (2 - (1/2)^dots)`.
    pub fn whole_notes_with_dots(self, dots: u32) -> Rational64 {
        let base = self.whole_notes();
        let mut value = base;
        let mut term = base;
        for _ in 0..dots {
            term /= 2;
            value += term;
        }
        value
    }
}
