use num_rational::Rational64;
use serde::{Deserialize, Serialize};

use crate::text::MsdlPosition;

/// The score skeleton built as a side effect of parsing: a Book holds
/// Scores, down the chain to Notes. Downstream passes lower this into
/// concrete notation formats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsdlBook {
    pub scores: Vec<MsdlScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsdlScore {
    pub identification: Option<MsdlIdentification>,
    pub has_anacrusis: bool,
    pub part_groups: Vec<MsdlPartGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsdlIdentification {
    pub title: Option<String>,
    pub composers: Vec<String>,
    pub opus: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsdlPartGroup {
    pub parts: Vec<MsdlPart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsdlPart {
    pub staves: Vec<MsdlStaff>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsdlStaff {
    pub voices: Vec<MsdlVoice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsdlVoice {
    pub measures: Vec<MsdlMeasure>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsdlMeasure {
    pub number: i64,
    pub position: MsdlPosition,
    pub notes: Vec<MsdlNote>,
    pub has_final_barline: bool,
}

impl MsdlMeasure {
    pub fn new(number: i64, position: MsdlPosition) -> Self {
        MsdlMeasure {
            number,
            position,
            notes: Vec::new(),
            has_final_barline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsdlNote {
    pub pitch_name: String,
    pub octave: i32,
    /// Performed value in whole notes, dots included.
    pub sounding_whole_notes: Rational64,
    /// Notated value in whole notes; dots deliberately excluded.
    pub display_whole_notes: Rational64,
    pub dots: u32,
    pub position: MsdlPosition,
}
