mod builder;
mod tree;

pub use builder::ScoreBuilder;
pub use tree::{
    MsdlBook, MsdlIdentification, MsdlMeasure, MsdlNote, MsdlPart, MsdlPartGroup, MsdlScore,
    MsdlStaff, MsdlVoice,
};
