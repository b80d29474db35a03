use num_rational::Rational64;

use crate::text::MsdlPosition;

use super::tree::{
    MsdlBook, MsdlIdentification, MsdlMeasure, MsdlNote, MsdlPart, MsdlPartGroup, MsdlScore,
    MsdlStaff, MsdlVoice,
};

/// Builds the score skeleton as the parser recognizes constructs.
///
/// Every `create_*_if_needed` is idempotent: it ensures all ancestors
/// exist (creating them depth-first where missing), then creates the
/// entity itself only if there is no current one. The builder keeps one
/// "current" cursor per level; the parser never destroys a handle.
#[derive(Debug, Default)]
pub struct ScoreBuilder {
    book: Option<MsdlBook>,
    current_score: Option<usize>,
    current_part_group: Option<usize>,
    current_part: Option<usize>,
    current_staff: Option<usize>,
    current_voice: Option<usize>,
    current_measure: Option<usize>,
    anacrusis: bool,
}

impl ScoreBuilder {
    pub fn new() -> Self {
        ScoreBuilder::default()
    }

    /// Records that the piece opens with an anacrusis; applied to the
    /// score when it is created (the keyword precedes the structure).
    pub fn set_anacrusis(&mut self) {
        self.anacrusis = true;
        if let Some(score) = self.current_score_mut() {
            score.has_anacrusis = true;
        }
    }

    pub fn create_book_if_needed(&mut self) {
        if self.book.is_none() {
            self.book = Some(MsdlBook::default());
        }
    }

    pub fn create_score_if_needed(&mut self) {
        self.create_book_if_needed();
        if self.current_score.is_some() {
            return;
        }
        if let Some(book) = &mut self.book {
            book.scores.push(MsdlScore {
                has_anacrusis: self.anacrusis,
                ..MsdlScore::default()
            });
            self.current_score = Some(book.scores.len() - 1);
        }
    }

    pub fn create_identification_if_needed(&mut self) {
        self.create_score_if_needed();
        if let Some(score) = self.current_score_mut() {
            if score.identification.is_none() {
                score.identification = Some(MsdlIdentification::default());
            }
        }
    }

    /// Sets the title, returning the replaced value if one was already
    /// present (the caller reports the duplication).
    pub fn set_title(&mut self, title: &str) -> Option<String> {
        self.create_identification_if_needed();
        self.identification_mut()
            .and_then(|identification| identification.title.replace(title.to_string()))
    }

    pub fn append_composer(&mut self, composer: &str) {
        self.create_identification_if_needed();
        if let Some(identification) = self.identification_mut() {
            identification.composers.push(composer.to_string());
        }
    }

    /// Sets the opus, returning the replaced value if one was already
    /// present.
    pub fn set_opus(&mut self, opus: &str) -> Option<String> {
        self.create_identification_if_needed();
        self.identification_mut()
            .and_then(|identification| identification.opus.replace(opus.to_string()))
    }

    pub fn create_part_group_if_needed(&mut self) {
        self.create_score_if_needed();
        if self.current_part_group.is_some() {
            return;
        }
        if let Some(score) = self.current_score_mut() {
            score.part_groups.push(MsdlPartGroup::default());
            self.current_part_group = Some(score.part_groups.len() - 1);
        }
    }

    pub fn create_part_if_needed(&mut self) {
        self.create_part_group_if_needed();
        if self.current_part.is_some() {
            return;
        }
        if let Some(part_group) = self.current_part_group_mut() {
            part_group.parts.push(MsdlPart::default());
            self.current_part = Some(part_group.parts.len() - 1);
        }
    }

    pub fn create_staff_if_needed(&mut self) {
        self.create_part_if_needed();
        if self.current_staff.is_some() {
            return;
        }
        if let Some(part) = self.current_part_mut() {
            part.staves.push(MsdlStaff::default());
            self.current_staff = Some(part.staves.len() - 1);
        }
    }

    pub fn create_voice_if_needed(&mut self) {
        self.create_staff_if_needed();
        if self.current_voice.is_some() {
            return;
        }
        if let Some(staff) = self.current_staff_mut() {
            staff.voices.push(MsdlVoice::default());
            self.current_voice = Some(staff.voices.len() - 1);
        }
    }

    /// Creates a new measure with the given number, ensuring the whole
    /// voice chain exists first. Unlike the `*_if_needed` operations,
    /// every call appends a fresh measure.
    pub fn create_measure(&mut self, number: i64, position: MsdlPosition) {
        self.create_voice_if_needed();
        if let Some(voice) = self.current_voice_mut() {
            voice.measures.push(MsdlMeasure::new(number, position));
            self.current_measure = Some(voice.measures.len() - 1);
        }
    }

    pub fn set_final_barline(&mut self) {
        if let Some(measure) = self.current_measure_mut() {
            measure.has_final_barline = true;
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn append_note_to_current_measure(
        &mut self,
        pitch_name: &str,
        octave: i32,
        sounding_whole_notes: Rational64,
        display_whole_notes: Rational64,
        dots: u32,
        position: MsdlPosition,
    ) {
        if self.current_measure.is_none() {
            self.create_measure(1, position);
        }
        if let Some(measure) = self.current_measure_mut() {
            measure.notes.push(MsdlNote {
                pitch_name: pitch_name.to_string(),
                octave,
                sounding_whole_notes,
                display_whole_notes,
                dots,
                position,
            });
        }
    }

    pub fn finish(self) -> Option<MsdlBook> {
        self.book
    }

    fn current_score_mut(&mut self) -> Option<&mut MsdlScore> {
        let index = self.current_score?;
        self.book.as_mut()?.scores.get_mut(index)
    }

    fn identification_mut(&mut self) -> Option<&mut MsdlIdentification> {
        self.current_score_mut()?.identification.as_mut()
    }

    fn current_part_group_mut(&mut self) -> Option<&mut MsdlPartGroup> {
        let index = self.current_part_group?;
        self.current_score_mut()?.part_groups.get_mut(index)
    }

    fn current_part_mut(&mut self) -> Option<&mut MsdlPart> {
        let index = self.current_part?;
        self.current_part_group_mut()?.parts.get_mut(index)
    }

    fn current_staff_mut(&mut self) -> Option<&mut MsdlStaff> {
        let index = self.current_staff?;
        self.current_part_mut()?.staves.get_mut(index)
    }

    fn current_voice_mut(&mut self) -> Option<&mut MsdlVoice> {
        let index = self.current_voice?;
        self.current_staff_mut()?.voices.get_mut(index)
    }

    fn current_measure_mut(&mut self) -> Option<&mut MsdlMeasure> {
        let index = self.current_measure?;
        self.current_voice_mut()?.measures.get_mut(index)
    }
}
