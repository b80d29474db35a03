use crate::diagnostics::MsdlDiagnostic;
use crate::kind::{MsdlDurationKind, MsdlTokenKind, MsdlTokenKindSet};
use crate::parser::MsdlParser;

/// Octave of notes written without octave marks: the octave one below
/// the octave containing middle C.
pub(super) const BASE_OCTAVE: i32 = 3;

/// MeasuresSequence := Measure*
pub(super) fn parse_measures_sequence(p: &mut MsdlParser) {
    p.with_stoppers(
        MsdlTokenKindSet::from_kinds(&[MsdlTokenKind::TkRightBrace]),
        |p| {
            while p.check_optional_kind(MsdlTokenKind::TkBar) {
                parse_measure(p);
            }
        },
    );
}

/// Measure := '|' MeasureNumber (Note | '|||')*
fn parse_measure(p: &mut MsdlParser) {
    p.advance();
    p.with_stoppers(
        MsdlTokenKindSet::from_kinds(&[MsdlTokenKind::TkBar, MsdlTokenKind::TkRightBrace]),
        |p| {
            if !p.check_mandatory_kind(MsdlTokenKind::TkInteger, "measure number") {
                return;
            }
            let number = p.current_token().integer().unwrap_or_default();
            let position = p.current_token().position;
            p.builder().create_measure(number, position);
            p.advance();

            loop {
                match p.current_kind() {
                    MsdlTokenKind::TkName => parse_note(p),
                    MsdlTokenKind::TkFinalBar => {
                        p.builder().set_final_barline();
                        p.advance();
                    }
                    MsdlTokenKind::TkBar
                    | MsdlTokenKind::TkRightBrace
                    | MsdlTokenKind::TkEof => break,
                    _ => {
                        let expected = MsdlTokenKindSet::from_kinds(&[
                            MsdlTokenKind::TkName,
                            MsdlTokenKind::TkFinalBar,
                            MsdlTokenKind::TkBar,
                            MsdlTokenKind::TkRightBrace,
                            MsdlTokenKind::TkEof,
                        ]);
                        if !p.check_mandatory_set(expected, "measure") {
                            break;
                        }
                    }
                }
            }
        },
    );
}

/// Note := Name OctaveIndication NoteNotesDuration?
fn parse_note(p: &mut MsdlParser) {
    let pitch_name = p.current_token().string().unwrap_or("").to_string();
    let position = p.current_token().position;
    p.advance();

    let octave = parse_octave_indication(p);
    let (duration, dots) = parse_note_duration(p);

    let sounding_whole_notes = duration.whole_notes_with_dots(dots);
    let display_whole_notes = duration.whole_notes();
    p.builder().append_note_to_current_measure(
        &pitch_name,
        octave,
        sounding_whole_notes,
        display_whole_notes,
        dots,
        position,
    );
}

/// OctaveIndication := (',' | '\'')*
///
/// Commas go down, quotes go up; mixing them in one indication is
/// reported but parsing continues with the arithmetic below.
fn parse_octave_indication(p: &mut MsdlParser) -> i32 {
    let mut commas = 0u32;
    let mut quotes = 0u32;
    loop {
        match p.current_kind() {
            MsdlTokenKind::TkComma => {
                commas += 1;
                p.advance();
            }
            MsdlTokenKind::TkQuote => {
                quotes += 1;
                p.advance();
            }
            _ => break,
        }
    }

    if commas > 0 && quotes > 0 {
        p.report(MsdlDiagnostic::mixed_commas_and_quotes_in_octave_indication(
            p.current_token().range,
        ));
        p.mark_syntactically_incorrect();
    }

    octave_from_indication(commas, quotes)
}

pub(super) fn octave_from_indication(commas: u32, quotes: u32) -> i32 {
    if commas > 0 {
        BASE_OCTAVE - commas as i32
    } else if quotes > 0 {
        BASE_OCTAVE + quotes as i32
    } else {
        BASE_OCTAVE
    }
}

/// NoteNotesDuration := (integer | Name) Dot*
///
/// An integer in duration position is always consumed (an unmapped one
/// is malformed and falls back to the unknown sentinel). A name is
/// consumed only when the duration-name table knows it; any other name
/// starts the next note. Notes without a duration inherit the last
/// explicit one.
fn parse_note_duration(p: &mut MsdlParser) -> (MsdlDurationKind, u32) {
    let mut duration = None;

    match p.current_kind() {
        MsdlTokenKind::TkInteger => {
            let value = p.current_token().integer().unwrap_or_default();
            let range = p.current_token().range;
            let kind = match MsdlDurationKind::from_integer(value) {
                Some(kind) => kind,
                None => {
                    p.report(MsdlDiagnostic::malformed_note_duration(
                        &value.to_string(),
                        range,
                    ));
                    p.mark_syntactically_incorrect();
                    MsdlDurationKind::Unknown
                }
            };
            p.advance();
            duration = Some(kind);
        }
        MsdlTokenKind::TkName => {
            let name_duration = p
                .current_token()
                .string()
                .and_then(MsdlDurationKind::from_name);
            if let Some(kind) = name_duration {
                p.advance();
                duration = Some(kind);
            }
        }
        _ => {}
    }

    match duration {
        Some(kind) => {
            let mut dots = 0u32;
            while p.check_optional_kind(MsdlTokenKind::TkDot) {
                dots += 1;
                p.advance();
            }
            p.set_last_duration(kind, dots);
            (kind, dots)
        }
        None => p.last_duration(),
    }
}
