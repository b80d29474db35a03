mod measure;
mod structure;
mod test;

use crate::diagnostics::MsdlDiagnostic;
use crate::kind::{MsdlTokenKind, MsdlTokenKindSet};
use crate::parser::MsdlParser;

use structure::{parse_structure, structure_first_set};

/// Specification := Identification? Pitches? Anacrusis? Structure
///
/// The whole specification parses under an end-of-input stopper, so
/// every skip loop below it has a floor to resynchronize on.
pub(crate) fn parse_specification(p: &mut MsdlParser) {
    p.with_stoppers(
        MsdlTokenKindSet::from_kinds(&[MsdlTokenKind::TkEof]),
        |p| {
            parse_identification(p);
            parse_pitches(p);
            parse_anacrusis(p);
            parse_structure(p);
            p.check_mandatory_kind(MsdlTokenKind::TkEof, "specification");
        },
    );
}

fn identification_first_set() -> MsdlTokenKindSet {
    MsdlTokenKindSet::from_kinds(&[
        MsdlTokenKind::TkTitle,
        MsdlTokenKind::TkComposer,
        MsdlTokenKind::TkOpus,
    ])
}

/// What may legally follow any single identification element.
fn after_identification_set() -> MsdlTokenKindSet {
    identification_first_set()
        + MsdlTokenKindSet::from_kinds(&[MsdlTokenKind::TkPitches, MsdlTokenKind::TkAnacrusis])
        + structure_first_set()
}

fn after_pitches_set() -> MsdlTokenKindSet {
    MsdlTokenKindSet::from_kinds(&[MsdlTokenKind::TkAnacrusis]) + structure_first_set()
}

/// Identification := (Title | Composer | Opus)*
fn parse_identification(p: &mut MsdlParser) {
    while p.check_optional_set(identification_first_set()) {
        match p.current_kind() {
            MsdlTokenKind::TkTitle => parse_title(p),
            MsdlTokenKind::TkComposer => parse_composer(p),
            MsdlTokenKind::TkOpus => parse_opus(p),
            _ => break,
        }
    }
}

/// Title := 'title' String
fn parse_title(p: &mut MsdlParser) {
    p.advance();
    p.with_stoppers(after_identification_set(), |p| {
        if p.current_kind() != MsdlTokenKind::TkString {
            p.report(MsdlDiagnostic::string_expected_as_title(
                p.current_token().range,
            ));
        }
        if p.check_mandatory_kind(MsdlTokenKind::TkString, "title") {
            let title = p.current_token().string().unwrap_or("").to_string();
            let range = p.current_token().range;
            if p.builder().set_title(&title).is_some() {
                p.report(MsdlDiagnostic::multiple_identifications("title", range));
            }
            p.advance();
        }
    });
}

/// Composer := 'composer' String
fn parse_composer(p: &mut MsdlParser) {
    p.advance();
    p.with_stoppers(after_identification_set(), |p| {
        if p.current_kind() != MsdlTokenKind::TkString {
            p.report(MsdlDiagnostic::string_expected_as_composer(
                p.current_token().range,
            ));
        }
        if p.check_mandatory_kind(MsdlTokenKind::TkString, "composer") {
            let composer = p.current_token().string().unwrap_or("").to_string();
            p.builder().append_composer(&composer);
            p.advance();
        }
    });
}

/// Opus := 'opus' String
fn parse_opus(p: &mut MsdlParser) {
    p.advance();
    p.with_stoppers(after_identification_set(), |p| {
        if p.current_kind() != MsdlTokenKind::TkString {
            p.report(MsdlDiagnostic::string_expected_as_opus(
                p.current_token().range,
            ));
        }
        if p.check_mandatory_kind(MsdlTokenKind::TkString, "opus") {
            let opus = p.current_token().string().unwrap_or("").to_string();
            let range = p.current_token().range;
            if p.builder().set_opus(&opus).is_some() {
                p.report(MsdlDiagnostic::multiple_identifications("opus", range));
            }
            p.advance();
        }
    });
}

/// Pitches := 'pitches' Name — selects the pitch-name language the
/// notes are spelled in.
fn parse_pitches(p: &mut MsdlParser) {
    if !p.check_optional_kind(MsdlTokenKind::TkPitches) {
        return;
    }
    p.advance();
    p.with_stoppers(after_pitches_set(), |p| {
        if p.check_mandatory_kind(MsdlTokenKind::TkName, "pitches") {
            let name = p.current_token().string().unwrap_or("").to_string();
            p.set_pitches_language(&name);
            p.advance();
        }
    });
}

/// Anacrusis := 'anacrusis'
fn parse_anacrusis(p: &mut MsdlParser) {
    if p.check_optional_kind(MsdlTokenKind::TkAnacrusis) {
        p.builder().set_anacrusis();
        p.advance();
    }
}
