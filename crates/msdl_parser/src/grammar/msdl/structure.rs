use crate::kind::{MsdlTokenKind, MsdlTokenKindSet};
use crate::parser::MsdlParser;

use super::measure::parse_measures_sequence;

pub(super) fn structure_first_set() -> MsdlTokenKindSet {
    MsdlTokenKindSet::from_kinds(&[
        MsdlTokenKind::TkBook,
        MsdlTokenKind::TkScore,
        MsdlTokenKind::TkPartGroup,
        MsdlTokenKind::TkPart,
        MsdlTokenKind::TkMusic,
    ])
}

/// Structure := (Book | Score | PartGroup | Part | Music)*
pub(super) fn parse_structure(p: &mut MsdlParser) {
    loop {
        match p.current_kind() {
            MsdlTokenKind::TkBook => parse_book(p),
            MsdlTokenKind::TkScore => parse_score(p),
            MsdlTokenKind::TkPartGroup => parse_part_group(p),
            MsdlTokenKind::TkPart => parse_part(p),
            MsdlTokenKind::TkMusic => parse_music(p),
            MsdlTokenKind::TkEof => break,
            _ => {
                let expected =
                    structure_first_set() + MsdlTokenKindSet::from_kinds(&[MsdlTokenKind::TkEof]);
                if !p.check_mandatory_set(expected, "structure") {
                    break;
                }
            }
        }
    }
}

/// Book := 'book' (Score | PartGroup | Part | Music)*
fn parse_book(p: &mut MsdlParser) {
    p.advance();
    p.builder().create_book_if_needed();
    p.with_stoppers(structure_first_set(), |p| loop {
        match p.current_kind() {
            MsdlTokenKind::TkScore => parse_score(p),
            MsdlTokenKind::TkPartGroup => parse_part_group(p),
            MsdlTokenKind::TkPart => parse_part(p),
            MsdlTokenKind::TkMusic => parse_music(p),
            _ => break,
        }
    });
}

/// Score := 'score' (PartGroup | Part | Music)*
fn parse_score(p: &mut MsdlParser) {
    p.advance();
    p.builder().create_score_if_needed();
    p.with_stoppers(structure_first_set(), |p| loop {
        match p.current_kind() {
            MsdlTokenKind::TkPartGroup => parse_part_group(p),
            MsdlTokenKind::TkPart => parse_part(p),
            MsdlTokenKind::TkMusic => parse_music(p),
            _ => break,
        }
    });
}

/// PartGroup := 'partgroup' (Part | Music)*
fn parse_part_group(p: &mut MsdlParser) {
    p.advance();
    p.builder().create_part_group_if_needed();
    p.with_stoppers(structure_first_set(), |p| loop {
        match p.current_kind() {
            MsdlTokenKind::TkPart => parse_part(p),
            MsdlTokenKind::TkMusic => parse_music(p),
            _ => break,
        }
    });
}

/// Part := 'part' Music*
fn parse_part(p: &mut MsdlParser) {
    p.advance();
    p.builder().create_part_if_needed();
    p.with_stoppers(structure_first_set(), |p| {
        while p.check_optional_kind(MsdlTokenKind::TkMusic) {
            parse_music(p);
        }
    });
}

/// Music := 'music' '{' MeasuresSequence? '}'
fn parse_music(p: &mut MsdlParser) {
    p.advance();
    p.with_stoppers(structure_first_set(), |p| {
        if !p.check_mandatory_kind(MsdlTokenKind::TkLeftBrace, "music") {
            return;
        }
        p.advance();
        parse_measures_sequence(p);
        if p.check_mandatory_kind(MsdlTokenKind::TkRightBrace, "music") {
            p.advance();
        }
    });
}
