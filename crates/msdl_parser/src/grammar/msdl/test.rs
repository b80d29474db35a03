#[cfg(test)]
mod tests {
    use num_rational::Rational64;

    use crate::diagnostics::MsdlDiagnosticKind;
    use crate::grammar::parse_specification;
    use crate::kind::MsdlKeywordsLanguage;
    use crate::parser::{MsdlParseResult, MsdlParser, ParserConfig};
    use crate::score::{MsdlBook, MsdlVoice};

    fn parse(text: &str) -> MsdlParseResult {
        MsdlParser::parse(text, ParserConfig::default())
    }

    fn diagnostic_count(result: &MsdlParseResult, kind: MsdlDiagnosticKind) -> usize {
        result
            .diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.kind == kind)
            .count()
    }

    fn first_voice(book: &MsdlBook) -> &MsdlVoice {
        &book.scores[0].part_groups[0].parts[0].staves[0].voices[0]
    }

    #[test]
    fn test_full_specification() {
        let result = parse(r#"title "A" composer "B" music { | 1 c' 4 | 2 d 8 . }"#);

        assert!(result.lexically_correct);
        assert!(result.syntactically_correct);

        let book = result.book.expect("book");
        assert_eq!(book.scores.len(), 1);

        let identification = book.scores[0].identification.as_ref().expect("identification");
        assert_eq!(identification.title.as_deref(), Some("A"));
        assert_eq!(identification.composers, vec!["B"]);

        assert_eq!(book.scores[0].part_groups.len(), 1);
        assert_eq!(book.scores[0].part_groups[0].parts.len(), 1);

        let voice = first_voice(&book);
        assert_eq!(voice.measures.len(), 2);

        let first = &voice.measures[0];
        assert_eq!(first.number, 1);
        assert_eq!(first.notes.len(), 1);
        let note = &first.notes[0];
        assert_eq!(note.pitch_name, "c");
        assert_eq!(note.octave, 4);
        assert_eq!(note.sounding_whole_notes, Rational64::new(1, 4));
        assert_eq!(note.display_whole_notes, Rational64::new(1, 4));
        assert_eq!(note.dots, 0);

        let second = &voice.measures[1];
        assert_eq!(second.number, 2);
        let note = &second.notes[0];
        assert_eq!(note.pitch_name, "d");
        assert_eq!(note.octave, 3);
        assert_eq!(note.sounding_whole_notes, Rational64::new(3, 16));
        assert_eq!(note.display_whole_notes, Rational64::new(1, 8));
        assert_eq!(note.dots, 1);
    }

    #[test]
    fn test_error_recovery_keeps_both_measures() {
        let result = parse("music { | 1 c @ 4 | 2 }");

        assert_eq!(
            diagnostic_count(&result, MsdlDiagnosticKind::IllegalCharacter),
            1
        );
        assert!(diagnostic_count(&result, MsdlDiagnosticKind::IgnoringToken) >= 1);
        assert!(!result.syntactically_correct);
        assert!(!result.lexically_correct);

        let book = result.book.expect("book");
        let voice = first_voice(&book);
        assert_eq!(voice.measures.len(), 2);
        assert_eq!(voice.measures[0].number, 1);
        assert_eq!(voice.measures[1].number, 2);
    }

    #[test]
    fn test_stopper_stack_is_balanced_on_every_path() {
        for text in [
            "",
            "music { | 1 c 4 }",
            "music { | 1 c @ 4 | 2 }",
            "title music { | }",
            "book score part ( }",
            "music { | 1 c",
        ] {
            let mut parser = MsdlParser::new(text, ParserConfig::default());
            parser.advance();
            parse_specification(&mut parser);
            assert_eq!(parser.stopper_depth(), 0, "input: {text:?}");
        }
    }

    #[test]
    fn test_empty_input_is_correct_and_builds_nothing() {
        let result = parse("");
        assert!(result.book.is_none());
        assert!(result.lexically_correct);
        assert!(result.syntactically_correct);
        assert_eq!(
            diagnostic_count(&result, MsdlDiagnosticKind::InputIsLexicallyCorrect),
            1
        );
        assert_eq!(
            diagnostic_count(&result, MsdlDiagnosticKind::InputIsSyntacticallyCorrect),
            1
        );
    }

    #[test]
    fn test_multiple_titles_are_reported_and_overwrite() {
        let result = parse(r#"title "first" title "second""#);
        assert_eq!(
            diagnostic_count(&result, MsdlDiagnosticKind::MultipleIdentifications),
            1
        );
        let book = result.book.expect("book");
        let identification = book.scores[0].identification.as_ref().expect("identification");
        assert_eq!(identification.title.as_deref(), Some("second"));
    }

    #[test]
    fn test_title_without_string_recovers_at_structure() {
        let result = parse(r#"title music { | 1 c 4 }"#);
        assert!(diagnostic_count(&result, MsdlDiagnosticKind::StringExpectedAsTitle) == 1);
        assert!(diagnostic_count(&result, MsdlDiagnosticKind::UnexpectedToken) >= 1);
        assert!(!result.syntactically_correct);

        // 'music' was not consumed by the recovery, so the measure is built
        let book = result.book.expect("book");
        assert_eq!(first_voice(&book).measures.len(), 1);
    }

    #[test]
    fn test_structure_nesting_creates_one_of_each() {
        let result = parse("book score partgroup part music { | 1 c 4 }");
        assert!(result.syntactically_correct);

        let book = result.book.expect("book");
        assert_eq!(book.scores.len(), 1);
        assert_eq!(book.scores[0].part_groups.len(), 1);
        assert_eq!(book.scores[0].part_groups[0].parts.len(), 1);
        assert_eq!(book.scores[0].part_groups[0].parts[0].staves.len(), 1);
        assert_eq!(first_voice(&book).measures.len(), 1);
    }

    #[test]
    fn test_pitches_and_anacrusis() {
        let mut parser = MsdlParser::new(
            "pitches nederlands anacrusis music { | 1 c 4 }",
            ParserConfig::default(),
        );
        parser.advance();
        parse_specification(&mut parser);
        assert_eq!(parser.pitches_language(), Some("nederlands"));
        assert!(parser.is_source_syntactically_correct());

        let result = parser.finish();
        let book = result.book.expect("book");
        assert!(book.scores[0].has_anacrusis);
    }

    #[test]
    fn test_mixed_octave_marks_are_reported_but_parsed() {
        let result = parse("music { | 1 c ,' 4 }");
        assert_eq!(
            diagnostic_count(
                &result,
                MsdlDiagnosticKind::MixedCommasAndQuotesInOctaveIndication
            ),
            1
        );
        assert!(!result.syntactically_correct);

        let book = result.book.expect("book");
        let note = &first_voice(&book).measures[0].notes[0];
        // commas win in the arithmetic
        assert_eq!(note.octave, 2);
    }

    #[test]
    fn test_octave_marks() {
        let result = parse("music { | 1 c 4 d ,, 4 e '' 4 }");
        let book = result.book.expect("book");
        let notes = &first_voice(&book).measures[0].notes;
        assert_eq!(notes[0].octave, 3);
        assert_eq!(notes[1].octave, 1);
        assert_eq!(notes[2].octave, 5);
    }

    #[test]
    fn test_malformed_integer_duration_uses_the_unknown_sentinel() {
        let result = parse("music { | 1 c 5 }");
        assert_eq!(
            diagnostic_count(&result, MsdlDiagnosticKind::MalformedNoteDuration),
            1
        );
        assert!(!result.syntactically_correct);

        let book = result.book.expect("book");
        let note = &first_voice(&book).measures[0].notes[0];
        assert_eq!(note.sounding_whole_notes, Rational64::from_integer(0));
    }

    #[test]
    fn test_duration_names() {
        let result = parse("music { | 1 c breve . }");
        assert!(result.syntactically_correct);

        let book = result.book.expect("book");
        let note = &first_voice(&book).measures[0].notes[0];
        assert_eq!(note.display_whole_notes, Rational64::from_integer(2));
        assert_eq!(note.sounding_whole_notes, Rational64::from_integer(3));
        assert_eq!(note.dots, 1);
    }

    #[test]
    fn test_duration_less_notes_inherit_the_last_duration() {
        let result = parse("music { | 1 c 8 d e }");
        assert!(result.syntactically_correct);

        let book = result.book.expect("book");
        let notes = &first_voice(&book).measures[0].notes;
        assert_eq!(notes.len(), 3);
        for note in notes {
            assert_eq!(note.sounding_whole_notes, Rational64::new(1, 8));
        }
    }

    #[test]
    fn test_final_barline_is_recorded() {
        let result = parse("music { | 1 c 4 ||| }");
        let book = result.book.expect("book");
        assert!(first_voice(&book).measures[0].has_final_barline);
    }

    #[test]
    fn test_trailing_garbage_is_skipped_with_diagnostics() {
        let result = parse("music { | 1 c 4 } 42");
        assert!(!result.syntactically_correct);
        assert!(diagnostic_count(&result, MsdlDiagnosticKind::IgnoringToken) >= 1);

        let book = result.book.expect("book");
        assert_eq!(first_voice(&book).measures.len(), 1);
    }

    #[test]
    fn test_french_keywords_language() {
        let result = MsdlParser::parse(
            r#"titre "A" musique { | 1 c 4 }"#,
            ParserConfig::new(MsdlKeywordsLanguage::French),
        );
        assert!(result.syntactically_correct);

        let book = result.book.expect("book");
        let identification = book.scores[0].identification.as_ref().expect("identification");
        assert_eq!(identification.title.as_deref(), Some("A"));
        assert_eq!(first_voice(&book).measures.len(), 1);
    }

    #[test]
    fn test_reserved_keywords_take_the_recovery_path() {
        // 'clef' is lexed as a keyword but no rule consumes it yet
        let result = parse("clef treble music { | 1 c 4 }");
        assert!(!result.syntactically_correct);
        assert!(diagnostic_count(&result, MsdlDiagnosticKind::UnexpectedToken) >= 1);

        let book = result.book.expect("book");
        assert_eq!(first_voice(&book).measures.len(), 1);
    }

    #[test]
    fn test_unclosed_music_block_still_returns() {
        let result = parse("music { | 1 c 4");
        assert!(!result.syntactically_correct);
        let book = result.book.expect("book");
        assert_eq!(first_voice(&book).measures.len(), 1);
    }

    #[test]
    fn test_score_serializes() {
        let result = parse(r#"title "A" music { | 1 c 4 }"#);
        let book = result.book.expect("book");
        let value = serde_json::to_value(&book).expect("json");
        assert_eq!(value["scores"][0]["identification"]["title"], "A");
        assert_eq!(
            value["scores"][0]["part_groups"][0]["parts"][0]["staves"][0]["voices"][0]["measures"]
                [0]["number"],
            1
        );
    }
}
