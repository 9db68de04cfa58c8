use super::{Location, SourceFile, Span};

#[test]
fn test_get_line_byte_positions() {
    let text = "let\nx\r\n=\r5;";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..4, 4..7, 7..9, 9..11]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "let five = 5;";
    let source_file = SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
}

#[test]
fn test_empty_mapped_file() {
    let source_file = SourceFile::temp("").unwrap();
    assert_eq!(source_file.content(), "");
    assert_eq!(source_file.line_number(), 1);
}

#[test]
fn test_location() {
    let source_file = SourceFile::in_memory("<test>", "let a = 1;\n  é + b\n");

    assert_eq!(
        source_file.get_location(0),
        Some(Location { line: 1, column: 1 })
    );
    assert_eq!(
        source_file.get_location(4),
        Some(Location { line: 1, column: 5 })
    );

    // `é` takes two bytes but a single column
    let plus = source_file.content().find('+').unwrap();
    assert_eq!(
        source_file.get_location(plus),
        Some(Location { line: 2, column: 5 })
    );

    // the end of the content sits on the empty last line
    assert_eq!(
        source_file.get_location(source_file.content().len()),
        Some(Location { line: 3, column: 1 })
    );

    // inside of `é`
    assert_eq!(source_file.get_location(14), None);
}

#[test]
fn test_span() {
    let source_file = SourceFile::in_memory("<test>", "fn(x) { x }");

    let span = Span::new(source_file.clone(), 3, 4).unwrap();
    assert_eq!(span.str(), "x");
    assert_eq!(span.start_location(), Location { line: 1, column: 4 });

    let end = Span::new(source_file.clone(), 11, 11).unwrap();
    assert_eq!(end.str(), "");

    assert!(Span::new(source_file.clone(), 4, 3).is_none());
    assert!(Span::new(source_file, 0, 12).is_none());
}
