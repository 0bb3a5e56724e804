use super::*;

fn kind(text: &str) -> Result<LineKind<'_>, Malformed<'_>> {
    SourceLine::new(0, text).classify()
}

#[test]
fn test_classify_assignment() {
    assert_eq!(
        kind("  port := 8080;  "),
        Ok(LineKind::Assignment { name: "port", value: "8080" })
    );
    assert_eq!(
        kind("name:=[[x]]"),
        Ok(LineKind::Assignment { name: "name", value: "[[x]]" })
    );
    assert_eq!(
        kind("settings := {"),
        Ok(LineKind::Assignment { name: "settings", value: "{" })
    );
}

#[test]
fn test_classify_entry() {
    assert_eq!(
        kind("size => |base_font_size|,"),
        Ok(LineKind::Entry { key: "size", value: "|base_font_size|" })
    );
    assert_eq!(
        kind("safety => [[Airbags, ABS, ESP]],"),
        Ok(LineKind::Entry { key: "safety", value: "[[Airbags, ABS, ESP]]" })
    );
    assert_eq!(
        kind("font => {"),
        Ok(LineKind::Entry { key: "font", value: "{" })
    );
}

#[test]
fn test_classify_terminators_and_blank() {
    for text in ["}", "};", "},", "   };   "] {
        assert_eq!(kind(text), Ok(LineKind::Terminator), "text: {:?}", text);
    }
    assert_eq!(kind(""), Ok(LineKind::Blank));
    assert_eq!(kind(" \t "), Ok(LineKind::Blank));
}

#[test]
fn test_classify_malformed() {
    let line = SourceLine::new(4, "   _x := 1;");
    assert_eq!(line.classify(), Err(Malformed { index: 4, text: "_x := 1;" }));
    assert_eq!(line.number(), 5);
    assert!(line.looks_like_assignment());

    let line = SourceLine::new(0, "hello there");
    assert!(line.classify().is_err());
    assert!(!line.looks_like_assignment());

    assert!(kind("}}").is_err());
    assert!(kind("key = value").is_err());
}

#[test]
fn test_split_lines_keeps_numbering() {
    let lines = split_lines("a := 1;\n\n  b := 2;\r\n");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].number(), 3);
    assert_eq!(lines[2].text(), "b := 2;");
    assert_eq!(lines[1].classify(), Ok(LineKind::Blank));
}

#[test]
fn test_value_shapes() {
    assert!(is_integer("0"));
    assert!(is_integer("0042"));
    assert!(!is_integer("-1"));
    assert!(!is_integer("1.5"));
    assert!(!is_integer(""));

    assert_eq!(text_literal("[[hello world]]"), Some("hello world"));
    assert_eq!(text_literal("[[]]"), Some(""));
    assert_eq!(text_literal("[[half]"), None);

    assert_eq!(reference_name("|base|"), Some("base"));
    assert_eq!(reference_name("|"), None);
    assert_eq!(reference_name("base|"), None);

    assert!(is_identifier("a_1"));
    assert!(!is_identifier("1a"));
    assert!(!is_identifier("_a"));
}

#[test]
fn test_split_inline_entries() {
    assert_eq!(
        split_inline_entries("{ k => [[v]], }"),
        Some(vec!["k => [[v]]"])
    );
    assert_eq!(
        split_inline_entries("{ a => { b => 1, c => 2 }, t => [[x, {y}]] }"),
        Some(vec!["a => { b => 1, c => 2 }", "t => [[x, {y}]]"])
    );
    assert_eq!(split_inline_entries("{}"), Some(vec![]));
    assert_eq!(split_inline_entries("{ }"), Some(vec![]));
    assert_eq!(
        split_inline_entries("{ , a => 1,, ,b => 2 }"),
        Some(vec!["", "a => 1", "", "", "b => 2"])
    );
    assert_eq!(split_inline_entries("{ a => 1,, }"), Some(vec!["a => 1", ""]));
    assert_eq!(split_inline_entries("{"), None);
    assert_eq!(split_inline_entries("{ a => { b => 1 }"), None);
    assert_eq!(split_inline_entries("{ t => [[open }"), None);
    assert_eq!(split_inline_entries("[[x]]"), None);
}
