use entry_points_txt::{load, parse, EntryPoint, EntryPointSet, Error, ParseErrorKind};
use std::io::Cursor;

fn set(eps: Vec<EntryPoint>) -> EntryPointSet {
    eps.into_iter().collect()
}

fn parse_err(text: &str) -> String {
    parse(text).unwrap_err().to_string()
}

#[test]
fn test_empty_input() {
    assert_eq!(parse("").unwrap(), EntryPointSet::new());
    assert_eq!(parse("\n\n   \n").unwrap(), EntryPointSet::new());
}

#[test]
fn test_module_only() {
    assert_eq!(
        parse("[console_scripts]\nfoo = bar\n").unwrap(),
        set(vec![EntryPoint::new("console_scripts", "foo", "bar")])
    );
}

#[test]
fn test_module_and_attribute() {
    assert_eq!(
        parse("[console_scripts]\nfoo = bar:baz\n").unwrap(),
        set(vec![
            EntryPoint::new("console_scripts", "foo", "bar").with_attribute("baz")
        ])
    );
}

#[test]
fn test_dotted_paths() {
    assert_eq!(
        parse("[console_scripts]\nfoo = bar.apple:baz.banana\n").unwrap(),
        set(vec![EntryPoint::new("console_scripts", "foo", "bar.apple")
            .with_attribute("baz.banana")])
    );
}

#[test]
fn test_single_extra() {
    assert_eq!(
        parse("[console_scripts]\nfoo = bar:baz[quux]\n").unwrap(),
        set(vec![EntryPoint::new("console_scripts", "foo", "bar")
            .with_attribute("baz")
            .with_extras(["quux"])])
    );
}

#[test]
fn test_multiple_extras() {
    let parsed = parse("[console_scripts]\nfoo = bar:baz[quux,glarch]\n").unwrap();
    assert_eq!(parsed.len(), 1);
    let ep = parsed.get_entry("console_scripts", "foo").unwrap();
    assert_eq!(ep.group(), "console_scripts");
    assert_eq!(ep.name(), "foo");
    assert_eq!(ep.module(), "bar");
    assert_eq!(ep.attribute(), Some("baz"));
    assert_eq!(ep.extras(), ["quux", "glarch"]);
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(
        parse("[console_scripts]\nfoo = bar : baz [ quux , glarch ] \n").unwrap(),
        parse("[console_scripts]\nfoo = bar:baz[quux,glarch]\n").unwrap()
    );
    assert_eq!(
        parse("  [  console_scripts  ]  \n\tfoo=bar\n").unwrap(),
        set(vec![EntryPoint::new("console_scripts", "foo", "bar")])
    );
}

#[test]
fn test_multiple_groups_keep_order() {
    let parsed = parse(
        "[console_scripts]\n\
         foo = bar:baz\n\
         apple = red:delicious\n\
         [glarch.quux]\n\
         thing-of-things = one.two\n",
    )
    .unwrap();

    assert_eq!(parsed.keys().collect::<Vec<_>>(), ["console_scripts", "glarch.quux"]);
    assert_eq!(
        parsed.get("console_scripts").unwrap().keys().collect::<Vec<_>>(),
        ["foo", "apple"]
    );
    assert_eq!(
        parsed.get_entry("glarch.quux", "thing-of-things"),
        Some(&EntryPoint::new("glarch.quux", "thing-of-things", "one.two"))
    );
}

#[test]
fn test_comments_are_skipped() {
    let parsed = parse(
        "[console_scripts]\n\
         foo = bar:baz\n\
         ;apple = red:delicious\n\
         [glarch.quux]\n\
         #thing-of-things = one.two\n",
    )
    .unwrap();

    assert_eq!(parsed.get("console_scripts").unwrap().len(), 1);
    // Headers without entries leave no trace
    assert_eq!(parsed.len(), 1);
    assert!(parsed.get("glarch.quux").is_none());
}

#[test]
fn test_duplicate_entry_last_wins() {
    assert_eq!(
        parse("[g]\nfoo = a\nfoo = b\n").unwrap(),
        set(vec![EntryPoint::new("g", "foo", "b")])
    );
}

#[test]
fn test_reopened_group_merges() {
    let parsed = parse("[a]\nx = m\n[b]\ny = n\n[a]\nz = o\nx = p\n").unwrap();
    assert_eq!(parsed.keys().collect::<Vec<_>>(), ["a", "b"]);
    let a = parsed.get("a").unwrap();
    assert_eq!(a.keys().collect::<Vec<_>>(), ["x", "z"]);
    assert_eq!(a["x"].module(), "p");
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(
        parse("[g]\r\nfoo = bar\r\n").unwrap(),
        set(vec![EntryPoint::new("g", "foo", "bar")])
    );
}

#[test]
fn test_error_messages() {
    let cases = [
        ("[console_scripts\nfoo = bar\n", "Group header missing closing bracket"),
        ("[ ]\n", "Empty group name"),
        ("[bad-group]\nfoo=bar\n", "Invalid group name: 'bad-group'"),
        ("foo = bar\n", "Entry point line occurs before any group headers"),
        ("[g]\nfoo bar\n", "Invalid line (no '='): 'foo bar'"),
        ("[g]\n = bar\n", "Empty entry point name"),
        ("[g]\nfoo = \n", "Empty module name"),
        ("[g]\nfoo = bar-baz\n", "Invalid module name: 'bar-baz'"),
        ("[g]\nfoo = class\n", "Invalid module name: 'class'"),
        ("[g]\nfoo = bar:\n", "Missing attribute name after colon"),
        ("[g]\nfoo = bar: [x]\n", "Missing attribute name after colon"),
        ("[g]\nfoo = bar:baz.2\n", "Invalid attribute name: 'baz.2'"),
        ("[g]\nfoo = bar:baz[x\n", "Extras missing closing bracket"),
        ("[g]\nfoo = bar:baz[x] y\n", "Trailing characters after extras"),
        ("[g]\nfoo = bar:baz[x,]\n", "Invalid extra: ''"),
        ("[g]\nfoo = bar:baz[x,y z]\n", "Invalid extra: 'y z'"),
    ];

    for (text, message) in cases {
        assert_eq!(parse_err(text), message, "input: {text:?}");
    }
}

#[test]
fn test_invalid_line_quotes_apostrophes() {
    assert_eq!(
        parse_err("[g]\nit's broken\n"),
        "Invalid line (no '='): \"it's broken\""
    );
}

#[test]
fn test_error_carries_line_and_kind() {
    let err = parse("[g]\nfoo = bar\n\n# note\nbaz = qux:\n").unwrap_err();
    let parse_error = err.as_parse().unwrap();
    assert_eq!(parse_error.line(), 5);
    assert_eq!(parse_error.kind(), &ParseErrorKind::MissingAttribute);
}

#[test]
fn test_load_from_reader() {
    let parsed = load(Cursor::new("[console_scripts]\nfoo = bar\n")).unwrap();
    assert_eq!(parsed, set(vec![EntryPoint::new("console_scripts", "foo", "bar")]));

    let err = load(Cursor::new("[g]\nfoo\n")).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_information_separators_are_stripped() {
    assert_eq!(
        parse("[g]\nfoo = bar\u{1f}\n\u{1c}[h]\u{1d}\nbaz = qux [x\u{1e}]\n").unwrap(),
        set(vec![
            EntryPoint::new("g", "foo", "bar"),
            EntryPoint::new("h", "baz", "qux").with_extras(["x"]),
        ])
    );
}

#[test]
fn test_unicode_names_follow_python_rules() {
    let parsed = parse("[plugins\u{b2}]\nfoo = caf\u{e9}.e\u{301}:a\u{b7}\n").unwrap();
    let ep = parsed.get_entry("plugins\u{b2}", "foo").unwrap();
    assert_eq!(ep.module(), "caf\u{e9}.e\u{301}");
    assert_eq!(ep.attribute(), Some("a\u{b7}"));

    assert_eq!(
        parse_err("[g]\nfoo = a\u{b2}\n"),
        "Invalid module name: 'a\u{b2}'"
    );
    assert_eq!(
        parse_err("[g]\nfoo = bar\u{200b}\n"),
        "Invalid module name: 'bar\\u200b'"
    );
}
