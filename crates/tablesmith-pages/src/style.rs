use tablesmith_core::SourceWriter;

/// Rules shared by every generated page, keyed by the classes the page
/// generators emit.
const RULES: &[(&str, &[&str])] = &[
    (
        "body",
        &["font-family: Segoe UI, Arial, sans-serif;", "font-size: 10pt;", "margin: 1em;"],
    ),
    ("h1, h2", &["font-size: 14pt;", "font-weight: normal;"]),
    (
        ".tablesmith-edit table, .tablesmith-view table",
        &["border-collapse: collapse;"],
    ),
    (
        ".tablesmith-edit th, .tablesmith-view th",
        &["padding: 4px 12px 4px 0;", "text-align: right;", "vertical-align: top;"],
    ),
    (
        ".tablesmith-edit input[type=text], .tablesmith-edit textarea",
        &["width: 24em;"],
    ),
    (".tablesmith-buttons", &["margin-top: 1em;"]),
    (".tablesmith-search", &["margin-bottom: 1em;"]),
    (
        ".tablesmith-grid",
        &["border: 1px solid #ccc;", "border-collapse: collapse;"],
    ),
    (
        ".tablesmith-grid th, .tablesmith-grid td",
        &["border: 1px solid #ccc;", "padding: 2px 6px;"],
    ),
    (".tablesmith-grid th", &["background: #eee;"]),
];

pub(crate) fn render() -> String {
    let mut w = SourceWriter::new();
    w.line("/* <auto-generated /> */");

    for (selector, declarations) in RULES {
        w.blank();
        w.line(format!("{selector} {{"));
        w.indented(|w| {
            w.lines(declarations.iter());
        });
        w.line("}");
    }

    w.finish()
}
