use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std_util::prelude::*;
use tablesmith_cli::TablesmithCli;

const SCHEMA: &str = r#"
version = 1

[[tables]]
name = "Game"
search = ["Name"]
enum = { name = "Name", value = "Id" }

[[tables.columns]]
name = "Id"
type = "int"
primary_key = true
identity = true

[[tables.columns]]
name = "Name"
type = "nvarchar"
length = 50

[[tables.rows]]
Id = 1
Name = "Chess"

[[tables]]
name = "Log"

[[tables.columns]]
name = "Message"
type = "nvarchar"
length = -1
"#;

fn run(dir: &Path, extra: &[&str]) -> anyhow::Result<()> {
    let schema = dir.join("schema.toml");
    fs::write(&schema, SCHEMA).unwrap();

    let mut args = vec![
        "tablesmith".to_string(),
        "generate".to_string(),
        "--schema".to_string(),
        schema.display().to_string(),
    ];
    args.extend(extra.iter().map(|arg| arg.to_string()));

    TablesmithCli::new().parse_from(args)
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn writes_requested_targets_flat() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    assert_ok!(run(
        dir.path(),
        &[
            "--out",
            out.to_str().unwrap(),
            "--target",
            "enum",
            "--target",
            "xml-data",
            "--target",
            "data-object",
        ]
    ));

    assert_eq!(
        listing(&out),
        ["Game.cs", "Game.xml", "GameEnum.cs", "Log.cs"]
    );

    let enumeration = fs::read_to_string(out.join("GameEnum.cs")).unwrap();
    assert_contains!(enumeration, "Chess = 1,");
}

#[test]
fn options_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let options = dir.path().join("options.toml");
    fs::write(&options, "procedure_prefix = \"sp_\"\n").unwrap();

    assert_ok!(run(
        dir.path(),
        &[
            "--options",
            options.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "-t",
            "procedures",
        ]
    ));

    let names = listing(&out);
    assert!(names.contains(&"sp_Game_Search.sql".to_string()));
    assert!(names.contains(&"sp_Log_SelectAll.sql".to_string()));
    assert!(!names.iter().any(|name| name.starts_with("usp_")));
}

#[test]
fn missing_schema_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = assert_err!(TablesmithCli::new().parse_from([
        "tablesmith",
        "generate",
        "--schema",
        dir.path().join("nope.toml").to_str().unwrap(),
    ]));
    assert_contains!(err.to_string(), "failed to read schema file");
}

#[test]
fn failed_targets_fail_the_command() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let schema = dir.path().join("schema.toml");
    fs::write(
        &schema,
        "version = 1\n\n[[tables]]\nname = \"Empty\"\n\n[[tables]]\nname = \"Game\"\ncolumns = [{ name = \"Id\", type = \"int\", primary_key = true }]\n",
    )
    .unwrap();

    let err = assert_err!(TablesmithCli::new().parse_from([
        "tablesmith",
        "generate",
        "--schema",
        schema.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--target",
        "interface",
    ]));
    assert_eq!(err.to_string(), "1 of the requested table targets failed");

    // the healthy table is still written
    assert_eq!(listing(&out), ["IGame.cs"]);
}
