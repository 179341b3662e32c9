use std_util::prelude::*;
use tablesmith_core::{Archetype, Column, GenerationOptions, Selection, SqlType, Table};
use tablesmith_sql::{generate, select_many_by};

fn log_table() -> Table {
    Table::builder("Log")
        .column(Column::new("Message", SqlType::NVarChar).max())
        .column(Column::new("Logged", SqlType::DateTime))
        .build()
        .unwrap()
}

#[test]
fn keyless_table_degrades_key_archetypes() {
    let table = log_table();
    let selection = Selection::new().search(["Message"]);
    let options = GenerationOptions::default();

    for archetype in [
        Archetype::SelectSingle,
        Archetype::SelectMany,
        Archetype::Search,
        Archetype::Update,
        Archetype::Set,
        Archetype::DeleteSingle,
        Archetype::DeleteMany,
    ] {
        let artifact = assert_ok!(generate(&table, archetype, &selection, &options));

        assert!(artifact.degraded, "{archetype} should degrade");
        assert_eq!(artifact.name, format!("usp_Log_{archetype}"));
        assert_eq!(
            artifact.body,
            format!(
                "-- [dbo].[usp_Log_{archetype}] was not generated: table [dbo].[Log] has no primary key.\n"
            )
        );
        assert!(!artifact.body.contains("CREATE PROCEDURE"));
    }
}

#[test]
fn keyless_table_still_generates_the_rest() {
    let table = log_table();
    let selection = Selection::new().search(["Message"]);
    let options = GenerationOptions::default();

    for archetype in [
        Archetype::SelectAll,
        Archetype::Insert,
        Archetype::DeleteAll,
        Archetype::CountAll,
        Archetype::CountSearch,
    ] {
        let artifact = assert_ok!(generate(&table, archetype, &selection, &options));
        assert!(!artifact.degraded, "{archetype} should generate");
        assert_contains!(artifact.body, "CREATE PROCEDURE");
    }

    // Criteria lookups do not check the key
    let artifact = assert_ok!(select_many_by(&table, &["Logged"], &selection, &options));
    assert!(!artifact.degraded);
    assert_contains!(artifact.body, "WHERE [Logged] = @Logged;");
}

#[test]
fn composite_key_degrades_id_lists() {
    let table = Table::builder("Membership")
        .column(Column::new("UserId", SqlType::Int).primary_key())
        .column(Column::new("GroupId", SqlType::Int).primary_key())
        .build()
        .unwrap();
    let options = GenerationOptions::default();

    let many = assert_ok!(generate(&table, Archetype::SelectMany, &Selection::new(), &options));
    assert!(many.degraded);
    assert_contains!(many.body, "composite primary key");

    let single = assert_ok!(generate(&table, Archetype::SelectSingle, &Selection::new(), &options));
    assert!(!single.degraded);
    assert_contains!(single.body, "WHERE [UserId] = @UserId AND [GroupId] = @GroupId;");
}

#[test]
fn contract_violations() {
    let table = Table::builder("Empty").build().unwrap();
    let options = GenerationOptions::default();

    let err = assert_err!(generate(&table, Archetype::SelectAll, &Selection::new(), &options));
    assert!(err.is_invalid_argument());

    let err = assert_err!(generate(&log_table(), Archetype::Search, &Selection::new(), &options));
    assert!(err.is_invalid_argument());

    let err = assert_err!(generate(&log_table(), Archetype::SelectManyBy, &Selection::new(), &options));
    assert!(err.is_invalid_argument());

    let err = assert_err!(generate(
        &log_table(),
        Archetype::SelectAll,
        &Selection::new().sort(["Missing"]),
        &options
    ));
    assert!(err.is_unknown_column());
    assert_eq!(
        err.to_string(),
        "procedure usp_Log_SelectAll: unknown column: table `Log` has no column `Missing`"
    );
}

#[test]
fn unmapped_types_carry_sentinels() {
    let table = Table::builder("Shape")
        .column(Column::new("Id", SqlType::Int).primary_key())
        .column(Column::new("Outline", SqlType::parse("vector")))
        .build()
        .unwrap();

    let artifact = assert_ok!(generate(
        &table,
        Archetype::Insert,
        &Selection::new(),
        &GenerationOptions::default()
    ));

    assert!(!artifact.degraded);
    assert_contains!(artifact.body, "@Outline /* No mapping available for vector */");
}
