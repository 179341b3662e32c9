use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tablesmith_core::{Archetype, Column, GenerationOptions, Selection, SqlType, Table};
use tablesmith_sql::generate;

fn game() -> Table {
    Table::builder("Game")
        .column(Column::new("Id", SqlType::Int).primary_key().identity())
        .column(Column::new("Name", SqlType::NVarChar).length(50).nullable())
        .column(Column::new("Disabled", SqlType::Bit).default_value("((0))"))
        .build()
        .unwrap()
}

#[test]
fn select_all_script() {
    let artifact = assert_ok!(generate(
        &game(),
        Archetype::SelectAll,
        &Selection::new(),
        &GenerationOptions::default()
    ));

    assert_eq!(artifact.name, "usp_Game_SelectAll");
    assert_eq!(artifact.file_name(), "usp_Game_SelectAll.sql");
    assert!(!artifact.degraded);
    assert_eq!(
        artifact.body,
        "\
-- Selects every row of [dbo].[Game]
IF OBJECT_ID(N'[dbo].[usp_Game_SelectAll]', N'P') IS NOT NULL
    DROP PROCEDURE [dbo].[usp_Game_SelectAll];
GO

CREATE PROCEDURE [dbo].[usp_Game_SelectAll]
AS
BEGIN
    SET NOCOUNT ON;

    SELECT
        [Id],
        [Name],
        [Disabled]
    FROM [dbo].[Game];
END
GO
"
    );
}

#[test]
fn insert_script_returns_identity() {
    let artifact = assert_ok!(generate(
        &game(),
        Archetype::Insert,
        &Selection::new(),
        &GenerationOptions::default()
    ));

    assert_eq!(
        artifact.body,
        "\
-- Inserts one row into [dbo].[Game]
IF OBJECT_ID(N'[dbo].[usp_Game_Insert]', N'P') IS NOT NULL
    DROP PROCEDURE [dbo].[usp_Game_Insert];
GO

CREATE PROCEDURE [dbo].[usp_Game_Insert]
    @Id INT OUTPUT,
    @Name NVARCHAR(50),
    @Disabled BIT
AS
BEGIN
    SET NOCOUNT ON;

    INSERT INTO [dbo].[Game]
    (
        [Name],
        [Disabled]
    )
    VALUES
    (
        @Name,
        @Disabled
    );

    SET @Id = SCOPE_IDENTITY();
END
GO
"
    );
}

#[test]
fn select_single_filters_by_key() {
    let artifact = assert_ok!(generate(
        &game(),
        Archetype::SelectSingle,
        &Selection::new(),
        &GenerationOptions::default()
    ));

    assert_eq!(artifact.name, "usp_Game_SelectSingle");
    assert_contains!(artifact.body, "CREATE PROCEDURE [dbo].[usp_Game_SelectSingle]\n    @Id INT\nAS");
    assert_contains!(
        artifact.body,
        "    SELECT\n        [Id],\n        [Name],\n        [Disabled]\n    FROM [dbo].[Game]\n    WHERE [Id] = @Id;\n"
    );
}

#[test]
fn update_skips_key_and_identity() {
    let artifact = assert_ok!(generate(
        &game(),
        Archetype::Update,
        &Selection::new(),
        &GenerationOptions::default()
    ));

    assert_contains!(
        artifact.body,
        "    UPDATE [dbo].[Game]\n    SET\n        [Name] = @Name,\n        [Disabled] = @Disabled\n    WHERE [Id] = @Id;\n"
    );
    assert_contains!(artifact.body, "@Id INT OUTPUT,");
}

#[test]
fn update_omits_identity_outside_the_key() {
    let table = Table::builder("Ticket")
        .column(Column::new("Code", SqlType::NChar).length(8).primary_key())
        .column(Column::new("Seq", SqlType::BigInt).identity())
        .column(Column::new("Note", SqlType::NVarChar).length(100))
        .build()
        .unwrap();

    let artifact = assert_ok!(generate(
        &table,
        Archetype::Update,
        &Selection::new(),
        &GenerationOptions::default()
    ));

    assert_contains!(
        artifact.body,
        "CREATE PROCEDURE [dbo].[usp_Ticket_Update]\n    @Code NCHAR(8),\n    @Note NVARCHAR(100)\nAS"
    );
    assert!(!artifact.body.contains("@Seq"));

    // inserts still hand the engine-assigned value back
    let insert = assert_ok!(generate(
        &table,
        Archetype::Insert,
        &Selection::new(),
        &GenerationOptions::default()
    ));
    assert_contains!(insert.body, "    @Seq BIGINT OUTPUT,\n");
}

#[test]
fn set_updates_or_inserts() {
    let artifact = assert_ok!(generate(
        &game(),
        Archetype::Set,
        &Selection::new(),
        &GenerationOptions::default()
    ));

    assert_contains!(
        artifact.body,
        "    IF EXISTS (SELECT 1 FROM [dbo].[Game] WHERE [Id] = @Id)\n    BEGIN\n        UPDATE [dbo].[Game]\n"
    );
    assert_contains!(artifact.body, "    END\n    ELSE\n    BEGIN\n        INSERT INTO [dbo].[Game]\n");
    assert_contains!(artifact.body, "        SET @Id = SCOPE_IDENTITY();\n    END\nEND\nGO\n");
}

#[test]
fn set_without_updatable_columns_only_inserts() {
    let table = Table::builder("Tag")
        .column(Column::new("Code", SqlType::NChar).length(4).primary_key())
        .build()
        .unwrap();

    let artifact = assert_ok!(generate(
        &table,
        Archetype::Set,
        &Selection::new(),
        &GenerationOptions::default()
    ));

    assert_contains!(artifact.body, "IF NOT EXISTS (SELECT 1 FROM [dbo].[Tag] WHERE [Code] = @Code)");
    assert!(!artifact.body.contains("UPDATE"));

    let update = assert_ok!(generate(
        &table,
        Archetype::Update,
        &Selection::new(),
        &GenerationOptions::default()
    ));
    assert!(update.degraded);
    assert_contains!(update.body, "has no updatable columns");
}

#[test]
fn deletes() {
    let options = GenerationOptions::default();
    let selection = Selection::new();

    let single = assert_ok!(generate(&game(), Archetype::DeleteSingle, &selection, &options));
    assert_contains!(single.body, "    DELETE FROM [dbo].[Game]\n    WHERE [Id] = @Id;\n");

    let all = assert_ok!(generate(&game(), Archetype::DeleteAll, &selection, &options));
    assert_contains!(all.body, "CREATE PROCEDURE [dbo].[usp_Game_DeleteAll]\nAS\n");
    assert_contains!(all.body, "    DELETE FROM [dbo].[Game];\n");
}

#[test]
fn counts() {
    let options = GenerationOptions::default();
    let selection = Selection::new().search(["Name"]);

    let all = assert_ok!(generate(&game(), Archetype::CountAll, &selection, &options));
    assert_contains!(all.body, "    SELECT COUNT(*)\n    FROM [dbo].[Game];\n");

    let search = assert_ok!(generate(&game(), Archetype::CountSearch, &selection, &options));
    assert_contains!(search.body, "@SearchString NVARCHAR(100) = NULL\nAS");
    assert_contains!(
        search.body,
        "    WHERE (@SearchString IS NULL OR [Name] LIKE '%' + @SearchString + '%');\n"
    );
}

#[test]
fn select_many_by_criteria() {
    let selection = Selection::new().criteria(["Name"]).sort(["Name"]);
    let artifact = assert_ok!(generate(
        &game(),
        Archetype::SelectManyBy,
        &selection,
        &GenerationOptions::default()
    ));

    assert_eq!(artifact.name, "usp_Game_SelectManyByName");
    assert_contains!(artifact.body, "    @Name NVARCHAR(50)\nAS");
    assert_contains!(
        artifact.body,
        "    FROM [dbo].[Game]\n    WHERE [Name] = @Name\n    ORDER BY [Name] ASC;\n"
    );
}

#[test]
fn sort_fields_are_never_inferred() {
    let artifact = assert_ok!(generate(
        &game(),
        Archetype::SelectAll,
        &Selection::new(),
        &GenerationOptions::default()
    ));
    assert!(!artifact.body.contains("ORDER BY"));

    let artifact = assert_ok!(generate(
        &game(),
        Archetype::SelectAll,
        &Selection::new().sort(["Disabled", "Name"]),
        &GenerationOptions::default()
    ));
    assert_contains!(artifact.body, "ORDER BY [Disabled] ASC, [Name] ASC;");
}

#[test]
fn disabled_filter() {
    let options = GenerationOptions::default().disabled_filter(true);
    let artifact = assert_ok!(generate(&game(), Archetype::SelectAll, &Selection::new(), &options));

    assert_contains!(artifact.body, "    @IncludeDisabled BIT = 0\nAS");
    assert_contains!(artifact.body, "    WHERE (@IncludeDisabled = 1 OR [Disabled] = 0);\n");

    // Only tables carrying the column get the switch
    let table = Table::builder("Score")
        .column(Column::new("Id", SqlType::Int).primary_key())
        .build()
        .unwrap();
    let artifact = assert_ok!(generate(&table, Archetype::SelectAll, &Selection::new(), &options));
    assert!(!artifact.body.contains("@IncludeDisabled"));
}

#[test]
fn grants() {
    let options = GenerationOptions::default().grants("app_user");
    let artifact = assert_ok!(generate(&game(), Archetype::CountAll, &Selection::new(), &options));

    assert!(artifact
        .body
        .ends_with("END\nGO\n\nGRANT EXECUTE ON [dbo].[usp_Game_CountAll] TO [app_user];\nGO\n"));
}

#[test]
fn prefix_and_schema() {
    let table = Table::builder("order_line")
        .schema("sales")
        .column(Column::new("Id", SqlType::BigInt).primary_key())
        .build()
        .unwrap();
    let options = GenerationOptions::default().procedure_prefix("sp");

    let artifact = assert_ok!(generate(&table, Archetype::SelectSingle, &Selection::new(), &options));

    assert_eq!(artifact.name, "spOrderLine_SelectSingle");
    assert_contains!(artifact.body, "CREATE PROCEDURE [sales].[spOrderLine_SelectSingle]");
    assert_contains!(artifact.body, "FROM [sales].[order_line]");
}

#[test]
fn generation_is_deterministic() {
    let selection = Selection::new().search(["Name"]).criteria(["Disabled"]);
    let options = GenerationOptions::default().grants("public");

    let first = assert_ok!(tablesmith_sql::generate_all(&game(), &selection, &options));
    let second = assert_ok!(tablesmith_sql::generate_all(&game(), &selection, &options));

    assert_eq!(first.len(), 13);
    assert_eq!(first, second);
}

#[test]
fn projections_keep_declared_order() {
    let table = Table::builder("Wide")
        .column(Column::new("Zeta", SqlType::Int).primary_key())
        .column(Column::new("Alpha", SqlType::Int))
        .column(Column::new("Mid", SqlType::Int))
        .build()
        .unwrap();

    let artifact = assert_ok!(generate(
        &table,
        Archetype::SelectAll,
        &Selection::new(),
        &GenerationOptions::default()
    ));

    let zeta = artifact.body.find("[Zeta]").unwrap();
    let alpha = artifact.body.find("[Alpha]").unwrap();
    let mid = artifact.body.find("[Mid]").unwrap();
    assert!(zeta < alpha && alpha < mid);
}
