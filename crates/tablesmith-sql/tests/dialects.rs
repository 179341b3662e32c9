use std_util::prelude::*;
use tablesmith_core::{Archetype, Column, Dialect, GenerationOptions, Selection, SqlType, Table};
use tablesmith_sql::generate;

fn game() -> Table {
    Table::builder("Game")
        .column(Column::new("Id", SqlType::Int).primary_key().identity())
        .column(Column::new("Name", SqlType::NVarChar).length(50).nullable())
        .column(Column::new("Disabled", SqlType::Bit))
        .build()
        .unwrap()
}

fn script(archetype: Archetype, selection: &Selection, dialect: Dialect) -> String {
    let options = GenerationOptions::default().dialect(dialect);
    assert_ok!(generate(&game(), archetype, selection, &options)).body
}

#[test]
fn drop_guard() {
    let selection = Selection::new();

    let body = script(Archetype::SelectAll, &selection, Dialect::SqlServer2016);
    assert!(body.starts_with(
        "-- Selects every row of [dbo].[Game]\nDROP PROCEDURE IF EXISTS [dbo].[usp_Game_SelectAll];\nGO\n"
    ));

    for dialect in [Dialect::SqlServer2005, Dialect::SqlServer2008, Dialect::SqlServer2012] {
        let body = script(Archetype::SelectAll, &selection, dialect);
        assert_contains!(
            body,
            "IF OBJECT_ID(N'[dbo].[usp_Game_SelectAll]', N'P') IS NOT NULL\n    DROP PROCEDURE [dbo].[usp_Game_SelectAll];\nGO\n"
        );
    }
}

#[test]
fn search_pages_with_offset_fetch() {
    let selection = Selection::new().search(["Name"]);
    let body = script(Archetype::Search, &selection, Dialect::SqlServer2012);

    assert_contains!(
        body,
        "    @SearchString NVARCHAR(100) = NULL,\n    @Skip INT = 0,\n    @Take INT = 50\nAS"
    );
    assert_contains!(
        body,
        "    WHERE (@SearchString IS NULL OR [Name] LIKE '%' + @SearchString + '%')\n    ORDER BY [Id] ASC\n    OFFSET @Skip ROWS\n    FETCH NEXT @Take ROWS ONLY;\n"
    );
}

#[test]
fn search_pages_with_row_number_before_2012() {
    let selection = Selection::new().search(["Name", "Id"]).sort(["Name"]);
    let body = script(Archetype::Search, &selection, Dialect::SqlServer2008);

    assert_contains!(
        body,
        "\
    WITH [Paged] AS
    (
        SELECT
            [Id],
            [Name],
            [Disabled],
            ROW_NUMBER() OVER (ORDER BY [Name] ASC) AS [RowNumber]
        FROM [dbo].[Game]
        WHERE (@SearchString IS NULL OR [Name] LIKE '%' + @SearchString + '%' OR CAST([Id] AS NVARCHAR(MAX)) LIKE '%' + @SearchString + '%')
    )
    SELECT
        [Id],
        [Name],
        [Disabled]
    FROM [Paged]
    WHERE [RowNumber] BETWEEN @Skip + 1 AND @Skip + @Take
    ORDER BY [RowNumber];
"
    );
    assert!(!body.contains("OFFSET"));
}

#[test]
fn id_lists_use_string_split_on_2016() {
    let body = script(Archetype::SelectMany, &Selection::new(), Dialect::SqlServer2016);

    assert_contains!(body, "    @IdList NVARCHAR(MAX)\nAS");
    assert_contains!(
        body,
        "    WHERE [Id] IN (SELECT CAST([value] AS INT) FROM STRING_SPLIT(@IdList, ','));\n"
    );
}

#[test]
fn id_lists_use_xml_before_2016() {
    let body = script(Archetype::DeleteMany, &Selection::new(), Dialect::SqlServer2012);

    assert_contains!(body, "    @IdList XML\nAS");
    assert_contains!(
        body,
        "    DELETE FROM [dbo].[Game]\n    WHERE [Id] IN (SELECT [List].[Item].value('.', 'INT') FROM @IdList.nodes('/ids/id') AS [List]([Item]));\n"
    );
}

#[test]
fn date_types_before_2008() {
    let table = Table::builder("Event")
        .column(Column::new("Id", SqlType::Int).primary_key())
        .column(Column::new("On", SqlType::Date))
        .column(Column::new("At", SqlType::Time))
        .build()
        .unwrap();
    let options = GenerationOptions::default().dialect(Dialect::SqlServer2005);

    let body = assert_ok!(generate(&table, Archetype::Insert, &Selection::new(), &options)).body;

    assert_contains!(body, "@On DATETIME,");
    assert_contains!(body, "@At /* No mapping available for Time before SQL Server 2008 */");
}
