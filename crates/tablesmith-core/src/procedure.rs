//! Canonical stored-procedure naming.
//!
//! [`procedure_name`] is the only place a procedure name is derived. The SQL
//! generator uses it to name what it creates and the object-model generator
//! uses it to name what it calls, so the two always agree.

use crate::{Column, GenerationOptions, Name, Table, TableNames};

use std::fmt;

/// Search string matched by search and count-search procedures
pub const SEARCH_STRING: &str = "@SearchString";

/// Declared length of [`SEARCH_STRING`]
pub const SEARCH_STRING_LENGTH: i32 = 100;

/// Rows skipped before a page starts
pub const SKIP: &str = "@Skip";

/// Rows in one page
pub const TAKE: &str = "@Take";

/// Key values of the id-list procedures
pub const ID_LIST: &str = "@IdList";

/// Switch of the disabled filter
pub const INCLUDE_DISABLED: &str = "@IncludeDisabled";

/// A generation recipe every table can be instantiated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// One row by primary key
    SelectSingle,
    /// Rows whose key is in an id list
    SelectMany,
    /// Rows matching caller-chosen differentiator columns
    SelectManyBy,
    SelectAll,
    /// One page of rows matching a search string
    Search,
    Insert,
    Update,
    /// Upsert: update by primary key, insert when missing
    Set,
    DeleteSingle,
    /// Rows whose key is in an id list
    DeleteMany,
    DeleteAll,
    CountAll,
    /// Number of rows matching a search string
    CountSearch,
}

impl Archetype {
    pub const ALL: [Archetype; 13] = [
        Archetype::SelectSingle,
        Archetype::SelectMany,
        Archetype::SelectManyBy,
        Archetype::SelectAll,
        Archetype::Search,
        Archetype::Insert,
        Archetype::Update,
        Archetype::Set,
        Archetype::DeleteSingle,
        Archetype::DeleteMany,
        Archetype::DeleteAll,
        Archetype::CountAll,
        Archetype::CountSearch,
    ];

    /// Tag embedded in the procedure name
    pub fn tag(self) -> &'static str {
        match self {
            Archetype::SelectSingle => "SelectSingle",
            Archetype::SelectMany => "SelectMany",
            Archetype::SelectManyBy => "SelectManyBy",
            Archetype::SelectAll => "SelectAll",
            Archetype::Search => "Search",
            Archetype::Insert => "Insert",
            Archetype::Update => "Update",
            Archetype::Set => "Set",
            Archetype::DeleteSingle => "DeleteSingle",
            Archetype::DeleteMany => "DeleteMany",
            Archetype::DeleteAll => "DeleteAll",
            Archetype::CountAll => "CountAll",
            Archetype::CountSearch => "CountSearch",
        }
    }

    pub fn parse(tag: &str) -> Option<Archetype> {
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.tag().eq_ignore_ascii_case(tag))
    }

    /// Archetypes that address individual rows and therefore need a
    /// primary key.
    pub fn requires_primary_key(self) -> bool {
        matches!(
            self,
            Archetype::SelectSingle
                | Archetype::SelectMany
                | Archetype::Search
                | Archetype::Update
                | Archetype::Set
                | Archetype::DeleteSingle
                | Archetype::DeleteMany
        )
    }

    /// Id-list archetypes, which need a key of exactly one column.
    pub fn requires_single_key(self) -> bool {
        matches!(self, Archetype::SelectMany | Archetype::DeleteMany)
    }

    /// Archetypes whose name and filter come from differentiator columns.
    pub fn takes_differentiators(self) -> bool {
        matches!(self, Archetype::SelectManyBy)
    }

    /// Archetypes that match rows against a search string.
    pub fn takes_search(self) -> bool {
        matches!(self, Archetype::Search | Archetype::CountSearch)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Schema-qualified procedure name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcedureName {
    schema: String,
    name: String,
}

impl ProcedureName {
    /// The unqualified name, e.g. `usp_Game_SelectAll`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// `[dbo].[usp_Game_SelectAll]`, the form used by scripts and callers
    pub fn qualified(&self) -> String {
        format!(
            "{}.{}",
            Name::new(&self.schema).bracketed(),
            Name::new(&self.name).bracketed()
        )
    }
}

impl fmt::Display for ProcedureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}

/// Derives the procedure name for `table` and `archetype`.
///
/// `differentiators` only contributes for archetypes that
/// [take differentiators](Archetype::takes_differentiators) and is ignored
/// otherwise.
pub fn procedure_name(
    table: &Table,
    archetype: Archetype,
    differentiators: &[&Column],
    options: &GenerationOptions,
) -> ProcedureName {
    let names = TableNames::new(table);
    let mut name = format!(
        "{}{}_{}",
        options.procedure_prefix,
        names.class_name,
        archetype.tag()
    );

    if archetype.takes_differentiators() {
        let suffix = differentiators
            .iter()
            .map(|column| names.column(column).property)
            .collect::<Vec<_>>()
            .join("And");
        name.push_str(&suffix);
    }

    ProcedureName {
        schema: table.schema().to_string(),
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqlType;

    fn game() -> Table {
        Table::builder("Game")
            .column(Column::new("Id", SqlType::Int).primary_key().identity())
            .column(Column::new("Name", SqlType::NVarChar).length(50).nullable())
            .column(Column::new("Disabled", SqlType::Bit))
            .build()
            .unwrap()
    }

    #[test]
    fn names_every_archetype() {
        let table = game();
        let options = GenerationOptions::default();

        let name = procedure_name(&table, Archetype::SelectSingle, &[], &options);
        assert_eq!(name.name(), "usp_Game_SelectSingle");
        assert_eq!(name.qualified(), "[dbo].[usp_Game_SelectSingle]");
        assert_eq!(name.to_string(), name.qualified());

        for archetype in Archetype::ALL {
            let name = procedure_name(&table, archetype, &[], &options);
            assert!(name.name().ends_with(archetype.tag()));
        }
    }

    #[test]
    fn differentiators_extend_the_name() {
        let table = game();
        let options = GenerationOptions::default().procedure_prefix("up");
        let fields = table.resolve(&["Name", "Disabled"]).unwrap();

        let name = procedure_name(&table, Archetype::SelectManyBy, &fields, &options);
        assert_eq!(name.name(), "upGame_SelectManyByNameAndDisabled");

        // ignored by other archetypes
        let name = procedure_name(&table, Archetype::SelectAll, &fields, &options);
        assert_eq!(name.name(), "upGame_SelectAll");
    }

    #[test]
    fn parse_tags() {
        assert_eq!(Archetype::parse("set"), Some(Archetype::Set));
        assert_eq!(Archetype::parse("CountSearch"), Some(Archetype::CountSearch));
        assert_eq!(Archetype::parse("Merge"), None);
    }
}
