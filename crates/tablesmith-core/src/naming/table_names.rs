use super::Name;
use crate::{Column, Table};

/// Every identifier derived from a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableNames {
    pub name: Name,

    /// Data object class
    pub class_name: String,

    /// Capability contract implemented by the data object
    pub interface_name: String,

    pub enum_name: String,

    /// Data-access wrapper class
    pub dal_name: String,

    /// Local holding one instance
    pub local_name: String,

    /// Local holding a list of instances
    pub list_name: String,

    /// `[schema].[table]`
    pub qualified: String,

    pub display_name: String,
}

/// Every identifier derived from a column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnNames {
    pub name: Name,
    pub property: String,
    pub field: String,
    pub local: String,
    pub parameter: String,
    pub bracketed: String,
    pub display: String,
}

impl TableNames {
    pub fn new(table: &Table) -> TableNames {
        let name = Name::new(table.name());
        let schema = Name::new(table.schema());
        let local_name = name.local_name();

        TableNames {
            class_name: name.class_name(),
            interface_name: name.interface_name(),
            enum_name: name.enum_name(),
            dal_name: name.dal_name(),
            list_name: format!("{}List", local_name.trim_start_matches('@')),
            local_name,
            qualified: format!("{}.{}", schema.bracketed(), name.bracketed()),
            display_name: name.display_name(),
            name,
        }
    }

    /// Names for one column of this table.
    pub fn column(&self, column: &Column) -> ColumnNames {
        ColumnNames::new(self, column)
    }

    /// Names for every column of `table`, in declared order.
    pub fn columns<'a>(&self, table: &'a Table) -> Vec<(&'a Column, ColumnNames)> {
        table
            .columns()
            .map(|column| (column, self.column(column)))
            .collect()
    }
}

impl ColumnNames {
    fn new(table: &TableNames, column: &Column) -> ColumnNames {
        let name = Name::new(&column.name);
        let mut property = name.property_name();

        // A member cannot share the name of its enclosing type
        if property == table.class_name {
            property.push_str("Value");
        }

        ColumnNames {
            parameter: format!("@{property}"),
            field: name.field_name(),
            local: name.local_name(),
            bracketed: name.bracketed(),
            display: name.display_name(),
            property,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqlType;

    fn table() -> Table {
        Table::builder("game_title")
            .schema("arcade")
            .column(Column::new("Id", SqlType::Int).primary_key())
            .column(Column::new("GameTitle", SqlType::NVarChar))
            .build()
            .unwrap()
    }

    #[test]
    fn table_names() {
        let names = TableNames::new(&table());

        assert_eq!(names.class_name, "GameTitle");
        assert_eq!(names.interface_name, "IGameTitle");
        assert_eq!(names.dal_name, "GameTitleDal");
        assert_eq!(names.local_name, "gameTitle");
        assert_eq!(names.list_name, "gameTitleList");
        assert_eq!(names.qualified, "[arcade].[game_title]");
        assert_eq!(names.display_name, "Game Title");
    }

    #[test]
    fn property_colliding_with_class_is_suffixed() {
        let table = table();
        let names = TableNames::new(&table);
        let columns = names.columns(&table);

        assert_eq!(columns[0].1.property, "Id");
        assert_eq!(columns[1].1.property, "GameTitleValue");
        assert_eq!(columns[1].1.parameter, "@GameTitleValue");
        assert_eq!(columns[1].1.bracketed, "[GameTitle]");
    }
}
