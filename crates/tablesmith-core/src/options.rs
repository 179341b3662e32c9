use crate::{BaseType, Column, Table};

use serde::Deserialize;

/// Target SQL Server version. Newer versions unlock shorter syntax for the
/// drop guard, pagination and id-list splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
pub enum Dialect {
    #[serde(rename = "2005")]
    SqlServer2005,
    #[serde(rename = "2008")]
    SqlServer2008,
    #[serde(rename = "2012")]
    #[default]
    SqlServer2012,
    #[serde(rename = "2016")]
    SqlServer2016,
}

impl Dialect {
    /// `DROP PROCEDURE IF EXISTS`
    pub fn supports_drop_if_exists(self) -> bool {
        self >= Dialect::SqlServer2016
    }

    /// `OFFSET ... FETCH NEXT ...`
    pub fn supports_offset_fetch(self) -> bool {
        self >= Dialect::SqlServer2012
    }

    /// `STRING_SPLIT`; older versions receive id lists as XML
    pub fn supports_string_split(self) -> bool {
        self >= Dialect::SqlServer2016
    }

    /// `DATE`, `TIME`, `DATETIME2` and `DATETIMEOFFSET`
    pub fn supports_date_types(self) -> bool {
        self >= Dialect::SqlServer2008
    }
}

/// Switches recognized by the generators.
///
/// One value is passed explicitly into every generator call; nothing is read
/// from ambient state, so a call is fully determined by its arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationOptions {
    /// Target SQL Server version
    pub dialect: Dialect,

    /// Prefix of every stored procedure name
    pub procedure_prefix: String,

    /// Append a `GRANT EXECUTE` statement to every procedure script
    pub grants: bool,

    /// Principal receiving the grant
    pub grant_principal: String,

    /// Map nullable value-type columns onto non-nullable C# types
    pub convert_nullable_fields: bool,

    /// Add an `@IncludeDisabled` switch to list, count and search procedures
    pub disabled_filter: bool,

    /// Bool column honored by the disabled filter
    pub disabled_column: String,

    /// Render web pages as embedded user controls
    pub embedded_control: bool,

    /// Namespace of generated C# code
    pub namespace: String,

    /// Add an `IsDirty` property to data objects and interfaces
    pub dirty_flag: bool,

    /// Annotate nullable reference types with `?`
    pub nullable_references: bool,

    /// Stylesheet referenced by generated pages
    pub stylesheet: String,

    /// Strings longer than this render as multi-line controls
    pub long_text_threshold: i32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            procedure_prefix: "usp_".to_string(),
            grants: false,
            grant_principal: "public".to_string(),
            convert_nullable_fields: false,
            disabled_filter: false,
            disabled_column: "Disabled".to_string(),
            embedded_control: false,
            namespace: "Data".to_string(),
            dirty_flag: false,
            nullable_references: false,
            stylesheet: "tablesmith".to_string(),
            long_text_threshold: 255,
        }
    }
}

impl GenerationOptions {
    /// Create a new GenerationOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn procedure_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.procedure_prefix = prefix.into();
        self
    }

    /// Grant `EXECUTE` on every procedure to `principal`
    pub fn grants(mut self, principal: impl Into<String>) -> Self {
        self.grants = true;
        self.grant_principal = principal.into();
        self
    }

    pub fn convert_nullable_fields(mut self, enabled: bool) -> Self {
        self.convert_nullable_fields = enabled;
        self
    }

    pub fn disabled_filter(mut self, enabled: bool) -> Self {
        self.disabled_filter = enabled;
        self
    }

    pub fn disabled_column(mut self, column: impl Into<String>) -> Self {
        self.disabled_column = column.into();
        self
    }

    pub fn embedded_control(mut self, enabled: bool) -> Self {
        self.embedded_control = enabled;
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn dirty_flag(mut self, enabled: bool) -> Self {
        self.dirty_flag = enabled;
        self
    }

    pub fn nullable_references(mut self, enabled: bool) -> Self {
        self.nullable_references = enabled;
        self
    }

    pub fn stylesheet(mut self, name: impl Into<String>) -> Self {
        self.stylesheet = name.into();
        self
    }

    /// The Bool column of `table` honored by the disabled filter, when the
    /// filter is enabled and the table carries one.
    pub fn disabled_filter_column<'a>(&self, table: &'a Table) -> Option<&'a Column> {
        if !self.disabled_filter {
            return None;
        }

        table
            .column(&self.disabled_column)
            .filter(|column| column.base_type() == BaseType::Bool)
    }

    pub fn long_text_threshold(mut self, threshold: i32) -> Self {
        self.long_text_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_filter_column() {
        let table = Table::builder("Game")
            .column(Column::new("Id", crate::SqlType::Int).primary_key())
            .column(Column::new("Disabled", crate::SqlType::Bit))
            .column(Column::new("Retired", crate::SqlType::DateTime))
            .build()
            .unwrap();

        assert!(GenerationOptions::default().disabled_filter_column(&table).is_none());

        let options = GenerationOptions::default().disabled_filter(true);
        let column = options.disabled_filter_column(&table).unwrap();
        assert_eq!(column.name, "Disabled");

        // only Bool columns qualify
        let options = options.disabled_column("Retired");
        assert!(options.disabled_filter_column(&table).is_none());
    }

    #[test]
    fn dialect_capabilities() {
        assert!(!Dialect::SqlServer2005.supports_date_types());
        assert!(Dialect::SqlServer2008.supports_date_types());
        assert!(!Dialect::SqlServer2008.supports_offset_fetch());
        assert!(Dialect::SqlServer2012.supports_offset_fetch());
        assert!(!Dialect::SqlServer2012.supports_drop_if_exists());
        assert!(Dialect::SqlServer2016.supports_string_split());
    }

    #[test]
    fn load_from_toml() {
        let options: GenerationOptions = toml::from_str(
            r#"
            dialect = "2016"
            grants = true
            grant_principal = "app_user"
            namespace = "Arcade.Data"
            "#,
        )
        .unwrap();

        assert_eq!(options.dialect, Dialect::SqlServer2016);
        assert!(options.grants);
        assert_eq!(options.grant_principal, "app_user");
        assert_eq!(options.namespace, "Arcade.Data");
        // untouched keys keep their defaults
        assert_eq!(options.procedure_prefix, "usp_");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res = toml::from_str::<GenerationOptions>("dialekt = \"2016\"");
        assert!(res.is_err());
    }
}
