use super::{BaseType, SqlType};

/// A table column as described by the schema loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The database storage type of the column.
    pub ty: SqlType,

    /// Declared length for character and binary types. `-1` means `MAX`,
    /// `0` means not specified.
    pub length: i32,

    /// Numeric precision
    pub precision: u8,

    /// Numeric scale, or fractional seconds precision for time types
    pub scale: u8,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// True if the storage engine assigns the value on insert
    pub identity: bool,

    /// Default-value expression as reported by the database, e.g. `((0))` or
    /// `(getdate())`. Empty when the column has none.
    pub default: String,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<SqlType>) -> Column {
        Column {
            name: name.into(),
            ty: ty.into(),
            length: 0,
            precision: 0,
            scale: 0,
            nullable: false,
            primary_key: false,
            identity: false,
            default: String::new(),
        }
    }

    pub fn length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    /// Declares the column as `MAX`-length.
    pub fn max(mut self) -> Self {
        self.length = -1;
        self
    }

    pub fn precision(mut self, precision: u8, scale: u8) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn identity(mut self) -> Self {
        self.identity = true;
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn base_type(&self) -> BaseType {
        self.ty.base_type()
    }

    /// True for `MAX` columns and the legacy unbounded types.
    pub fn is_max(&self) -> bool {
        self.ty.is_unbounded() || (self.ty.accepts_max() && self.length < 0)
    }

    /// True when callers may supply a value for the column on insert or
    /// update. Identity and rowversion columns are assigned by the engine.
    pub fn is_writable(&self) -> bool {
        !self.identity && self.ty != SqlType::Timestamp
    }

    pub fn has_default(&self) -> bool {
        !self.default.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods() {
        let column = Column::new("Price", SqlType::Decimal)
            .precision(10, 2)
            .nullable()
            .default_value("((0))");

        assert_eq!(column.precision, 10);
        assert_eq!(column.scale, 2);
        assert!(column.nullable);
        assert!(column.has_default());
        assert_eq!(column.base_type(), BaseType::Float);
    }

    #[test]
    fn max_columns() {
        assert!(Column::new("Body", SqlType::NVarChar).max().is_max());
        assert!(Column::new("Notes", SqlType::NText).is_max());
        assert!(!Column::new("Name", SqlType::NVarChar).length(50).is_max());
        // `-1` on a type without MAX support is not MAX
        assert!(!Column::new("Code", SqlType::Char).max().is_max());
    }

    #[test]
    fn writable_columns() {
        assert!(!Column::new("Id", SqlType::Int).identity().is_writable());
        assert!(!Column::new("Version", SqlType::Timestamp).is_writable());
        assert!(Column::new("Name", SqlType::NVarChar).is_writable());
    }
}
