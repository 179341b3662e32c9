use super::Serializer;

use tablesmith_core::{Dialect, GenerationOptions};

impl<'a> Serializer<'a> {
    pub fn new(options: &'a GenerationOptions) -> Serializer<'a> {
        Serializer {
            dialect: options.dialect,
            grant: options
                .grants
                .then_some(options.grant_principal.as_str()),
        }
    }

    pub fn sql_server(dialect: Dialect) -> Serializer<'a> {
        Serializer {
            dialect,
            grant: None,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Type of the parameter carrying an id list
    pub(super) fn id_list_type(&self) -> &'static str {
        if self.dialect.supports_string_split() {
            "NVARCHAR(MAX)"
        } else {
            "XML"
        }
    }
}
