use super::{keywords, normalize_identifier, prefix_if_numeric};
use std_util::str;

/// A database name together with its normalized identifier form.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    raw: String,
    normalized: String,
}

impl Name {
    pub fn new(raw: &str) -> Self {
        Name {
            raw: raw.to_string(),
            normalized: normalize_identifier(raw),
        }
    }

    /// The name exactly as the database knows it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized identifier, before any case transform
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// `UpperCamelCase` type name
    pub fn class_name(&self) -> String {
        prefix_if_numeric(str::upper_camel_case(&self.normalized))
    }

    pub fn interface_name(&self) -> String {
        format!("I{}", self.class_name())
    }

    pub fn enum_name(&self) -> String {
        format!("{}Enum", self.class_name())
    }

    /// Name of the data-access wrapper class
    pub fn dal_name(&self) -> String {
        format!("{}Dal", self.class_name())
    }

    pub fn property_name(&self) -> String {
        self.class_name()
    }

    /// Private backing field, `_lowerCamel`
    pub fn field_name(&self) -> String {
        format!("_{}", str::camel_case(&self.normalized))
    }

    /// `lowerCamelCase` local variable, escaped when it is a keyword
    pub fn local_name(&self) -> String {
        let local = prefix_if_numeric(str::camel_case(&self.normalized));

        if keywords::is_csharp_keyword(&local) {
            format!("@{local}")
        } else {
            local
        }
    }

    /// The raw database name in brackets, with `]` escaped
    pub fn bracketed(&self) -> String {
        format!("[{}]", self.raw.replace(']', "]]"))
    }

    /// Stored-procedure parameter name
    pub fn parameter_name(&self) -> String {
        format!("@{}", self.property_name())
    }

    /// Human readable label, `Title Case`
    pub fn display_name(&self) -> String {
        let display = str::title_case(&self.normalized);
        if display.is_empty() {
            self.raw.clone()
        } else {
            display
        }
    }
}
