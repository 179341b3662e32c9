use tablesmith_core::{BaseType, Column, GenerationOptions, SqlType};

/// Rows of a multi-line control for `MAX` and legacy unbounded columns
const MAX_ROWS: u32 = 10;
const MIN_ROWS: u32 = 3;

/// Characters per row used to size a multi-line control
const ROW_WIDTH: i32 = 100;

/// The input control rendering one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Toggle for Bool columns
    CheckBox,

    /// Date and time picker
    Date(DateMode),

    /// Text area for long strings
    MultiLine { rows: u32 },

    /// Text box, bounded by the declared length when there is one
    SingleLine { max_length: Option<i32> },

    /// Engine-assigned column, displayed but never edited
    ReadOnly,

    /// Binary and unmapped columns have no textual control
    Omitted,
}

/// Which part of a point in time a [`Control::Date`] edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    Date,
    DateTime,
    Time,
}

impl Control {
    pub fn for_column(column: &Column, options: &GenerationOptions) -> Control {
        if column.ty.is_unmapped() || column.ty.is_binary() {
            return Control::Omitted;
        }

        if !column.is_writable() {
            return Control::ReadOnly;
        }

        match column.base_type() {
            BaseType::Bool => Control::CheckBox,
            BaseType::Time => Control::Date(DateMode::of(&column.ty)),
            BaseType::String if is_long_text(column, options) => Control::MultiLine {
                rows: rows(column),
            },
            BaseType::String if column.length > 0 => Control::SingleLine {
                max_length: Some(column.length),
            },
            _ => Control::SingleLine { max_length: None },
        }
    }

    /// Suffix of the control's identifier, after the property name
    pub fn suffix(self) -> &'static str {
        match self {
            Control::CheckBox => "CheckBox",
            Control::Date(_) => "Picker",
            Control::MultiLine { .. } | Control::SingleLine { .. } => "TextBox",
            Control::ReadOnly | Control::Omitted => "Value",
        }
    }

    /// Whether the control writes its value back into the data object
    pub fn is_editable(self) -> bool {
        !matches!(self, Control::ReadOnly | Control::Omitted)
    }

    pub fn is_rendered(self) -> bool {
        self != Control::Omitted
    }
}

impl DateMode {
    fn of(ty: &SqlType) -> DateMode {
        match ty {
            SqlType::Date => DateMode::Date,
            SqlType::Time => DateMode::Time,
            _ => DateMode::DateTime,
        }
    }

    /// .NET format string of the value shown in a text-based picker
    pub fn format(self) -> &'static str {
        match self {
            DateMode::Date => "yyyy-MM-dd",
            DateMode::DateTime => "yyyy-MM-ddTHH:mm",
            DateMode::Time => "hh\\:mm",
        }
    }
}

fn is_long_text(column: &Column, options: &GenerationOptions) -> bool {
    column.is_max() || column.ty == SqlType::Xml || column.length > options.long_text_threshold
}

fn rows(column: &Column) -> u32 {
    if column.is_max() || column.length <= 0 {
        return MAX_ROWS;
    }

    ((column.length / ROW_WIDTH) as u32).clamp(MIN_ROWS, MAX_ROWS)
}
