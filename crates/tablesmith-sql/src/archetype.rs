//! Per-archetype procedure builders.
//!
//! Each builder turns table metadata into a [`Procedure`] tree, or into a
//! [`Build::Degraded`] reason when the table lacks the structure the archetype
//! needs. Contract violations are reported as errors before anything is built.

mod count;
mod delete;
mod mutate;
mod select;

use crate::stmt::{Expr, IdList, OrderBy, Param, Procedure, Projection};

use tablesmith_core::{
    err, mapping, procedure::procedure_name, Archetype, Column, ColumnNames, Error,
    GenerationOptions, ProcedureName, Result, Selection, SqlType, Table, TableNames,
};

/// Outcome of building one archetype
#[derive(Debug)]
pub(crate) enum Build {
    Procedure(Procedure),

    /// The table cannot support the archetype; carries the reason
    Degraded(String),
}

/// Which columns become procedure parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParamPolicy {
    /// Every writable column; identity columns are `OUTPUT`
    AllColumns,

    PrimaryKeyOnly,

    /// Every writable column, with no identity parameter
    ExcludeIdentities,

    None,
}

pub(crate) use tablesmith_core::procedure::{
    ID_LIST, INCLUDE_DISABLED, SEARCH_STRING, SEARCH_STRING_LENGTH, SKIP, TAKE,
};

/// Everything a builder reads while building one procedure
pub(crate) struct Context<'a> {
    pub(crate) table: &'a Table,
    pub(crate) names: TableNames,
    pub(crate) options: &'a GenerationOptions,
    pub(crate) selection: &'a Selection,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        table: &'a Table,
        options: &'a GenerationOptions,
        selection: &'a Selection,
    ) -> Result<Context<'a>> {
        table.ensure_columns()?;

        Ok(Context {
            table,
            names: TableNames::new(table),
            options,
            selection,
        })
    }

    pub(crate) fn procedure_name(
        &self,
        archetype: Archetype,
        differentiators: &[&Column],
    ) -> ProcedureName {
        procedure_name(self.table, archetype, differentiators, self.options)
    }

    pub(crate) fn column(&self, column: &Column) -> ColumnNames {
        self.names.column(column)
    }

    pub(crate) fn param(&self, column: &Column) -> Param {
        Param::column(self.column(column).parameter, column, self.options.dialect)
    }

    pub(crate) fn params(&self, policy: ParamPolicy) -> Vec<Param> {
        match policy {
            ParamPolicy::AllColumns => self
                .table
                .columns()
                .filter(|column| column.is_writable() || column.identity)
                .map(|column| {
                    let param = self.param(column);
                    if column.identity {
                        param.output()
                    } else {
                        param
                    }
                })
                .collect(),
            ParamPolicy::PrimaryKeyOnly => self
                .table
                .primary_key_columns()
                .map(|column| self.param(column))
                .collect(),
            ParamPolicy::ExcludeIdentities => self
                .table
                .columns()
                .filter(|column| column.is_writable())
                .map(|column| self.param(column))
                .collect(),
            ParamPolicy::None => vec![],
        }
    }

    /// Every column, in declared order
    pub(crate) fn projection(&self) -> Projection {
        Projection::Columns(
            self.table
                .columns()
                .map(|column| column.name.clone())
                .collect(),
        )
    }

    /// `[Key] = @Key` for every primary key column
    pub(crate) fn key_filter(&self) -> Option<Expr> {
        Expr::and_from_vec(
            self.table
                .primary_key_columns()
                .map(|column| self.equals_param(column))
                .collect(),
        )
    }

    pub(crate) fn equals_param(&self, column: &Column) -> Expr {
        Expr::eq(
            Expr::column(&column.name),
            Expr::param(self.column(column).parameter),
        )
    }

    /// `[Key] IN (...)` over the id-list parameter. Callers ensure the key
    /// has exactly one column.
    pub(crate) fn key_in_id_list(&self) -> Result<Expr> {
        let key = self
            .table
            .single_key()
            .ok_or_else(|| err!("table `{}` has no single key column", self.table.name()))?;

        Ok(Expr::in_id_list(
            Expr::column(&key.name),
            IdList {
                param: ID_LIST.to_string(),
                item_ty: mapping::sql_type_syntax(key, self.options.dialect),
            },
        ))
    }

    /// The Bool column honored by the disabled filter, when enabled
    pub(crate) fn disabled_column(&self) -> Option<&'a Column> {
        self.options.disabled_filter_column(self.table)
    }

    /// `@IncludeDisabled BIT = 0`, when the filter applies
    pub(crate) fn disabled_param(&self) -> Option<Param> {
        self.disabled_column()
            .map(|_| Param::new(INCLUDE_DISABLED, "BIT").default("0"))
    }

    /// `(@IncludeDisabled = 1 OR [Disabled] = 0)`, when the filter applies
    pub(crate) fn disabled_filter(&self) -> Option<Expr> {
        self.disabled_column().map(|column| {
            Expr::Or(vec![
                Expr::eq(Expr::param(INCLUDE_DISABLED), Expr::literal("1")),
                Expr::eq(Expr::column(&column.name), Expr::literal("0")),
            ])
        })
    }

    /// Caller-supplied sort columns, falling back to the primary key
    pub(crate) fn order_by(&self) -> Result<Vec<OrderBy>> {
        let columns = if self.selection.sort.is_empty() {
            self.table.primary_key_columns().collect()
        } else {
            self.table.resolve(&self.selection.sort)?
        };

        Ok(columns
            .into_iter()
            .map(|column| OrderBy::asc(&column.name))
            .collect())
    }

    /// Caller-supplied sort columns only; nothing is inferred
    pub(crate) fn explicit_order_by(&self) -> Result<Vec<OrderBy>> {
        Ok(self
            .table
            .resolve(&self.selection.sort)?
            .into_iter()
            .map(|column| OrderBy::asc(&column.name))
            .collect())
    }

    /// Resolves the search columns; an empty list is a contract violation
    pub(crate) fn search_columns(&self) -> Result<Vec<&'a Column>> {
        if self.selection.search.is_empty() {
            return Err(Error::invalid_argument(format!(
                "no search fields given for table `{}`",
                self.table.name()
            )));
        }
        self.table.resolve(&self.selection.search)
    }

    /// Matches the search string against every search column. A `NULL`
    /// search string matches every row.
    pub(crate) fn search_filter(&self, columns: &[&Column]) -> Expr {
        let mut operands = vec![Expr::is_null(Expr::param(SEARCH_STRING))];

        for column in columns {
            let mut expr = Expr::column(&column.name);
            if !matches!(
                column.ty,
                SqlType::Char | SqlType::NChar | SqlType::VarChar | SqlType::NVarChar
            ) {
                expr = Expr::cast(expr, "NVARCHAR(MAX)");
            }
            operands.push(Expr::contains(expr, Expr::param(SEARCH_STRING)));
        }

        Expr::Or(operands)
    }

    pub(crate) fn search_param(&self) -> Param {
        Param::new(SEARCH_STRING, format!("NVARCHAR({SEARCH_STRING_LENGTH})")).default("NULL")
    }

    pub(crate) fn degraded_no_key(&self) -> Build {
        Build::Degraded(format!(
            "table {} has no primary key",
            self.names.qualified
        ))
    }
}

/// Builds the procedure for `archetype`. `differentiators` are the resolved
/// criteria columns and only matter for select-by.
pub(crate) fn build(
    cx: &Context<'_>,
    archetype: Archetype,
    differentiators: &[&Column],
) -> Result<Build> {
    // Contract checks come first so a degraded table still reports bad input
    let search = if archetype.takes_search() {
        cx.search_columns()?
    } else {
        vec![]
    };

    if archetype.takes_differentiators() && differentiators.is_empty() {
        return Err(Error::invalid_argument(format!(
            "no criteria fields given for table `{}`",
            cx.table.name()
        )));
    }

    if archetype.requires_primary_key() && !cx.table.has_primary_key() {
        return Ok(cx.degraded_no_key());
    }

    if archetype.requires_single_key() && cx.table.single_key().is_none() {
        return Ok(Build::Degraded(format!(
            "table {} has a composite primary key; id lists need exactly one key column",
            cx.names.qualified
        )));
    }

    match archetype {
        Archetype::SelectSingle => select::single(cx),
        Archetype::SelectMany => select::many(cx),
        Archetype::SelectManyBy => select::many_by(cx, differentiators),
        Archetype::SelectAll => select::all(cx),
        Archetype::Search => select::search(cx, &search),
        Archetype::Insert => mutate::insert(cx),
        Archetype::Update => mutate::update(cx),
        Archetype::Set => mutate::set(cx),
        Archetype::DeleteSingle => delete::single(cx),
        Archetype::DeleteMany => delete::many(cx),
        Archetype::DeleteAll => delete::all(cx),
        Archetype::CountAll => count::all(cx),
        Archetype::CountSearch => count::search(cx, &search),
    }
}
