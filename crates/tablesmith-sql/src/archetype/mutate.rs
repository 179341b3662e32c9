use super::{Build, Context, ParamPolicy};
use crate::stmt::{Assignment, Expr, Insert, Procedure, Projection, Select, Statement, Update};

use tablesmith_core::{Archetype, Result};

pub(super) fn insert(cx: &Context<'_>) -> Result<Build> {
    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::Insert, &[]),
        summary: format!("Inserts one row into {}", cx.names.qualified),
        params: cx.params(ParamPolicy::AllColumns),
        body: insert_statements(cx),
    }))
}

pub(super) fn update(cx: &Context<'_>) -> Result<Build> {
    let Some(update) = update_statement(cx) else {
        return Ok(Build::Degraded(format!(
            "table {} has no updatable columns",
            cx.names.qualified
        )));
    };

    // An identity outside the key is neither assigned nor matched
    let policy = match cx.table.identity() {
        Some(identity) if !identity.primary_key => ParamPolicy::ExcludeIdentities,
        _ => ParamPolicy::AllColumns,
    };

    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::Update, &[]),
        summary: format!("Updates one row of {} by primary key", cx.names.qualified),
        params: cx.params(policy),
        body: vec![update],
    }))
}

/// Updates the row when its key exists and inserts it otherwise. Tables
/// whose columns are all key or engine-assigned only insert.
pub(super) fn set(cx: &Context<'_>) -> Result<Build> {
    let exists = Select::new(Projection::One, cx.table).filter(cx.key_filter());

    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::Set, &[]),
        summary: format!(
            "Updates one row of {} by primary key, inserting it when missing",
            cx.names.qualified
        ),
        params: cx.params(ParamPolicy::AllColumns),
        body: vec![Statement::IfExists {
            query: Box::new(exists),
            then: update_statement(cx).into_iter().collect(),
            otherwise: insert_statements(cx),
        }],
    }))
}

fn insert_statements(cx: &Context<'_>) -> Vec<Statement> {
    let columns: Vec<_> = cx.table.columns().filter(|c| c.is_writable()).collect();

    let mut stmts = vec![Statement::Insert(Insert {
        target: cx.table.into(),
        columns: columns.iter().map(|column| column.name.clone()).collect(),
        values: columns
            .iter()
            .map(|column| Expr::param(cx.column(column).parameter))
            .collect(),
    })];

    if let Some(identity) = cx.table.identity() {
        stmts.push(Statement::assign(
            cx.column(identity).parameter,
            Expr::func("SCOPE_IDENTITY"),
        ));
    }

    stmts
}

/// `None` when no column is left to assign
fn update_statement(cx: &Context<'_>) -> Option<Statement> {
    let assignments: Vec<_> = cx
        .table
        .non_key_columns()
        .filter(|column| column.is_writable())
        .map(|column| Assignment {
            column: column.name.clone(),
            value: Expr::param(cx.column(column).parameter),
        })
        .collect();

    if assignments.is_empty() {
        return None;
    }

    Some(Statement::Update(Update {
        target: cx.table.into(),
        assignments,
        filter: cx.key_filter(),
    }))
}
