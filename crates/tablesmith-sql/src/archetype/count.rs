use super::{Build, Context};
use crate::stmt::{Expr, Procedure, Projection, Select, Statement};

use tablesmith_core::{Archetype, Column, Result};

pub(super) fn all(cx: &Context<'_>) -> Result<Build> {
    let select = Select::new(Projection::Count, cx.table).filter(cx.disabled_filter());

    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::CountAll, &[]),
        summary: format!("Counts the rows of {}", cx.names.qualified),
        params: cx.disabled_param().into_iter().collect(),
        body: vec![Statement::Select(select)],
    }))
}

pub(super) fn search(cx: &Context<'_>, columns: &[&Column]) -> Result<Build> {
    let mut params = vec![cx.search_param()];
    params.extend(cx.disabled_param());

    let mut filter = vec![cx.search_filter(columns)];
    filter.extend(cx.disabled_filter());

    let select = Select::new(Projection::Count, cx.table).filter(Expr::and_from_vec(filter));

    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::CountSearch, &[]),
        summary: format!(
            "Counts the rows of {} matching {}",
            cx.names.qualified,
            super::SEARCH_STRING
        ),
        params,
        body: vec![Statement::Select(select)],
    }))
}
