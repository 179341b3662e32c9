use super::{Build, Context, ParamPolicy, ID_LIST, SKIP, TAKE};
use crate::stmt::{Expr, Page, Param, Procedure, Select, Statement};

use tablesmith_core::{Archetype, Column, Result};

pub(super) fn single(cx: &Context<'_>) -> Result<Build> {
    let select = Select::new(cx.projection(), cx.table).filter(cx.key_filter());

    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::SelectSingle, &[]),
        summary: format!("Selects one row of {} by primary key", cx.names.qualified),
        params: cx.params(ParamPolicy::PrimaryKeyOnly),
        body: vec![Statement::Select(select)],
    }))
}

pub(super) fn many(cx: &Context<'_>) -> Result<Build> {
    let select = Select::new(cx.projection(), cx.table)
        .filter(Some(cx.key_in_id_list()?))
        .order_by(cx.explicit_order_by()?);

    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::SelectMany, &[]),
        summary: format!("Selects the rows of {} listed in {ID_LIST}", cx.names.qualified),
        params: vec![Param::id_list(ID_LIST)],
        body: vec![Statement::Select(select)],
    }))
}

pub(super) fn many_by(cx: &Context<'_>, differentiators: &[&Column]) -> Result<Build> {
    let mut params: Vec<_> = differentiators
        .iter()
        .map(|column| cx.param(column))
        .collect();
    params.extend(cx.disabled_param());

    let mut filter: Vec<_> = differentiators
        .iter()
        .map(|column| cx.equals_param(column))
        .collect();
    filter.extend(cx.disabled_filter());

    let select = Select::new(cx.projection(), cx.table)
        .filter(Expr::and_from_vec(filter))
        .order_by(cx.explicit_order_by()?);

    let fields = differentiators
        .iter()
        .map(|column| cx.column(column).bracketed)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::SelectManyBy, differentiators),
        summary: format!("Selects the rows of {} matching {fields}", cx.names.qualified),
        params,
        body: vec![Statement::Select(select)],
    }))
}

pub(super) fn all(cx: &Context<'_>) -> Result<Build> {
    let select = Select::new(cx.projection(), cx.table)
        .filter(cx.disabled_filter())
        .order_by(cx.explicit_order_by()?);

    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::SelectAll, &[]),
        summary: format!("Selects every row of {}", cx.names.qualified),
        params: cx.disabled_param().into_iter().collect(),
        body: vec![Statement::Select(select)],
    }))
}

pub(super) fn search(cx: &Context<'_>, columns: &[&Column]) -> Result<Build> {
    let mut params = vec![
        cx.search_param(),
        Param::new(SKIP, "INT").default("0"),
        Param::new(TAKE, "INT").default("50"),
    ];
    params.extend(cx.disabled_param());

    let mut filter = vec![cx.search_filter(columns)];
    filter.extend(cx.disabled_filter());

    let select = Select::new(cx.projection(), cx.table)
        .filter(Expr::and_from_vec(filter))
        .order_by(cx.order_by()?)
        .page(Page {
            skip: SKIP.to_string(),
            take: TAKE.to_string(),
        });

    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::Search, &[]),
        summary: format!(
            "Selects one page of the rows of {} matching {}",
            cx.names.qualified,
            super::SEARCH_STRING
        ),
        params,
        body: vec![Statement::Select(select)],
    }))
}
