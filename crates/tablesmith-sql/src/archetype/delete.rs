use super::{Build, Context, ParamPolicy, ID_LIST};
use crate::stmt::{Delete, Param, Procedure, Statement};

use tablesmith_core::{Archetype, Result};

pub(super) fn single(cx: &Context<'_>) -> Result<Build> {
    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::DeleteSingle, &[]),
        summary: format!("Deletes one row of {} by primary key", cx.names.qualified),
        params: cx.params(ParamPolicy::PrimaryKeyOnly),
        body: vec![Statement::Delete(Delete {
            from: cx.table.into(),
            filter: cx.key_filter(),
        })],
    }))
}

pub(super) fn many(cx: &Context<'_>) -> Result<Build> {
    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::DeleteMany, &[]),
        summary: format!("Deletes the rows of {} listed in {ID_LIST}", cx.names.qualified),
        params: vec![Param::id_list(ID_LIST)],
        body: vec![Statement::Delete(Delete {
            from: cx.table.into(),
            filter: Some(cx.key_in_id_list()?),
        })],
    }))
}

pub(super) fn all(cx: &Context<'_>) -> Result<Build> {
    Ok(Build::Procedure(Procedure {
        name: cx.procedure_name(Archetype::DeleteAll, &[]),
        summary: format!("Deletes every row of {}", cx.names.qualified),
        params: cx.params(ParamPolicy::None),
        body: vec![Statement::Delete(Delete {
            from: cx.table.into(),
            filter: None,
        })],
    }))
}
