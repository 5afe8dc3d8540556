//! Per-kind statement construction: which table, which predicate, which
//! order. Pure; nothing here talks to the engine.

use crate::errors::{AppError, AppResult};
use crate::provider::uri::{ResourceKind, Route};
use crate::provider::values::check_identifier;
use rusqlite::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Columns returned by the join when no projection is given.
const BOX_OBSERVATION_COLUMNS: &[&str] = &[
    "o._id AS _id",
    "o.box_key AS box_key",
    "b.box_number AS box_number",
    "o.obs_date AS obs_date",
    "o.problem AS problem",
    "o.eggs_laid AS eggs_laid",
    "o.eggs_missing AS eggs_missing",
    "o.eggs_destroyed AS eggs_destroyed",
    "o.eggs_non_viable AS eggs_non_viable",
];

/// Everything needed to run one SELECT.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectSpec {
    pub table: &'static str,
    pub columns: Vec<String>,
    pub predicate: Option<String>,
    pub args: Vec<Value>,
    pub order_by: Option<String>,
}

/// Everything needed to run one UPDATE or DELETE.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteSpec {
    pub table: &'static str,
    pub predicate: Option<String>,
    pub args: Vec<Value>,
}

fn route_id(route: &Route) -> AppResult<Value> {
    route
        .id
        .map(Value::Integer)
        .ok_or_else(|| AppError::Other(format!("{:?} route without an id", route.kind)))
}

fn non_empty(selection: Option<&str>) -> Option<&str> {
    selection.map(str::trim).filter(|s| !s.is_empty())
}

fn projection(kind: ResourceKind, requested: Option<&[&str]>) -> AppResult<Vec<String>> {
    let Some(requested) = requested.filter(|r| !r.is_empty()) else {
        return Ok(match kind {
            ResourceKind::ObservationsBoxId => {
                BOX_OBSERVATION_COLUMNS.iter().map(|c| c.to_string()).collect()
            }
            _ => Vec::new(),
        });
    };

    requested
        .iter()
        .map(|col| -> AppResult<String> {
            let col = col.trim();
            if col == "*" {
                return Ok(col.to_string());
            }
            check_identifier(col)?;
            // `_id` is ambiguous in the join; it means the observation.
            if kind == ResourceKind::ObservationsBoxId && col == "_id" {
                Ok("o._id AS _id".to_string())
            } else {
                Ok(col.to_string())
            }
        })
        .collect()
}

fn order_by(kind: ResourceKind, sort: Option<SortDirection>) -> Option<String> {
    match kind {
        ResourceKind::Boxes => Some(format!(
            "_id {}",
            sort.unwrap_or(SortDirection::Asc).as_sql()
        )),
        ResourceKind::Observations => Some(format!(
            "obs_date {}, _id ASC",
            sort.unwrap_or(SortDirection::Desc).as_sql()
        )),
        ResourceKind::ObservationsBoxId => Some(format!(
            "o.obs_date {}, o._id ASC",
            sort.unwrap_or(SortDirection::Desc).as_sql()
        )),
        ResourceKind::BoxId | ResourceKind::ObservationId => None,
    }
}

/// Build the SELECT for a routed query. The path id (if any) is ANDed with
/// the caller's selection and bound ahead of the caller's arguments.
pub fn select_spec(
    route: &Route,
    requested: Option<&[&str]>,
    selection: Option<&str>,
    selection_args: &[Value],
    sort: Option<SortDirection>,
) -> AppResult<SelectSpec> {
    let kind = route.kind;
    let columns = projection(kind, requested)?;
    let selection = non_empty(selection);

    let mut args = Vec::with_capacity(selection_args.len() + 1);
    let predicate = match (kind.id_column(), selection) {
        (Some(id_col), Some(sel)) => {
            args.push(route_id(route)?);
            Some(format!("({} = ?) AND ({})", id_col, sel))
        }
        (Some(id_col), None) => {
            args.push(route_id(route)?);
            Some(format!("{} = ?", id_col))
        }
        (None, Some(sel)) => Some(sel.to_string()),
        (None, None) => None,
    };
    args.extend(selection_args.iter().cloned());

    Ok(SelectSpec {
        table: kind.table(),
        columns,
        predicate,
        args,
        order_by: order_by(kind, sort),
    })
}

/// Scope an update or delete. On the single-item kinds the caller's
/// selection and arguments are discarded: the path id decides the row.
pub fn write_spec(
    uri: &str,
    route: &Route,
    selection: Option<&str>,
    selection_args: &[Value],
) -> AppResult<WriteSpec> {
    match route.kind {
        ResourceKind::Boxes | ResourceKind::Observations => Ok(WriteSpec {
            table: route.kind.table(),
            predicate: non_empty(selection).map(str::to_string),
            args: selection_args.to_vec(),
        }),
        ResourceKind::BoxId | ResourceKind::ObservationId => Ok(WriteSpec {
            table: route.kind.table(),
            predicate: Some("_id = ?".to_string()),
            args: vec![route_id(route)?],
        }),
        ResourceKind::ObservationsBoxId => Err(AppError::UnrecognizedResource(uri.to_string())),
    }
}

/// Table an insert through `route` lands in.
pub fn insert_table(uri: &str, route: &Route) -> AppResult<&'static str> {
    match route.kind {
        ResourceKind::Boxes | ResourceKind::Observations => Ok(route.kind.table()),
        _ => Err(AppError::UnrecognizedResource(uri.to_string())),
    }
}
