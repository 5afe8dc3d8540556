//! Resource identifiers and their routing.
//!
//! A resource identifier looks like `content://bluebird.tracking.data/boxes`.
//! `route()` turns one into a [`Route`]: the resource kind plus the path
//! identifier for the `*_ID` kinds. Routing never touches the database.

use crate::errors::{AppError, AppResult};
use log::warn;

/// The symbolic name of the whole provider.
pub const AUTHORITY: &str = "bluebird.tracking.data";

pub const SCHEME: &str = "content";

pub const BOX_TABLE: &str = "Box";
pub const OBSERVATION_TABLE: &str = "Observation";

/// Table expression used for the "observations of a box" join.
pub const BOX_OBSERVATION_JOIN: &str = "Box b JOIN Observation o ON b._id = o.box_key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Boxes,
    BoxId,
    Observations,
    ObservationId,
    ObservationsBoxId,
}

/// Path patterns, matched in declaration order. `#` stands for one segment
/// of decimal digits.
const PATTERNS: &[(&[&str], ResourceKind)] = &[
    (&["boxes"], ResourceKind::Boxes),
    (&["box", "#"], ResourceKind::BoxId),
    (&["observations"], ResourceKind::Observations),
    (&["observation", "#"], ResourceKind::ObservationId),
    (&["observations", "box", "#"], ResourceKind::ObservationsBoxId),
];

impl ResourceKind {
    /// Table (or join expression) the kind reads from and writes to.
    pub fn table(&self) -> &'static str {
        match self {
            ResourceKind::Boxes | ResourceKind::BoxId => BOX_TABLE,
            ResourceKind::Observations | ResourceKind::ObservationId => OBSERVATION_TABLE,
            ResourceKind::ObservationsBoxId => BOX_OBSERVATION_JOIN,
        }
    }

    /// Column the path identifier is bound against, if the kind has one.
    pub fn id_column(&self) -> Option<&'static str> {
        match self {
            ResourceKind::BoxId | ResourceKind::ObservationId => Some("_id"),
            ResourceKind::ObservationsBoxId => Some("o.box_key"),
            ResourceKind::Boxes | ResourceKind::Observations => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            ResourceKind::Boxes | ResourceKind::Observations | ResourceKind::ObservationsBoxId
        )
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ResourceKind::Boxes => "vnd.android.cursor.dir/com.bluebird.tracking.data.Box",
            ResourceKind::Observations => {
                "vnd.android.cursor.dir/com.bluebird.tracking.data.Observation"
            }
            ResourceKind::ObservationsBoxId => {
                "vnd.android.cursor.dir/com.bluebird.tracking.data.BoxObservation"
            }
            ResourceKind::BoxId => "vnd.android.cursor.item/com.bluebird.tracking.data.Box",
            ResourceKind::ObservationId => {
                "vnd.android.cursor.item/com.bluebird.tracking.data.Observation"
            }
        }
    }
}

/// A routed resource identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: ResourceKind,
    /// Row id from the last path segment, for the `*_ID` kinds.
    pub id: Option<i64>,
}

/// Resolve a resource identifier to its kind.
pub fn route(uri: &str) -> AppResult<Route> {
    let unrecognized = || {
        warn!("Bad request for {}", uri);
        AppError::UnrecognizedResource(uri.to_string())
    };

    let rest = uri
        .strip_prefix(SCHEME)
        .and_then(|r| r.strip_prefix("://"))
        .ok_or_else(unrecognized)?;

    let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
    if authority != AUTHORITY || path.contains(['?', '#']) {
        return Err(unrecognized());
    }

    let segments: Vec<&str> = path.strip_suffix('/').unwrap_or(path).split('/').collect();

    for (pattern, kind) in PATTERNS {
        if pattern.len() != segments.len() {
            continue;
        }

        let mut id = None;
        let matched = pattern.iter().zip(&segments).all(|(p, s)| {
            if *p == "#" {
                id = parse_id(s);
                id.is_some()
            } else {
                p == s
            }
        });

        if matched {
            return Ok(Route { kind: *kind, id });
        }
    }

    Err(unrecognized())
}

/// A `#` segment is plain ASCII digits that fit an `i64`; no sign, no
/// whitespace.
fn parse_id(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn build(path: &str) -> String {
    format!("{}://{}/{}", SCHEME, AUTHORITY, path)
}

/// URI of every box.
pub fn all_boxes_uri() -> String {
    build("boxes")
}

/// URI of every observation, whatever box it belongs to.
pub fn all_observations_uri() -> String {
    build("observations")
}

/// URI of one box. Does not check the box exists.
pub fn box_uri(box_id: i64) -> String {
    build(&format!("box/{}", box_id))
}

pub fn observation_uri(observation_id: i64) -> String {
    build(&format!("observation/{}", observation_id))
}

/// URI of the observations recorded for one box.
pub fn box_observations_uri(box_id: i64) -> String {
    build(&format!("observations/box/{}", box_id))
}
