//! URI-routed access to boxes and observations.
//!
//! `DataProvider` resolves a resource identifier (see [`uri`]) to a table,
//! predicate and ordering, runs one statement against the store and tells
//! registered observers about every successful write.
//!
//! ```text
//! content://bluebird.tracking.data/boxes
//! content://bluebird.tracking.data/box/<id>
//! content://bluebird.tracking.data/observations
//! content://bluebird.tracking.data/observation/<id>
//! content://bluebird.tracking.data/observations/box/<id>
//! ```
//!
//! Operations take `&mut self`; callers sharing a provider between threads
//! wrap it in their own lock. The observer registry is shared and
//! thread-safe.

pub mod notify;
pub mod query;
pub mod uri;
pub mod values;

pub use notify::{ChangeNotifier, ChangeObserver, ObserverId};
pub use query::SortDirection;
pub use uri::{ResourceKind, Route};
pub use values::ContentValues;

use crate::db::pool::DbPool;
use crate::db::queries::{execute_delete, execute_insert, execute_query, execute_update};
use crate::errors::{AppError, AppResult};
use crate::models::row_set::RowSet;
use log::{debug, error};
use rusqlite::types::Value;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

pub struct DataProvider {
    db: DbPool,
    notifier: Arc<ChangeNotifier>,
}

/// Engine failures are logged before they reach the caller.
fn logged<T>(op: &str, uri: &str, res: AppResult<T>) -> AppResult<T> {
    if let Err(e) = &res {
        error!("Error during {} on {}: {}", op, uri, e);
    }
    res
}

impl DataProvider {
    /// Provider over a database file, opened on first use.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_pool(DbPool::new(path), Arc::new(ChangeNotifier::new()))
    }

    pub fn open_in_memory() -> Self {
        Self::with_pool(DbPool::in_memory(), Arc::new(ChangeNotifier::new()))
    }

    pub fn with_pool(db: DbPool, notifier: Arc<ChangeNotifier>) -> Self {
        debug!("Creating DataProvider for {}", db.location().display());
        Self { db, notifier }
    }

    pub fn notifier(&self) -> &Arc<ChangeNotifier> {
        &self.notifier
    }

    /// Underlying pool, for callers that need the raw connection
    /// (journal, maintenance).
    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.db
    }

    /// Type of data a URI returns.
    pub fn get_type(&self, uri: &str) -> AppResult<&'static str> {
        Ok(uri::route(uri)?.kind.mime_type())
    }

    /// Query through a URI.
    ///
    /// * `projection` - columns to return, `None` for all of them
    /// * `selection` - extra predicate (`"box_number = ?"`), ANDed with the
    ///   one the URI implies
    /// * `selection_args` - values for the `?` in `selection`
    /// * `sort` - direction of the primary ordering key
    ///
    /// The returned rows carry `uri` as their notification URI.
    pub fn query(
        &mut self,
        uri: &str,
        projection: Option<&[&str]>,
        selection: Option<&str>,
        selection_args: &[Value],
        sort: Option<SortDirection>,
    ) -> AppResult<RowSet> {
        let route = uri::route(uri)?;
        let spec = query::select_spec(&route, projection, selection, selection_args, sort)?;
        debug!("query {} -> {:?}", uri, route.kind);

        let conn = self.db.readable()?;
        let rows = logged(
            "query",
            uri,
            execute_query(
                conn,
                spec.table,
                &spec.columns,
                spec.predicate.as_deref(),
                &spec.args,
                spec.order_by.as_deref(),
            ),
        )?;

        Ok(rows.with_notification_uri(uri))
    }

    /// Insert through a collection URI and return the URI of the new row.
    pub fn insert(&mut self, uri: &str, values: &ContentValues) -> AppResult<String> {
        let route = uri::route(uri)?;
        let table = query::insert_table(uri, &route)?;
        let columns: Vec<&str> = values.columns().collect();
        for c in &columns {
            values::check_identifier(c)?;
        }
        let vals: Vec<Value> = values.values().cloned().collect();
        debug!("insert {} -> {}", uri, table);

        let conn = self.db.writable()?;
        let new_id = logged("insert", uri, execute_insert(conn, table, &columns, &vals))?;

        let new_uri = match route.kind {
            ResourceKind::Boxes => uri::box_uri(new_id),
            ResourceKind::Observations => uri::observation_uri(new_id),
            _ => return Err(AppError::UnrecognizedResource(uri.to_string())),
        };

        self.notifier.notify_change(&new_uri);
        self.notifier.notify_change(uri);
        Ok(new_uri)
    }

    /// Update through a URI and return how many rows changed.
    ///
    /// On `/box/<id>` and `/observation/<id>` the caller's selection and
    /// arguments are ignored; the id in the path picks the row.
    pub fn update(
        &mut self,
        uri: &str,
        values: &ContentValues,
        selection: Option<&str>,
        selection_args: &[Value],
    ) -> AppResult<usize> {
        let route = uri::route(uri)?;
        let spec = query::write_spec(uri, &route, selection, selection_args)?;
        let columns: Vec<&str> = values.columns().collect();
        for c in &columns {
            values::check_identifier(c)?;
        }
        let vals: Vec<Value> = values.values().cloned().collect();
        debug!("update {} -> {}", uri, spec.table);

        let conn = self.db.writable()?;
        let changed = logged(
            "update",
            uri,
            execute_update(
                conn,
                spec.table,
                &columns,
                &vals,
                spec.predicate.as_deref(),
                &spec.args,
            ),
        )?;

        self.notifier.notify_change(uri);
        Ok(changed)
    }

    /// Delete through a URI and return how many rows went. Same scoping
    /// rule as [`DataProvider::update`].
    pub fn delete(
        &mut self,
        uri: &str,
        selection: Option<&str>,
        selection_args: &[Value],
    ) -> AppResult<usize> {
        let route = uri::route(uri)?;
        let spec = query::write_spec(uri, &route, selection, selection_args)?;
        debug!("delete {} -> {}", uri, spec.table);

        let conn = self.db.writable()?;
        let deleted = logged(
            "delete",
            uri,
            execute_delete(conn, spec.table, spec.predicate.as_deref(), &spec.args),
        )?;

        self.notifier.notify_change(uri);
        Ok(deleted)
    }

    /// Watch the URI a result was queried through.
    pub fn watch(&self, rows: &RowSet) -> (ObserverId, Receiver<String>) {
        self.notifier.subscribe(rows.notification_uri())
    }

    pub fn register_observer(&self, uri: &str, observer: Arc<dyn ChangeObserver>) -> ObserverId {
        self.notifier.register(uri, observer)
    }

    pub fn unregister_observer(&self, id: ObserverId) -> bool {
        self.notifier.unregister(id)
    }

    /// Release the connection. The next request reopens it.
    pub fn shutdown(&mut self) {
        self.db.close();
    }
}
