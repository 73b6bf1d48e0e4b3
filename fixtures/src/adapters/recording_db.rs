use std::future::{ready, Future};
use std::sync::Mutex;

use tracing::info;

use crate::{DatabaseUser, FixtureError, QueryExecutor};

/// Query stub that logs and records each statement, then resolves to an
/// empty result set. No SQL is ever executed.
pub struct RecordingDb {
    statements: Mutex<Vec<String>>,
}

impl RecordingDb {
    pub fn new() -> Self {
        Self {
            statements: Mutex::new(Vec::new()),
        }
    }

    /// Statements seen so far, in call order.
    pub fn statements(&self) -> Result<Vec<String>, FixtureError> {
        let log = self
            .statements
            .lock()
            .map_err(|_| FixtureError::Query("mutex poisoned".into()))?;
        Ok(log.clone())
    }

    /// Most recent statement, if any.
    pub fn last_statement(&self) -> Result<Option<String>, FixtureError> {
        let log = self
            .statements
            .lock()
            .map_err(|_| FixtureError::Query("mutex poisoned".into()))?;
        Ok(log.last().cloned())
    }

    fn record(&self, sql: &str) -> Result<(), FixtureError> {
        let mut log = self
            .statements
            .lock()
            .map_err(|_| FixtureError::Query("mutex poisoned".into()))?;
        log.push(sql.to_string());
        Ok(())
    }
}

impl Default for RecordingDb {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryExecutor for RecordingDb {
    fn query(
        &self,
        sql: &str,
    ) -> impl Future<Output = Result<Vec<DatabaseUser>, FixtureError>> + Send {
        info!(sql, "Executing");
        ready(self.record(sql).map(|()| Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_resolves_empty() {
        let db = RecordingDb::new();
        let rows = db.query("SELECT * FROM users").await.unwrap();
        assert!(rows.is_empty());
        let rows = db.query("DROP TABLE users").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn records_in_call_order() {
        let db = RecordingDb::new();
        let _ = db.query("first").await;
        let _ = db.query("second").await;
        assert_eq!(db.statements().unwrap(), vec!["first", "second"]);
        assert_eq!(db.last_statement().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn fresh_stub_has_no_statements() {
        let db = RecordingDb::default();
        assert!(db.statements().unwrap().is_empty());
        assert_eq!(db.last_statement().unwrap(), None);
    }
}
