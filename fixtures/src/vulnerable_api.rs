//! API fixture with planted security defects, for security-review demos.
//!
//! Expected findings:
//! 1. SQL injection in every handler (obvious)
//! 2. Password returned to the caller (obvious)
//! 3. No input validation on ids or search terms (medium)
//! 4. `delete_user` never checks who is asking (subtle, often missed)

use crate::{DatabaseUser, FixtureError, QueryExecutor};

/// User handlers over an injected query executor.
pub struct UserApi<Q: QueryExecutor> {
    db: Q,
}

impl<Q: QueryExecutor> UserApi<Q> {
    pub fn new(db: Q) -> Self {
        Self { db }
    }

    /// Access the executor, e.g. to inspect what a recording stub saw.
    pub fn db(&self) -> &Q {
        &self.db
    }

    // VULNERABLE: SQL injection, and the row goes out with its password
    pub async fn get_user(&self, user_id: &str) -> Result<Option<DatabaseUser>, FixtureError> {
        let query = format!("SELECT * FROM users WHERE id = '{}'", user_id);
        let results = self.db.query(&query).await?;
        Ok(results.into_iter().next())
    }

    // VULNERABLE: no input validation, search term goes straight into LIKE
    pub async fn search_users(&self, search_term: &str) -> Result<Vec<DatabaseUser>, FixtureError> {
        let query = format!("SELECT * FROM users WHERE email LIKE '%{}%'", search_term);
        self.db.query(&query).await
    }

    // VULNERABLE: SQL injection
    pub async fn delete_user(&self, user_id: &str) -> Result<(), FixtureError> {
        self.db
            .query(&format!("DELETE FROM users WHERE id = '{}'", user_id))
            .await?;
        Ok(())
    }
}
