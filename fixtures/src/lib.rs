//! Review fixtures: small, intentionally flawed programs for code-review,
//! debugging and security-review demonstrations.
//!
//! This crate holds the fixture data types, the query port used by the
//! vulnerable API fixture, and the error definitions. The fixtures themselves
//! live in their own modules and never call into each other:
//!
//! - [`cart`]: shopping cart with planted logic bugs
//! - [`users`]: verified-user listing, a clean starting point for prompting
//! - [`vulnerable_api`]: SQL-building handlers with planted security defects
//! - [`findings`]: what a reviewer is expected to report for each fixture
//!
//! Every planted defect is part of the observable behavior. Do not fix them.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of a shopping cart. `id` is the uniqueness key; nothing else is
/// validated, so negative quantities and prices are representable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl CartItem {
    pub fn new<S: Into<String>>(id: S, name: S, price: f64, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Line total as the cart computes it (`price * quantity`).
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// A user record as shown by the listing fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Row shape returned by the query port.
///
/// `password` is stored and serialized in plain text. That is one of the
/// planted defects of the API fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Port for executing raw SQL text. The API fixture owns one of these
/// instead of reaching for a global database handle.
pub trait QueryExecutor: Send + Sync {
    fn query(
        &self,
        sql: &str,
    ) -> impl Future<Output = Result<Vec<DatabaseUser>, FixtureError>> + Send;
}

/// Errors surfaced by the fixture crate.
///
/// Fixture operations never fail on bad input; only the query port and
/// name lookups report errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FixtureError {
    #[error("query failed: {0}")]
    Query(String),
    #[error("unknown fixture: {0}")]
    UnknownFixture(String),
}

/// Return a short about/version line for binaries to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{} - review fixtures loaded", pkg, ver)
}

pub mod adapters;
pub mod cart;
pub mod findings;
pub mod users;
pub mod vulnerable_api;
