//! Demo scenarios, one per fixture. Each returns a serializable report so the
//! runner can print it as text or JSON.

use fixtures::adapters::recording_db::RecordingDb;
use fixtures::cart::ShoppingCart;
use fixtures::findings::Finding;
use fixtures::users::{get_verified_users, sample_users};
use fixtures::vulnerable_api::UserApi;
use fixtures::{CartItem, DatabaseUser, FixtureError, User};
use serde::Serialize;
use tracing::info;

/// Cart state captured after one scenario step.
#[derive(Debug, Serialize)]
pub struct CartStep {
    pub action: String,
    pub items: Vec<CartItem>,
    pub total: f64,
}

/// What the API handlers did against the recording stub.
#[derive(Debug, Serialize)]
pub struct ApiReport {
    pub user_id: String,
    pub search_term: String,
    pub get_user: Option<DatabaseUser>,
    pub search_results: Vec<DatabaseUser>,
    pub statements: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FullReport {
    pub cart: Vec<CartStep>,
    pub verified_users: Vec<User>,
    pub api: ApiReport,
    pub findings: Vec<Finding>,
}

fn snapshot(cart: &mut ShoppingCart, action: &str) -> CartStep {
    CartStep {
        action: action.to_string(),
        total: cart.total(),
        items: cart.items().clone(),
    }
}

/// Add items, remove an id that was never added, then set a negative quantity.
pub fn run_cart() -> Vec<CartStep> {
    info!("running cart scenario");
    let mut cart = ShoppingCart::new();
    let mut steps = vec![snapshot(&mut cart, "start with an empty cart")];

    cart.add_item(CartItem::new("sku-1", "Keyboard", 49.99, 1));
    cart.add_item(CartItem::new("sku-2", "Mouse", 19.99, 2));
    steps.push(snapshot(&mut cart, "add sku-1 x1 and sku-2 x2"));

    cart.remove_item("sku-404");
    steps.push(snapshot(&mut cart, "remove sku-404 (never added)"));

    cart.update_quantity("sku-1", -5);
    steps.push(snapshot(&mut cart, "update sku-1 quantity to -5"));

    steps
}

pub fn run_users() -> Vec<User> {
    info!("running user listing scenario");
    get_verified_users(&sample_users())
}

pub async fn run_api(user_id: &str, search_term: &str) -> Result<ApiReport, FixtureError> {
    info!(user_id, search_term, "running vulnerable api scenario");
    let api = UserApi::new(RecordingDb::new());

    let get_user = api.get_user(user_id).await?;
    let search_results = api.search_users(search_term).await?;
    api.delete_user(user_id).await?;

    Ok(ApiReport {
        user_id: user_id.to_string(),
        search_term: search_term.to_string(),
        get_user,
        search_results,
        statements: api.db().statements()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_scenario_shows_each_bug() {
        let steps = run_cart();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].total, 0.0);
        assert_eq!(steps[1].items.len(), 2);
        // the mouse was dropped even though sku-404 never existed
        assert_eq!(steps[2].items.len(), 1);
        assert_eq!(steps[2].items[0].id, "sku-1");
        assert!(steps[3].total < 0.0);
    }

    #[test]
    fn users_scenario() {
        let emails: Vec<_> = run_users().into_iter().map(|u| u.email).collect();
        assert_eq!(emails, vec!["alice@example.com", "carol@example.com"]);
    }

    #[tokio::test]
    async fn api_scenario_records_three_statements() {
        let report = run_api("1 OR 1=1", "x").await.unwrap();
        assert_eq!(report.get_user, None);
        assert!(report.search_results.is_empty());
        assert_eq!(
            report.statements,
            vec![
                "SELECT * FROM users WHERE id = '1 OR 1=1'",
                "SELECT * FROM users WHERE email LIKE '%x%'",
                "DELETE FROM users WHERE id = '1 OR 1=1'",
            ]
        );
    }
}
