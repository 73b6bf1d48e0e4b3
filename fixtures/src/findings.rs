//! Catalog of the defects planted in each fixture, with how hard each one
//! is expected to be for a reviewer to spot.

use serde::Serialize;

use crate::FixtureError;

/// The fixtures shipped by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixture {
    Cart,
    UserListing,
    VulnerableApi,
}

impl Fixture {
    pub const ALL: [Fixture; 3] = [Fixture::Cart, Fixture::UserListing, Fixture::VulnerableApi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Fixture::Cart => "cart",
            Fixture::UserListing => "user_listing",
            Fixture::VulnerableApi => "vulnerable_api",
        }
    }

    pub fn parse(s: &str) -> Result<Self, FixtureError> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "cart" => Ok(Fixture::Cart),
            "user_listing" | "users" => Ok(Fixture::UserListing),
            "vulnerable_api" | "api" => Ok(Fixture::VulnerableApi),
            _ => Err(FixtureError::UnknownFixture(s.to_string())),
        }
    }
}

/// How readily a reviewer is expected to notice a defect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Detectability {
    Obvious,
    Medium,
    Subtle,
}

impl Detectability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Detectability::Obvious => "obvious",
            Detectability::Medium => "medium",
            Detectability::Subtle => "subtle",
        }
    }
}

/// One planted defect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub fixture: Fixture,
    pub code: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub detectability: Detectability,
    /// False when the defect is a misleading comment rather than behavior.
    pub reproducible: bool,
}

/// Every planted defect, grouped by fixture in declaration order.
pub fn catalog() -> Vec<Finding> {
    vec![
        Finding {
            fixture: Fixture::Cart,
            code: "CART-001",
            title: "removing an unknown id deletes the last item",
            location: "ShoppingCart::remove_item",
            detectability: Detectability::Obvious,
            reproducible: true,
        },
        Finding {
            fixture: Fixture::Cart,
            code: "CART-002",
            title: "quantity is not validated; negative totals are possible",
            location: "ShoppingCart::update_quantity",
            detectability: Detectability::Obvious,
            reproducible: true,
        },
        Finding {
            fixture: Fixture::Cart,
            code: "CART-003",
            title: "comment claims a crash on empty cart that never happens",
            location: "ShoppingCart::total",
            detectability: Detectability::Medium,
            reproducible: false,
        },
        Finding {
            fixture: Fixture::VulnerableApi,
            code: "API-001",
            title: "SQL injection through string interpolation",
            location: "UserApi::get_user, UserApi::search_users, UserApi::delete_user",
            detectability: Detectability::Obvious,
            reproducible: true,
        },
        Finding {
            fixture: Fixture::VulnerableApi,
            code: "API-002",
            title: "plaintext password stored and returned to the caller",
            location: "DatabaseUser, UserApi::get_user",
            detectability: Detectability::Obvious,
            reproducible: true,
        },
        Finding {
            fixture: Fixture::VulnerableApi,
            code: "API-003",
            title: "no input validation on ids or search terms",
            location: "UserApi::get_user, UserApi::search_users, UserApi::delete_user",
            detectability: Detectability::Medium,
            reproducible: true,
        },
        Finding {
            fixture: Fixture::VulnerableApi,
            code: "API-004",
            title: "delete performs no authorization check",
            location: "UserApi::delete_user",
            detectability: Detectability::Subtle,
            reproducible: true,
        },
    ]
}

pub fn findings_for(fixture: Fixture) -> Vec<Finding> {
    catalog()
        .into_iter()
        .filter(|f| f.fixture == fixture)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_parsing() {
        assert_eq!(Fixture::parse("cart"), Ok(Fixture::Cart));
        assert_eq!(Fixture::parse("USERS"), Ok(Fixture::UserListing));
        assert_eq!(Fixture::parse("user-listing"), Ok(Fixture::UserListing));
        assert_eq!(Fixture::parse("api"), Ok(Fixture::VulnerableApi));
        assert_eq!(
            Fixture::parse("checkout"),
            Err(FixtureError::UnknownFixture("checkout".into()))
        );
        for f in Fixture::ALL {
            assert_eq!(Fixture::parse(f.as_str()), Ok(f));
        }
    }

    #[test]
    fn user_listing_has_no_planted_defects() {
        assert!(findings_for(Fixture::UserListing).is_empty());
    }

    #[test]
    fn api_has_four_findings_with_one_subtle() {
        let api = findings_for(Fixture::VulnerableApi);
        assert_eq!(api.len(), 4);
        let subtle: Vec<_> = api
            .iter()
            .filter(|f| f.detectability == Detectability::Subtle)
            .collect();
        assert_eq!(subtle.len(), 1);
        assert_eq!(subtle[0].location, "UserApi::delete_user");
    }

    #[test]
    fn only_the_crash_comment_is_not_reproducible() {
        let codes: Vec<_> = catalog()
            .into_iter()
            .filter(|f| !f.reproducible)
            .map(|f| f.code)
            .collect();
        assert_eq!(codes, vec!["CART-003"]);
    }

    #[test]
    fn input_validation_finding_covers_every_handler() {
        let api003 = catalog()
            .into_iter()
            .find(|f| f.code == "API-003")
            .unwrap();
        for handler in ["get_user", "search_users", "delete_user"] {
            assert!(api003.location.contains(handler), "missing {handler}");
        }
    }

    #[test]
    fn codes_are_unique() {
        let all = catalog();
        let mut codes: Vec<_> = all.iter().map(|f| f.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn serializes_enums_as_snake_case() {
        let json = serde_json::to_string(&findings_for(Fixture::VulnerableApi)[0]).unwrap();
        assert!(json.contains("\"fixture\":\"vulnerable_api\""));
        assert!(json.contains("\"detectability\":\"obvious\""));
    }
}
