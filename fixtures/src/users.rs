//! User listing fixture. A clean starting point for prompting exercises:
//! add functions from a prompt, refine them iteratively, generate docs.

use chrono::{DateTime, NaiveDate, Utc};
use feruca::{Collator, Tailoring};

use crate::User;

/// The three sample users shipped with the fixture. Bob is unverified.
pub fn sample_users() -> Vec<User> {
    vec![
        user("1", "alice@example.com", "Alice", true, (2024, 1, 15)),
        user("2", "bob@example.com", "Bob", false, (2024, 2, 20)),
        user("3", "carol@example.com", "Carol", true, (2024, 3, 10)),
    ]
}

/// Returns all users who have verified their email address.
/// Results are sorted alphabetically by email.
pub fn get_verified_users(user_list: &[User]) -> Vec<User> {
    // CLDR root tailoring, non-ignorable punctuation, case-sensitive ties
    let mut collator = Collator::new(Tailoring::default(), false, true);
    let mut verified: Vec<User> = user_list
        .iter()
        .filter(|user| user.is_verified)
        .cloned()
        .collect();
    verified.sort_by(|a, b| collator.collate(a.email.as_str(), b.email.as_str()));
    verified
}

fn user(id: &str, email: &str, name: &str, is_verified: bool, ymd: (i32, u32, u32)) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        is_verified,
        created_at: utc_midnight(ymd),
    }
}

fn utc_midnight((y, m, d): (i32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}
