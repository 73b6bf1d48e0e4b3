//! Shopping cart fixture for code-review and debugging demos.
//!
//! Planted bugs, by operation:
//! - `remove_item` with an unknown id removes the last item in the cart.
//! - `update_quantity` accepts any value, so totals can go negative.
//! - `total` is documented upstream as crashing on an empty cart. It does
//!   not; the claim itself is the mistake a reviewer should catch.
//!
//! Scenario that triggers the bugs:
//! 1. add an item
//! 2. remove an item that doesn't exist (index -1, the last item goes)
//! 3. update a quantity to -5 (negative total)

use tracing::debug;

use crate::CartItem;

/// In-memory cart. Items keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct ShoppingCart {
    items: Vec<CartItem>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, merging quantities when the id is already present.
    pub fn add_item(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => {
                existing.quantity += item.quantity;
                debug!(id = %existing.id, quantity = existing.quantity, "merged cart item");
            }
            None => {
                debug!(id = %item.id, "appended cart item");
                self.items.push(item);
            }
        }
    }

    // BUG: an unknown id maps to index -1 and the splice still runs
    pub fn remove_item(&mut self, item_id: &str) {
        let index = find_index(&self.items, item_id);
        let removed = splice_remove(&mut self.items, index);
        debug!(item_id, index, removed = ?removed.map(|i| i.id), "remove_item");
    }

    // BUG: panics on an empty cart
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |sum, item| sum + item.line_total())
    }

    // BUG: quantity is never validated
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
            item.quantity = quantity;
        }
    }

    /// Live view of the items; changes made through it land in the cart.
    pub fn items(&mut self) -> &mut Vec<CartItem> {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Linear search returning `-1` when no item matches.
fn find_index(items: &[CartItem], id: &str) -> isize {
    items
        .iter()
        .position(|i| i.id == id)
        .map_or(-1, |pos| pos as isize)
}

/// Remove one element the way `Array.prototype.splice(start, 1)` does.
///
/// A negative `start` counts back from the end and is clamped at zero, so
/// `-1` removes the last element. A start at or past the end removes nothing.
fn splice_remove<T>(items: &mut Vec<T>, start: isize) -> Option<T> {
    let len = items.len() as isize;
    let start = if start < 0 {
        (len + start).max(0)
    } else {
        start.min(len)
    };
    let idx = start as usize;
    (idx < items.len()).then(|| items.remove(idx))
}
