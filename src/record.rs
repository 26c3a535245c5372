//! The record shapes used by the recipes.

use crate::time::Rfc822zTime;
use serde::{Deserialize, Serialize};

/// A flat record of a string and an integer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

/// One line of an [`Order`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
}

/// A nested record whose `date_ordered` goes through the RFC 822 codec.
///
/// Fields serialize in declaration order, which matches the order the
/// records are usually written in:
///
/// ```
/// use json_recipes::Order;
///
/// let json = r#"{"id":"12345","items":[{"id":"xyz123","name":"Thing 1"}],"date_ordered":"01 May 20 13:01 +0000","customer_id":"3"}"#;
/// let order: Order = serde_json::from_str(json).unwrap();
/// assert_eq!(order.date_ordered.month(), Some(chrono::Month::May));
/// assert_eq!(serde_json::to_string(&order).unwrap(), json);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<Item>,
    /// Absent or `null` both decode to the unset time.
    #[serde(default)]
    pub date_ordered: Rfc822zTime,
    pub customer_id: String,
}
