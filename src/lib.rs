//! # JSON recipes
//!
//! Small, self-contained patterns for moving records in and out of JSON with
//! [Serde] and [`serde_json`]:
//!
//! - [`file`]: one record to and from a file or an in-memory buffer,
//! - [`stream`]: many whitespace-separated values in one byte stream,
//! - [`time`]: a timestamp field with its own textual layout,
//!   `"01 May 20 13:01 +0000"`, embedded in an ordinary derived record.
//!
//! [Serde]: https://serde.rs
//!
//! # Custom field codecs
//!
//! A field type that implements `Serialize` and `Deserialize` by hand is
//! picked up by `#[derive]` on the enclosing struct with no extra glue. The
//! [`Order`] record carries an [`Rfc822zTime`] this way.
//!
//! ```
//! use json_recipes::{Order, Result};
//!
//! fn main() -> Result<()> {
//!     let data = r#"
//!         {
//!             "id": "12345",
//!             "items": [
//!                 { "id": "xyz123", "name": "Thing 1" },
//!                 { "id": "abc789", "name": "Thing 2" }
//!             ],
//!             "date_ordered": "01 May 20 13:01 +0000",
//!             "customer_id": "3"
//!         }"#;
//!
//!     let order: Order = serde_json::from_str(data).map_err(json_recipes::Error::from)?;
//!     assert_eq!(order.date_ordered.month().map(|m| m.name()), Some("May"));
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`Error`], which can be classified into a
//! [`Category`]. Timestamp decoding distinguishes text in the wrong layout
//! ([`Category::FormatMismatch`]) from a token of the wrong JSON type
//! ([`Category::TypeMismatch`]).

#[doc(inline)]
pub use crate::error::{Category, Error, Result};
#[doc(inline)]
pub use crate::record::{Item, Order, Person};
#[doc(inline)]
pub use crate::time::Rfc822zTime;

pub mod error;
pub mod file;
pub mod record;
pub mod stream;
pub mod time;
