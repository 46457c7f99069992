//! Course lookup by name.
//!
//! - `linear_search` - substring match, valid for any store order
//! - `binary_search_by_name` - exact match, requires a name-sorted store

mod binary;
mod linear;

pub use binary::*;
pub use linear::*;
