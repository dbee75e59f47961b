//! The catalog presentation engine: pure, synchronous transforms over an
//! in-memory collection of [`cardshelf_core::Item`]s.
//!
//! The engine performs no I/O and never mutates its input. Each operation is
//! total: unparsable prices become `0.0`, unknown columns default, and
//! out-of-range page requests clamp. The caller owns all mutable state (the
//! loaded collection and the [`SessionState`]) and re-runs the engine on
//! every interaction.

pub mod categories;
pub mod normalize;
pub mod paginate;
pub mod price;
pub mod query;
pub mod row;
pub mod sample;
pub mod session;

pub use categories::build_category_list;
pub use normalize::normalize_rows;
pub use paginate::{paginate, Page};
pub use price::{parse_price, parse_price_value};
pub use query::{run_query, PriceRange, SortKey, ViewQuery};
pub use row::RawRow;
pub use sample::sample_featured;
pub use session::SessionState;
