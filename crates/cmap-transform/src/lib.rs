//! Canonical-field normalization.
//!
//! Turns a [`cmap_model::RawRecord`] into a [`cmap_model::NormalizedRecord`]:
//!
//! - **aliases**: data-driven candidate-name lists for the canonical fields
//! - **datetime**: collection date/time parsing to ISO 8601
//! - **position**: combined and separate latitude/longitude parsing
//! - **numeric**: depth unit stripping and numeric cell formatting
//! - **identifier**: snake_case normalization of source field names
//!
//! Normalization is pure and total: malformed values degrade the affected
//! canonical field to `None`, never to an error.

pub mod aliases;
pub mod datetime;
pub mod identifier;
pub mod normalizer;
pub mod numeric;
pub mod position;

pub use aliases::AliasTable;
pub use datetime::{TimePrecision, normalize_time, parse_time_precision};
pub use identifier::normalize_identifier;
pub use normalizer::Normalizer;
pub use numeric::{format_numeric, parse_depth};
pub use position::{parse_combined_position, parse_signed_degrees};
