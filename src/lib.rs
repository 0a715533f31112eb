//! vk-stringify - Human-readable names for Vulkan structure type tags
//!
//! Debug-time introspection helper for the driver: turns the raw numeric
//! `sType` tag of an API structure into its canonical enumerator name for
//! logs and diagnostics. The mapping lives in a process-wide table built once
//! from hand-maintained registry data; lookups are total, never fail, and
//! fall back to the decimal form of the value when the table has fallen
//! behind the external headers. Production builds skip the table entirely and
//! render every tag as decimal.
//!
//! This crate names tags, nothing more: it does not parse, validate, or
//! interpret structures, and the outcome of a lookup never influences driver
//! behavior.
//!
//! # Example
//!
//! ```rust
//! let text = vk_stringify::stringify(14);
//! // Diagnostic builds name the tag, production builds render "14";
//! // either way the result is non-empty.
//! assert!(!text.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod registry;

/// Table construction, the shared resolver, and the total query operation
pub mod resolver;

/// Tag representation and build-mode selection
pub mod types;

// Re-export main types
pub use resolver::{stringify, table_build_count, NameResolver, ResolverStats, ResolverStatsSnapshot};
pub use types::{ResolveMode, StructureType};
