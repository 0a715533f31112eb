//! Core data types for structure type name resolution
//!
//! # Key Types
//!
//! - **`StructureType`**: The raw numeric tag carried in the `sType` field of
//!   every extensible API structure
//! - **`ResolveMode`**: Whether the resolver runs with its name table active
//!   (diagnostic builds) or stripped (production builds)

/// Raw numeric value of a structure type tag.
///
/// The external enumeration is a C enum with a signed 32-bit underlying
/// representation, so every `i32` is a legal input: values outside the known
/// enumerators are the expected "table is stale" case, not an error.
///
/// # Example
///
/// ```rust
/// use vk_stringify::StructureType;
///
/// let tag: StructureType = 14; // VK_STRUCTURE_TYPE_IMAGE_CREATE_INFO
/// ```
pub type StructureType = i32;

/// Build-mode selector for the resolver.
///
/// Diagnostic builds carry the full name table and warn when a lookup misses;
/// production builds skip both and render every tag as its decimal value.
/// The process-wide resolver picks its mode from the compiled profile via
/// [`ResolveMode::for_build`]; tests inject either variant directly so both
/// paths run under any profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Name table active, misses emit an advisory warning.
    Diagnostic,

    /// No table, no warnings, every tag renders as decimal.
    Production,
}

impl ResolveMode {
    /// Mode implied by the compiled profile.
    ///
    /// Mirrors the `NDEBUG` convention of the surrounding driver: debug
    /// builds get the table, optimized builds do not.
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            ResolveMode::Diagnostic
        } else {
            ResolveMode::Production
        }
    }

    /// True when the name table is active.
    pub fn is_diagnostic(self) -> bool {
        matches!(self, ResolveMode::Diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tracks_build_profile() {
        assert_eq!(
            ResolveMode::for_build().is_diagnostic(),
            cfg!(debug_assertions)
        );
    }
}
