//! Configuration options for Dublin Core conversion.
//!
//! This module provides the [`ConversionConfig`] struct which controls how the
//! converter reacts when an attribute cannot be derived.

/// Configuration for Dublin Core conversion.
///
/// # Examples
///
/// ```
/// use marc_dc::dublin_core::ConversionConfig;
///
/// // Default configuration: unusable source fields leave the attribute absent
/// let config = ConversionConfig::default();
/// assert!(!config.strict);
///
/// // Strict configuration: the first underivable attribute fails the conversion
/// let config = ConversionConfig::new().with_strict_mode(true);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionConfig {
    /// Strict mode.
    ///
    /// When false (default), a missing control field, a too-short leader or
    /// control field, or a malformed subfield selection only affects the attribute
    /// it feeds, and conversion continues. When true, conversion stops with
    /// [`MarcError::AttributeUnavailable`](crate::MarcError::AttributeUnavailable).
    pub strict: bool,
}

impl ConversionConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables strict mode.
    #[must_use]
    pub const fn with_strict_mode(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }
}
