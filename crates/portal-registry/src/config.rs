use portal_core::ReservedNames;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Construction-time settings for a [`RegistryService`](crate::RegistryService).
#[derive(Debug, Clone, TypedBuilder)]
pub struct RegistryConfig {
    /// Codes that may never be registered.
    #[builder(default)]
    pub reserved: ReservedNames,
    /// Upper bound for a single storage round trip. `None` waits indefinitely.
    #[builder(default, setter(strip_option))]
    pub storage_timeout: Option<Duration>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
