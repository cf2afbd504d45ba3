//! Best-effort location enrichment contract.
//!
//! The analysis client consumes location as two separate operations that
//! must never be conflated: reading the cached value (never blocks) and
//! requesting a refresh (fire-and-forget). A refresh's completion is only
//! ever observed by a later call reading the cache again.

/// Source of optional city/country enrichment for analysis requests.
pub trait LocationProvider: Send + Sync {
    /// Whether the user has granted this provider permission to share
    /// location data.
    fn is_authorized(&self) -> bool;

    /// The cached city, if a fix has been obtained. Never blocks.
    fn cached_city(&self) -> Option<String>;

    /// The cached country, if a fix has been obtained. Never blocks.
    fn cached_country(&self) -> Option<String>;

    /// Requests a single background update of the cached values.
    ///
    /// Must return immediately; implementations kick off their own
    /// background work and update the cache whenever it completes.
    fn request_refresh(&self);
}

/// A [`LocationProvider`] with fixed values and a no-op refresh.
///
/// Authorized exactly when both city and country are configured; used by
/// the CLI (values from config) and as the disabled default.
pub struct StaticLocation {
    city: Option<String>,
    country: Option<String>,
}

impl StaticLocation {
    #[must_use]
    pub fn new(city: Option<String>, country: Option<String>) -> Self {
        Self { city, country }
    }

    /// A provider that never reports authorization.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None, None)
    }
}

impl LocationProvider for StaticLocation {
    fn is_authorized(&self) -> bool {
        self.city.is_some() && self.country.is_some()
    }

    fn cached_city(&self) -> Option<String> {
        self.city.clone()
    }

    fn cached_country(&self) -> Option<String> {
        self.country.clone()
    }

    fn request_refresh(&self) {
        // Static values: nothing to refresh.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorized_only_with_both_values() {
        assert!(StaticLocation::new(Some("Berlin".into()), Some("DE".into())).is_authorized());
        assert!(!StaticLocation::new(Some("Berlin".into()), None).is_authorized());
        assert!(!StaticLocation::new(None, Some("DE".into())).is_authorized());
        assert!(!StaticLocation::disabled().is_authorized());
    }

    #[test]
    fn cached_values_are_returned_as_configured() {
        let provider = StaticLocation::new(Some("Paris".into()), Some("FR".into()));
        assert_eq!(provider.cached_city().as_deref(), Some("Paris"));
        assert_eq!(provider.cached_country().as_deref(), Some("FR"));
        provider.request_refresh();
        assert_eq!(provider.cached_city().as_deref(), Some("Paris"));
    }
}
