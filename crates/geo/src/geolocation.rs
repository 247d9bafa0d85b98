//! Current-position lookup through an injected platform provider.
//!
//! The platform (browser, OS service, configured fallback) is passed in as a
//! [`PositionProvider`] so the lookup can run against a fake in tests.

use crate::{Coordinate, GeoPoint, LocationError, PositionError};
use std::future::Future;
use std::time::Duration;

/// Options forwarded to the provider on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    /// Maximum time the provider may take to answer.
    pub timeout: Duration,
    /// Oldest cached position the provider may return.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(5 * 60),
        }
    }
}

/// A platform geolocation service.
///
/// Implementations must honour `options.timeout` and report expiry as
/// [`PositionError::Timeout`].
pub trait PositionProvider {
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Coordinate, PositionError>> + Send;
}

/// Placeholder provider type for platforms without geolocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProvider;

impl PositionProvider for NoProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, PositionError> {
        Err(PositionError::PositionUnavailable)
    }
}

/// Provider that always answers with a configured position.
#[derive(Debug, Clone, Copy)]
pub struct StaticProvider(pub Coordinate);

impl PositionProvider for StaticProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, PositionError> {
        Ok(self.0)
    }
}

/// Geolocation capability: an optional provider plus request options.
#[derive(Debug, Clone)]
pub struct Geolocation<P = NoProvider> {
    provider: Option<P>,
    options: PositionOptions,
}

impl Geolocation<NoProvider> {
    /// A platform with no geolocation support.
    pub fn unsupported() -> Self {
        Self {
            provider: None,
            options: PositionOptions::default(),
        }
    }
}

impl<P: PositionProvider> Geolocation<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider: Some(provider),
            options: PositionOptions::default(),
        }
    }

    /// Wraps an optional provider; `None` behaves like [`Geolocation::unsupported`].
    pub fn from_option(provider: Option<P>) -> Self {
        Self {
            provider,
            options: PositionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &PositionOptions {
        &self.options
    }

    pub fn is_supported(&self) -> bool {
        self.provider.is_some()
    }
}

/// Asks the provider for the current position.
///
/// Issues exactly one provider request and never retries; provider errors
/// are returned unchanged.
pub async fn get_current_location<P: PositionProvider>(
    geolocation: &Geolocation<P>,
) -> Result<GeoPoint, LocationError> {
    let Some(provider) = geolocation.provider.as_ref() else {
        tracing::debug!("Geolocation requested without a provider");
        return Err(LocationError::Unsupported);
    };

    match provider.current_position(&geolocation.options).await {
        Ok(coord) => {
            tracing::debug!(lat = coord.latitude, lng = coord.longitude, "Position acquired");
            Ok(coord.into())
        }
        Err(err) => {
            tracing::debug!(code = err.code(), %err, "Position request failed");
            Err(err.into())
        }
    }
}
