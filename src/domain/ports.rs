use crate::domain::model::{FeaturedEntry, Identity, Period, PeriodState};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Hosted identity provider. Only these three operations are consumed; no
/// provider-specific field beyond the email ever crosses this boundary.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity>;
    async fn sign_out(&self) -> Result<()>;
    async fn current_user(&self) -> Result<Option<Identity>>;
}

/// Restaurant catalog. Deletion cascades are the catalog's responsibility;
/// the core observes them only as `restaurant_exists` turning false.
#[async_trait]
pub trait RestaurantCatalog: Send + Sync {
    async fn restaurant_exists(&self, id: &str) -> Result<bool>;
    async fn restaurant_count(&self) -> Result<usize>;
}

/// Result of a conditional write against a [`PeriodState`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Committed,
    /// The snapshot version no longer matches; the caller must re-read.
    Conflict,
}

/// Period-scoped featured-list store. `store` must be atomic with respect to
/// the version check: two writers racing on the same snapshot must not both
/// commit. State is re-read on every operation, never cached across calls.
#[async_trait]
pub trait FeaturedStore: Send + Sync {
    async fn load(&self, period: Period) -> Result<PeriodState>;
    async fn store(
        &self,
        period: Period,
        expected_version: u64,
        entries: Vec<FeaturedEntry>,
    ) -> Result<StoreOutcome>;
}

/// Read-only deployment configuration, resolved once per process.
pub trait ConfigProvider: Send + Sync {
    fn auth_url(&self) -> &str;
    fn auth_api_key(&self) -> &str;
    fn auth_configured(&self) -> bool;
    fn production(&self) -> bool;
    fn max_slots(&self) -> usize;
    fn demo_email(&self) -> &str;
    fn data_path(&self) -> &str;
}
