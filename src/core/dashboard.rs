use crate::domain::model::{DashboardOverview, Period};
use crate::domain::ports::{ConfigProvider, FeaturedStore, RestaurantCatalog};

/// Aggregates the numbers shown on the admin landing page. This is a
/// non-critical read path: a collaborator fault degrades the affected field
/// to its default instead of failing the whole overview.
pub struct Dashboard<S: FeaturedStore, R: RestaurantCatalog, C: ConfigProvider> {
    store: S,
    catalog: R,
    config: C,
}

impl<S: FeaturedStore, R: RestaurantCatalog, C: ConfigProvider> Dashboard<S, R, C> {
    pub fn new(store: S, catalog: R, config: C) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    pub async fn overview(&self, period: Period) -> DashboardOverview {
        let max_slots = self.config.max_slots();

        let featured_count = match self.store.load(period).await {
            Ok(state) => state.entries.len(),
            Err(e) => {
                tracing::warn!("featured store unavailable for overview: {}", e);
                0
            }
        };

        let restaurant_count = match self.catalog.restaurant_count().await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!("catalog unavailable for overview: {}", e);
                0
            }
        };

        DashboardOverview {
            featured_count,
            slots_free: max_slots.saturating_sub(featured_count),
            restaurant_count,
        }
    }
}
