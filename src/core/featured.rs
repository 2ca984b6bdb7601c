use crate::domain::model::{FeaturedEntry, FeaturedList, Period, PeriodState};
use crate::domain::ports::{ConfigProvider, FeaturedStore, RestaurantCatalog, StoreOutcome};
use crate::utils::error::{AdminError, Result};

/// Maintains the per-period featured list: slot cap, one entry per
/// restaurant, contiguous 0-based ranks.
///
/// Writes go through the store's conditional write. Each operation re-reads
/// current state, checks its preconditions, and commits against the snapshot
/// version; a detected conflict is retried exactly once (the retry re-runs
/// the precondition checks, so a lost race surfaces as the matching typed
/// error rather than a double write).
pub struct FeaturedSelector<S: FeaturedStore, R: RestaurantCatalog, C: ConfigProvider> {
    store: S,
    catalog: R,
    config: C,
}

impl<S: FeaturedStore, R: RestaurantCatalog, C: ConfigProvider> FeaturedSelector<S, R, C> {
    pub fn new(store: S, catalog: R, config: C) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    /// Entries for the period, ordered by rank ascending.
    pub async fn list(&self, period: Period) -> Result<FeaturedList> {
        let state = self.store.load(period).await?;
        let entries = compact_ranks(state.entries);
        let total = entries.len();
        Ok(FeaturedList { entries, total })
    }

    /// Appends `restaurant_id` at the tail rank of the period.
    pub async fn add(&self, period: Period, restaurant_id: &str) -> Result<FeaturedEntry> {
        if !self.catalog.restaurant_exists(restaurant_id).await? {
            return Err(AdminError::NotFound {
                id: restaurant_id.to_string(),
            });
        }

        let mut retried = false;
        loop {
            let state = self.store.load(period).await?;
            self.check_add_preconditions(&state, period, restaurant_id)?;

            let mut entries = compact_ranks(state.entries);
            let entry = FeaturedEntry {
                restaurant_id: restaurant_id.to_string(),
                rank: entries.len() as u32,
            };
            entries.push(entry.clone());

            match self.store.store(period, state.version, entries).await? {
                StoreOutcome::Committed => {
                    tracing::info!("featured {} in {} at rank {}", restaurant_id, period, entry.rank);
                    return Ok(entry);
                }
                StoreOutcome::Conflict if !retried => {
                    tracing::debug!("conditional write conflict for {}, retrying once", period);
                    retried = true;
                }
                StoreOutcome::Conflict => {
                    return Err(AdminError::ProviderUnavailable {
                        message: format!("featured store for {} kept conflicting", period),
                    });
                }
            }
        }
    }

    /// Removes the matching entry and compacts the remaining ranks to
    /// `0..n`, preserving relative order.
    pub async fn remove(&self, period: Period, restaurant_id: &str) -> Result<()> {
        let mut retried = false;
        loop {
            let state = self.store.load(period).await?;

            let mut entries = compact_ranks(state.entries);
            let before = entries.len();
            entries.retain(|e| e.restaurant_id != restaurant_id);
            if entries.len() == before {
                return Err(AdminError::NotFound {
                    id: restaurant_id.to_string(),
                });
            }
            let entries = compact_ranks(entries);

            match self.store.store(period, state.version, entries).await? {
                StoreOutcome::Committed => {
                    tracing::info!("unfeatured {} from {}", restaurant_id, period);
                    return Ok(());
                }
                StoreOutcome::Conflict if !retried => {
                    tracing::debug!("conditional write conflict for {}, retrying once", period);
                    retried = true;
                }
                StoreOutcome::Conflict => {
                    return Err(AdminError::ProviderUnavailable {
                        message: format!("featured store for {} kept conflicting", period),
                    });
                }
            }
        }
    }

    fn check_add_preconditions(
        &self,
        state: &PeriodState,
        period: Period,
        restaurant_id: &str,
    ) -> Result<()> {
        if state
            .entries
            .iter()
            .any(|e| e.restaurant_id == restaurant_id)
        {
            return Err(AdminError::DuplicateEntry {
                id: restaurant_id.to_string(),
                period: period.key(),
            });
        }

        let max_slots = self.config.max_slots();
        if state.entries.len() >= max_slots {
            return Err(AdminError::CapacityExceeded {
                period: period.key(),
                max_slots,
            });
        }

        Ok(())
    }
}

/// Stable re-rank rule: order by stored rank, then reassign 0..n.
fn compact_ranks(mut entries: Vec<FeaturedEntry>) -> Vec<FeaturedEntry> {
    entries.sort_by_key(|e| e.rank);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i as u32;
    }
    entries
}
