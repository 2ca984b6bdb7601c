pub mod access;
pub mod dashboard;
pub mod featured;

pub use crate::domain::model::{
    AccessDecision, DashboardOverview, FeaturedEntry, FeaturedList, Identity, Period, PeriodState,
    Restaurant,
};
pub use crate::domain::ports::{
    ConfigProvider, FeaturedStore, IdentityProvider, RestaurantCatalog, StoreOutcome,
};
pub use crate::utils::error::Result;
