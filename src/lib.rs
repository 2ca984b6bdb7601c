pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::{HttpIdentityProvider, JsonCatalog, JsonStore};
pub use core::access::{AccessGate, LOGIN_PATH};
pub use core::dashboard::Dashboard;
pub use core::featured::FeaturedSelector;
pub use domain::model::{
    AccessDecision, DashboardOverview, FeaturedEntry, FeaturedList, Identity, Period, PeriodState,
    Restaurant,
};
pub use domain::ports::{
    ConfigProvider, FeaturedStore, IdentityProvider, RestaurantCatalog, StoreOutcome,
};
pub use utils::error::{AdminError, Result};
