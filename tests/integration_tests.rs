use httpmock::prelude::*;
use resto_admin::{
    AccessDecision, AccessGate, AdminError, Dashboard, FeaturedSelector, HttpIdentityProvider,
    JsonCatalog, JsonStore, Period, Restaurant, TomlConfig, LOGIN_PATH,
};
use tempfile::TempDir;

fn write_catalog(dir: &TempDir, restaurants: &[(&str, &str)]) {
    let records: Vec<Restaurant> = restaurants
        .iter()
        .map(|(id, name)| Restaurant {
            id: id.to_string(),
            name: name.to_string(),
            city: "Portsmouth".to_string(),
        })
        .collect();
    std::fs::write(
        dir.path().join("restaurants.json"),
        serde_json::to_string_pretty(&records).unwrap(),
    )
    .unwrap();
}

fn config_for(auth_url: &str, data_path: &str, production: bool) -> TomlConfig {
    TomlConfig::from_toml_str(&format!(
        r#"
        [auth]
        url = "{}"
        api_key = "anon-key"

        [deployment]
        production = {}
        data_path = "{}"

        [featured]
        max_slots = 2
        "#,
        auth_url, production, data_path
    ))
    .unwrap()
}

#[tokio::test]
async fn test_login_then_dashboard_access_end_to_end() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/token")
            .query_param("grant_type", "password");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "access_token": "jwt-abc",
                "user": { "email": "owner@resto.local" }
            }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/user");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "email": "owner@resto.local" }));
    });

    let dir = TempDir::new().unwrap();
    let data_path = dir.path().to_str().unwrap().to_string();
    let config = config_for(&server.base_url(), &data_path, true);

    let provider = HttpIdentityProvider::new(&server.base_url(), "anon-key");
    let gate = AccessGate::new(provider, config);

    // Unauthenticated production request redirects to login.
    assert_eq!(
        gate.resolve_access().await,
        AccessDecision::Redirect(LOGIN_PATH.to_string())
    );

    let identity = gate.login("owner@resto.local", "hunter2").await.unwrap();
    assert_eq!(identity.email, "owner@resto.local");

    assert_eq!(
        gate.resolve_access().await,
        AccessDecision::Allow("owner@resto.local".to_string())
    );

    assert_eq!(
        gate.logout().await,
        AccessDecision::Redirect(LOGIN_PATH.to_string())
    );
    assert_eq!(
        gate.resolve_access().await,
        AccessDecision::Redirect(LOGIN_PATH.to_string())
    );
}

#[tokio::test]
async fn test_unreachable_auth_provider_degrades_per_decision_table() {
    // Nothing listens on this port; any call that reaches the network is a
    // transport fault.
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().to_str().unwrap().to_string();
    let config = config_for("http://127.0.0.1:9", &data_path, true);

    let provider = HttpIdentityProvider::new("http://127.0.0.1:9", "anon-key");
    let gate = AccessGate::new(provider, config);

    // No session resolves to the configured decision, never an error.
    assert_eq!(
        gate.resolve_access().await,
        AccessDecision::Redirect(LOGIN_PATH.to_string())
    );

    // Login does hit the network, faults, and still reports only the fixed
    // generic message.
    let err = gate.login("owner@resto.local", "hunter2").await.unwrap_err();
    assert!(matches!(err, AdminError::InvalidCredentials));
}

#[tokio::test]
async fn test_featured_workflow_over_file_store() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().to_str().unwrap().to_string();
    write_catalog(&dir, &[("r1", "Trattoria Bella"), ("r2", "Pho Station"), ("r3", "El Farol")]);

    let config = config_for("", &data_path, false);
    let period = Period::new(6, 2025).unwrap();

    let selector = FeaturedSelector::new(
        JsonStore::new(&data_path),
        JsonCatalog::new(&data_path),
        config.clone(),
    );

    selector.add(period, "r1").await.unwrap();
    selector.add(period, "r2").await.unwrap();

    // max_slots = 2: the third add must not fit.
    let err = selector.add(period, "r3").await.unwrap_err();
    assert!(matches!(err, AdminError::CapacityExceeded { .. }));

    let err = selector.add(period, "r1").await.unwrap_err();
    assert!(matches!(err, AdminError::DuplicateEntry { .. }));

    let err = selector.add(period, "unknown").await.unwrap_err();
    assert!(matches!(err, AdminError::NotFound { .. }));

    selector.remove(period, "r1").await.unwrap();
    let list = selector.list(period).await.unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.entries[0].restaurant_id, "r2");
    assert_eq!(list.entries[0].rank, 0);

    // A fresh selector over the same files sees the committed state.
    let reopened = FeaturedSelector::new(
        JsonStore::new(&data_path),
        JsonCatalog::new(&data_path),
        config,
    );
    assert_eq!(reopened.list(period).await.unwrap().total, 1);
}

#[tokio::test]
async fn test_two_selectors_racing_on_the_last_slot() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().to_str().unwrap().to_string();
    write_catalog(&dir, &[("r1", "Trattoria Bella"), ("r2", "Pho Station"), ("r3", "El Farol")]);

    let config = config_for("", &data_path, false);
    let period = Period::new(6, 2025).unwrap();

    let first = FeaturedSelector::new(
        JsonStore::new(&data_path),
        JsonCatalog::new(&data_path),
        config.clone(),
    );
    let second = FeaturedSelector::new(
        JsonStore::new(&data_path),
        JsonCatalog::new(&data_path),
        config,
    );

    first.add(period, "r1").await.unwrap();
    first.add(period, "r2").await.unwrap();

    // The second selector re-reads, finds the period full, and fails with
    // the capacity error rather than committing a third entry.
    let err = second.add(period, "r3").await.unwrap_err();
    assert!(matches!(err, AdminError::CapacityExceeded { .. }));
    assert_eq!(second.list(period).await.unwrap().total, 2);
}

#[tokio::test]
async fn test_dashboard_overview_with_real_files_and_down_auth() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().to_str().unwrap().to_string();
    write_catalog(&dir, &[("r1", "Trattoria Bella"), ("r2", "Pho Station")]);

    let config = config_for("", &data_path, false);
    let period = Period::new(6, 2025).unwrap();

    let selector = FeaturedSelector::new(
        JsonStore::new(&data_path),
        JsonCatalog::new(&data_path),
        config.clone(),
    );
    selector.add(period, "r1").await.unwrap();

    let dashboard = Dashboard::new(
        JsonStore::new(&data_path),
        JsonCatalog::new(&data_path),
        config,
    );
    let overview = dashboard.overview(period).await;
    assert_eq!(overview.featured_count, 1);
    assert_eq!(overview.slots_free, 1);
    assert_eq!(overview.restaurant_count, 2);
}
