//! Controller tests: reducer + effects + the real lookup pipeline against wiremock.

use std::time::Duration;

use skycast::action::Action;
use skycast::api::{ProviderConfig, WeatherService};
use skycast::app::{self, LOOKUP_TASK};
use skycast::effect::Effect;
use skycast::reducer::reducer;
use skycast::state::AppState;
use skycast_core::testing::ActionAssertions;
use skycast_core::{EffectStore, TaskManager};
use tokio::sync::mpsc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Store = EffectStore<AppState, Action, Effect>;

fn store() -> Store {
    EffectStore::new(AppState::new(), reducer)
}

async fn mount_city(server: &MockServer, city: &str, id: u64, name: &str, condition: &str, temp: f64) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/find"))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [{ "id": id }]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("id", id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": name,
            "weather": [{ "main": condition }],
            "main": { "temp": temp }
        })))
        .mount(server)
        .await;
}

/// Dispatch `action`, run every resulting lookup to completion and dispatch its result.
async fn dispatch_and_settle(store: &mut Store, service: &WeatherService, action: Action) {
    let mut pending = vec![action];
    while let Some(action) = pending.pop() {
        for effect in store.dispatch(action).effects {
            match effect {
                Effect::LookupWeather { seq, city } => {
                    pending.push(app::lookup_action(seq, service.lookup(&city).await));
                }
            }
        }
    }
}

#[tokio::test]
async fn test_mount_runs_one_lookup_to_completion() {
    let server = MockServer::start().await;
    mount_city(&server, "Jakarta", 1642911, "Jakarta", "Rain", 29.6).await;
    let service = WeatherService::new(ProviderConfig::new(server.uri(), "k")).unwrap();
    let mut store = store();

    let mut effects = Vec::new();
    for action in app::initial_actions("Jakarta") {
        effects.extend(store.dispatch(action).effects);
    }

    effects.assert_count(1);
    effects.assert_first(Effect::LookupWeather {
        seq: 1,
        city: "Jakarta".into(),
    });
    assert!(store.state().loading);
    assert!(!store.state().has_result());

    for effect in effects {
        let Effect::LookupWeather { seq, city } = effect;
        let action = app::lookup_action(seq, service.lookup(&city).await);
        dispatch_and_settle(&mut store, &service, action).await;
    }

    let state = store.state();
    assert!(!state.loading);
    assert!(!state.error);
    assert!(state.has_result());
    assert_eq!(state.location, "Jakarta");
    assert_eq!(state.weather, "Rain");
    assert_eq!(state.temperature, 29.6);
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(2));
}

#[test]
fn test_blank_submission_never_reaches_network() {
    let mut store = store();

    for input in ["", "   ", "\t"] {
        let result = store.dispatch(Action::LocationSubmit(input.into()));
        result.effects.assert_empty();
        assert!(!result.changed);
    }
    assert_eq!(store.state(), &AppState::new());
}

#[tokio::test]
async fn test_successful_lookup_shows_result() {
    let server = MockServer::start().await;
    mount_city(&server, "London", 2643743, "London", "Clear", 18.4).await;
    let service = WeatherService::new(ProviderConfig::new(server.uri(), "k")).unwrap();
    let mut store = store();

    dispatch_and_settle(&mut store, &service, Action::LocationSubmit("London".into())).await;

    let state = store.state();
    assert!(!state.loading);
    assert!(!state.error);
    assert_eq!(state.location, "London");
    assert_eq!(state.weather, "Clear");
    assert_eq!(state.temperature, 18.4);
}

#[tokio::test]
async fn test_unknown_city_sets_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/find"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": [] })))
        .mount(&server)
        .await;
    let service = WeatherService::new(ProviderConfig::new(server.uri(), "k")).unwrap();
    let mut store = store();

    dispatch_and_settle(&mut store, &service, Action::LocationSubmit("Zzzqx".into())).await;

    assert!(!store.state().loading);
    assert!(store.state().error);
    assert!(!store.state().has_result());
}

#[tokio::test]
async fn test_weather_failure_sets_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/find"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": [{ "id": 7 }] })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let service = WeatherService::new(ProviderConfig::new(server.uri(), "k")).unwrap();
    let mut store = store();

    dispatch_and_settle(&mut store, &service, Action::LocationSubmit("Seven".into())).await;

    assert!(!store.state().loading);
    assert!(store.state().error);
}

#[tokio::test]
async fn test_recovers_after_error() {
    let server = MockServer::start().await;
    mount_city(&server, "Oslo", 3143244, "Oslo", "Snow", -2.6).await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/find"))
        .and(query_param("q", "Zzzqx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": [] })))
        .mount(&server)
        .await;
    let service = WeatherService::new(ProviderConfig::new(server.uri(), "k")).unwrap();
    let mut store = store();

    dispatch_and_settle(&mut store, &service, Action::LocationSubmit("Zzzqx".into())).await;
    assert!(store.state().error);

    dispatch_and_settle(&mut store, &service, Action::LocationSubmit("Oslo".into())).await;
    assert!(!store.state().error);
    assert_eq!(store.state().location, "Oslo");
    assert_eq!(store.state().weather, "Snow");
}

#[tokio::test]
async fn test_latest_submission_wins() {
    let server = MockServer::start().await;
    // London geocodes slowly; Paris answers at once
    Mock::given(method("GET"))
        .and(path("/data/2.5/find"))
        .and(query_param("q", "London"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "list": [{ "id": 1 }] }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    mount_city(&server, "Paris", 2, "Paris", "Clouds", 14.0).await;
    let service = WeatherService::new(ProviderConfig::new(server.uri(), "k")).unwrap();

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let mut tasks = TaskManager::new(action_tx);
    let mut store = store();

    for city in ["London", "Paris"] {
        for effect in store.dispatch(Action::LocationSubmit(city.into())).effects {
            let Effect::LookupWeather { seq, city } = effect;
            let service = service.clone();
            tasks.spawn(LOOKUP_TASK, async move {
                app::lookup_action(seq, service.lookup(&city).await)
            });
        }
    }

    let action = tokio::time::timeout(Duration::from_secs(2), action_rx.recv())
        .await
        .expect("lookup finished")
        .expect("channel open");
    store.dispatch(action);

    assert_eq!(store.state().location, "Paris");
    assert!(!store.state().loading);

    // The London task was aborted, so nothing else arrives
    let late = tokio::time::timeout(Duration::from_millis(500), action_rx.recv()).await;
    assert!(late.is_err());
}
