//! Timer behaviour of the async driver, on paused Tokio time.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use discovery_catalog::load_bundled_catalog;
use discovery_core::{DiscoveryConfig, Driver, Intent, SavePhase, Session};
use discovery_model::{FlowKind, SaveKind};

/// Paused time jumps straight to the next deadline, give or take a tick.
fn assert_elapsed(started: Instant, expected_ms: u64) {
    let elapsed = started.elapsed();
    let expected = Duration::from_millis(expected_ms);
    assert!(
        elapsed >= expected && elapsed <= expected + Duration::from_millis(5),
        "elapsed {elapsed:?}, expected {expected:?}"
    );
}

fn driver(kind: FlowKind) -> Driver {
    let catalog = load_bundled_catalog().expect("load bundled catalog");
    Driver::new(Session::with_flow(
        Arc::new(catalog),
        DiscoveryConfig::default(),
        kind,
    ))
}

fn select_icp(driver: &mut Driver) {
    driver.dispatch(Intent::ToggleIndustry("Software Development".to_string()));
    driver.dispatch(Intent::ToggleCity("San Francisco".to_string()));
}

#[tokio::test(start_paused = true)]
async fn fetch_completes_after_configured_delay() {
    let mut driver = driver(FlowKind::ThreeStage);
    select_icp(&mut driver);

    let started = Instant::now();
    driver.dispatch(Intent::Advance);
    assert!(driver.session().is_loading());

    let completion = driver.step().await;
    assert!(matches!(completion, Some(Intent::FetchCompleted(_))));
    assert_elapsed(started, 1200);
    assert!(!driver.session().is_loading());
    assert_eq!(driver.session().results().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn switching_flow_mid_fetch_discards_the_result() {
    let mut driver = driver(FlowKind::Linear);
    select_icp(&mut driver);
    driver.dispatch(Intent::Advance);
    driver.dispatch(Intent::SwitchFlow(FlowKind::Single));

    driver.settle().await;
    assert!(driver.session().results().is_empty());
    assert_eq!(driver.session().flow().kind(), FlowKind::Single);
}

#[tokio::test(start_paused = true)]
async fn save_confirmation_dismisses_itself() {
    let mut driver = driver(FlowKind::Single);
    select_icp(&mut driver);
    driver.dispatch(Intent::Search);
    driver.settle().await;

    let started = Instant::now();
    driver.dispatch(Intent::RequestSave(SaveKind::List));
    let saved = driver
        .run_until(|session| matches!(session.save_dialog().phase(), SavePhase::Saved(_)))
        .await;
    assert!(saved);
    assert_elapsed(started, 2000);

    driver.settle().await;
    assert_elapsed(started, 4000);
    assert_eq!(driver.session().save_dialog().phase(), SavePhase::Closed);
}

#[tokio::test(start_paused = true)]
async fn run_until_reports_unreachable_condition() {
    let mut driver = driver(FlowKind::Linear);
    let reached = driver.run_until(|session| !session.results().is_empty()).await;
    assert!(!reached);
    assert_eq!(driver.pending_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn shutdown_aborts_pending_timers() {
    let mut driver = driver(FlowKind::Linear);
    select_icp(&mut driver);
    driver.dispatch(Intent::Advance);
    assert_eq!(driver.pending_timers(), 1);

    driver.shutdown();
    assert!(driver.step().await.is_none());
    assert!(!driver.session().is_loading());
}

#[tokio::test(start_paused = true)]
async fn session_fetches_again_after_teardown() {
    let mut driver = driver(FlowKind::Single);
    select_icp(&mut driver);
    driver.dispatch(Intent::Search);
    let session = driver.into_session();
    assert!(!session.is_loading());

    let mut driver = Driver::new(session);
    driver.dispatch(Intent::Search);
    assert_eq!(driver.pending_timers(), 1);
    driver.settle().await;
    assert!(!driver.session().is_loading());
    assert_eq!(driver.session().results().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn shutdown_closes_an_outstanding_save() {
    let mut driver = driver(FlowKind::Single);
    select_icp(&mut driver);
    driver.dispatch(Intent::Search);
    driver.settle().await;
    driver.dispatch(Intent::RequestSave(SaveKind::Filter));
    assert!(driver.session().save_dialog().is_saving());

    driver.shutdown();
    assert_eq!(driver.session().save_dialog().phase(), SavePhase::Closed);
}
