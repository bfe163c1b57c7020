//! Drive a session from command-line selections.
//!
//! Criteria intents are applied first, then the flow is walked forward one
//! advance at a time, awaiting each simulated fetch, until the last step or
//! a closed gate. Flows that never fetched on the way get an explicit search.

use tracing::{info, warn};

use discovery_core::{Driver, Intent, SavePhase, Session};
use discovery_model::{FilterCriteria, SaveKind, Selection};

use crate::types::{BlockedStep, DiscoverReport, SaveOutcome};

/// Selections collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct DiscoverRequest {
    pub preset: Option<String>,
    pub industries: Vec<String>,
    pub cities: Vec<String>,
    pub range: Option<String>,
    pub fields: Vec<String>,
    pub contacts: Vec<String>,
    pub save: Option<SaveKind>,
}

/// Run one discovery to completion and snapshot the session.
///
/// Must be awaited inside a Tokio runtime with the time driver enabled.
pub async fn discover(driver: &mut Driver, request: &DiscoverRequest) -> DiscoverReport {
    apply_criteria(driver, request);
    let blocked = walk(driver).await;

    let save = match request.save {
        Some(kind) if driver.session().flow().has_fetched() => {
            Some(save(driver, kind).await)
        }
        Some(kind) => {
            warn!(?kind, "save skipped, no results");
            None
        }
        None => None,
    };

    let report = DiscoverReport::from_session(driver.session(), blocked, save);
    driver.shutdown();
    report
}

fn apply_criteria(driver: &mut Driver, request: &DiscoverRequest) {
    if let Some(preset) = &request.preset {
        driver.dispatch(Intent::ApplyPreset(preset.clone()));
    }
    // Industries before fields: any industry change clears the fields.
    select_all(driver, &request.industries, FilterCriteria::industry, Intent::ToggleIndustry);
    select_all(driver, &request.cities, FilterCriteria::cities, Intent::ToggleCity);
    if let Some(range) = &request.range {
        driver.dispatch(Intent::SetLocationRange(range.clone()));
    }
    select_all(
        driver,
        &request.fields,
        FilterCriteria::industry_specific,
        Intent::ToggleIndustrySpecific,
    );
    select_all(driver, &request.contacts, FilterCriteria::contacts, Intent::ToggleContact);
}

/// Toggle each value that is not already selected.
fn select_all(
    driver: &mut Driver,
    values: &[String],
    selection: fn(&FilterCriteria) -> &Selection,
    toggle: fn(String) -> Intent,
) {
    for value in values {
        if !selection(driver.session().criteria()).contains(value) {
            driver.dispatch(toggle(value.clone()));
        }
    }
}

fn idle(session: &Session) -> bool {
    !session.is_loading()
}

async fn walk(driver: &mut Driver) -> Option<BlockedStep> {
    while !driver.session().flow().is_last() {
        if !driver.session().can_proceed() {
            return Some(BlockedStep::at(driver.session().current_step()));
        }
        driver.dispatch(Intent::Advance);
        driver.run_until(idle).await;
    }

    if !driver.session().flow().has_fetched() {
        driver.dispatch(Intent::Search);
        if !driver.session().flow().has_fetched() {
            let session = driver.session();
            return Some(BlockedStep {
                step: session.current_step().id,
                requirement: session
                    .flow()
                    .definition()
                    .entry_gate()
                    .requirement()
                    .to_string(),
            });
        }
        driver.run_until(idle).await;
    }

    info!(
        step = %driver.session().current_step().id,
        results = driver.session().results().len(),
        "flow walked to the end"
    );
    None
}

async fn save(driver: &mut Driver, kind: SaveKind) -> SaveOutcome {
    driver.dispatch(Intent::RequestSave(kind));
    let saved = driver
        .run_until(|session| matches!(session.save_dialog().phase(), SavePhase::Saved(_)))
        .await;
    SaveOutcome {
        kind,
        title: kind.title().to_string(),
        saved,
        message: driver.session().save_dialog().message(),
    }
}
