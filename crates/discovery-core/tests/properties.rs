//! Property tests for the derivation engine.

use std::sync::LazyLock;

use proptest::prelude::*;
use proptest::sample::subsequence;

use discovery_catalog::{Catalog, LookupProvider, load_bundled_catalog};
use discovery_core::{compute_insights, compute_result_set, derive_column_selection};
use discovery_model::{ColumnCategory, FilterCriteria, TOP_INDUSTRY_LIMIT, contact_functions};

static CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| load_bundled_catalog().expect("load bundled catalog"));

fn industries() -> impl Strategy<Value = Vec<String>> {
    let all = CATALOG.industries().to_vec();
    let len = all.len();
    subsequence(all, 0..=len)
}

fn cities() -> impl Strategy<Value = Vec<String>> {
    let all = CATALOG.cities().to_vec();
    let len = all.len();
    subsequence(all, 0..=len)
}

/// Contact names drawn from the fixed table plus a few that map to nothing.
fn contacts() -> impl Strategy<Value = Vec<String>> {
    let mut all: Vec<String> = contact_functions().map(str::to_string).collect();
    all.extend(["Legal", "marketing", "Sales Ops"].map(str::to_string));
    let len = all.len();
    subsequence(all, 0..=len)
}

fn industry_specific() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("Revenue".to_string()),
            Just("Beds".to_string()),
            Just("Tech Stack".to_string()),
            Just("License".to_string()),
            "[A-Za-z ]{1,12}",
        ],
        0..4,
    )
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (industries(), cities(), industry_specific(), contacts()).prop_map(
        |(industries, cities, specific, contacts)| {
            FilterCriteria::new()
                .with_industries(industries)
                .with_cities(cities)
                .with_industry_specific(specific)
                .with_contacts(contacts)
        },
    )
}

proptest! {
    /// No industry and no city selected: the source comes back unchanged.
    #[test]
    fn empty_icp_returns_full_source(
        specific in industry_specific(),
        contacts in contacts(),
    ) {
        let criteria = FilterCriteria::new()
            .with_industry_specific(specific)
            .with_contacts(contacts);
        let result = compute_result_set(&criteria, CATALOG.companies());
        prop_assert_eq!(result.as_slice(), CATALOG.companies());
    }

    /// Every result satisfies each non-empty selection.
    #[test]
    fn results_respect_selections(criteria in criteria()) {
        let result = compute_result_set(&criteria, CATALOG.companies());
        for company in &result {
            if !criteria.industry().is_empty() {
                prop_assert!(criteria.industry().contains(&company.industry));
            }
            if !criteria.cities().is_empty() {
                prop_assert!(criteria.cities().contains(&company.city));
            }
        }
    }

    /// Results keep source order.
    #[test]
    fn results_are_a_subsequence_of_source(criteria in criteria()) {
        let result = compute_result_set(&criteria, CATALOG.companies());
        let mut source = CATALOG.companies().iter();
        for company in &result {
            prop_assert!(source.any(|candidate| candidate.id == company.id));
        }
    }

    /// Any change to the industry selection empties the industry-specific one.
    #[test]
    fn industry_change_resets_industry_specific(
        criteria in criteria(),
        industry in prop::sample::select(CATALOG.industries().to_vec()),
    ) {
        let mut changed = criteria.clone();
        changed.toggle_industry(&industry);
        prop_assert!(changed.industry_specific().is_empty());
        prop_assert_eq!(changed.cities(), criteria.cities());
        prop_assert_eq!(changed.contacts(), criteria.contacts());
    }

    /// Deriving twice is the same as deriving once.
    #[test]
    fn column_derivation_is_idempotent(criteria in criteria()) {
        let once = derive_column_selection(CATALOG.base_columns(), &criteria);
        let twice = derive_column_selection(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    /// Contact columns only follow names present in the fixed table.
    #[test]
    fn contact_columns_follow_exact_names(criteria in criteria()) {
        let derived = derive_column_selection(CATALOG.base_columns(), &criteria);
        let selected = derived
            .iter()
            .filter(|c| c.category == ColumnCategory::Contact && c.selected)
            .count();
        let mapped = criteria
            .contacts()
            .iter()
            .filter(|name| discovery_model::contact_column_id(name).is_some())
            .count();
        prop_assert_eq!(selected, mapped);
    }

    /// At most three top industries, in first-occurrence order.
    #[test]
    fn top_industries_are_first_distinct(criteria in criteria()) {
        let result = compute_result_set(&criteria, CATALOG.companies());
        let insights = compute_insights(&result);
        prop_assert!(insights.top_industries.len() <= TOP_INDUSTRY_LIMIT);
        prop_assert_eq!(insights.total_companies, result.len());

        let mut distinct: Vec<&str> = Vec::new();
        for company in &result {
            if !distinct.contains(&company.industry.as_str()) {
                distinct.push(&company.industry);
            }
        }
        distinct.truncate(TOP_INDUSTRY_LIMIT);
        prop_assert_eq!(insights.top_industries, distinct);
    }
}
