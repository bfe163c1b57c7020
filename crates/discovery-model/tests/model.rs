use discovery_model::{
    ColumnId, CompanyId, FeedbackData, FeedbackKind, FilterCriteria, FlowKind, Insights, Preset,
    SaveKind,
};

#[test]
fn changing_industries_clears_industry_specific() {
    let mut criteria = FilterCriteria::new()
        .with_industries(["Healthcare"])
        .with_industry_specific(["Beds", "License Type"]);
    assert_eq!(criteria.industry_specific().len(), 2);

    criteria.toggle_industry("Retail");
    assert!(criteria.industry_specific().is_empty());
    assert_eq!(criteria.industry().as_slice(), ["Healthcare", "Retail"]);
}

#[test]
fn city_and_contact_changes_keep_industry_specific() {
    let mut criteria = FilterCriteria::new()
        .with_industries(["Healthcare"])
        .with_industry_specific(["Beds"]);
    criteria.toggle_city("Boston");
    criteria.toggle_contact("Sales");
    criteria.set_location_range("+ 10 Miles");
    assert_eq!(criteria.industry_specific().as_slice(), ["Beds"]);
}

#[test]
fn preset_replaces_lists_and_resets_industry_specific() {
    let preset = Preset {
        name: "Healthcare Tech".to_string(),
        industries: vec!["Healthcare".to_string()],
        cities: vec!["Boston".to_string(), "New York".to_string()],
    };
    let mut criteria = FilterCriteria::new()
        .with_industries(["Retail"])
        .with_cities(["Austin"])
        .with_industry_specific(["Revenue"])
        .with_contacts(["Sales"]);
    criteria.apply_preset(&preset);

    assert_eq!(criteria.industry().as_slice(), ["Healthcare"]);
    assert_eq!(criteria.cities().as_slice(), ["Boston", "New York"]);
    assert!(criteria.industry_specific().is_empty());
    assert_eq!(criteria.contacts().as_slice(), ["Sales"]);
}

#[test]
fn criteria_json_uses_camel_case() {
    let criteria = FilterCriteria::new()
        .with_industries(["Retail"])
        .with_contacts(["HR"]);
    let value = serde_json::to_value(&criteria).expect("serialize");
    assert_eq!(value["locationRange"], "+ 50 Miles");
    assert_eq!(value["industrySpecific"], serde_json::json!([]));
    assert_eq!(value["contacts"], serde_json::json!(["HR"]));
}

#[test]
fn default_insights_use_placeholder_size() {
    let insights = Insights::default();
    assert!(insights.is_empty());
    let value = serde_json::to_value(&insights).expect("serialize");
    assert_eq!(value["averageCompanySize"], "50-200 employees");
    assert_eq!(value["geographicSpread"], 0);
}

#[test]
fn save_texts_mention_record_count() {
    assert_eq!(SaveKind::List.title(), "Save List to CRM");
    assert!(SaveKind::List.prompt(10).starts_with("Ready to save 10 companies"));
    assert_eq!(
        SaveKind::List.confirmation(3),
        "3 companies have been saved to your CRM."
    );
    assert_eq!(
        SaveKind::Filter.confirmation(3),
        "Filter group has been saved for future use."
    );
}

#[test]
fn feedback_serializes_kind_as_type() {
    let feedback = FeedbackData {
        record_id: CompanyId::new("cmp-001").expect("company id"),
        kind: FeedbackKind::Dislike,
        selected_columns: vec![ColumnId::new("revenue").expect("column id")],
        comment: "Revenue looks stale".to_string(),
    };
    let value = serde_json::to_value(&feedback).expect("serialize");
    assert_eq!(value["type"], "dislike");
    assert_eq!(value["selectedColumns"], serde_json::json!(["revenue"]));
}

#[test]
fn flow_tokens_round_trip_through_serde() {
    for flow in FlowKind::all() {
        let json = serde_json::to_string(flow).expect("serialize");
        assert_eq!(json, format!("\"{}\"", flow.token()));
    }
    assert_eq!(FlowKind::default(), FlowKind::ThreeStage);
}
