//! Filter criteria chosen by the user while defining a target profile.
//!
//! Every multi-valued criterion is a [`Selection`]: an insertion-ordered set
//! of option names. Order never affects filtering, but keeping it stable
//! makes derived output (available options, rendered chips) deterministic.

use serde::{Deserialize, Serialize};

/// Radius label applied when a flow starts.
pub const DEFAULT_LOCATION_RANGE: &str = "+ 50 Miles";

/// An insertion-ordered set of option names without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Selection(Vec<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection, keeping the first occurrence of repeated values.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for value in values {
            let value = value.into();
            if !selection.contains(&value) {
                selection.0.push(value);
            }
        }
        selection
    }

    /// Add the value if absent, remove it otherwise.
    ///
    /// Returns `true` when the value is selected after the call.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(index) = self.0.iter().position(|v| v == value) {
            self.0.remove(index);
            false
        } else {
            self.0.push(value.to_string());
            true
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        Self::from_values(values)
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.0
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A named quick-start template for the ICP step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub industries: Vec<String>,
    pub cities: Vec<String>,
}

/// The user's current target definition.
///
/// Fields are private so that the industry invariant holds: any change to the
/// industry selection clears the industry-specific selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    industry: Selection,
    cities: Selection,
    location_range: String,
    industry_specific: Selection,
    contacts: Selection,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            industry: Selection::new(),
            cities: Selection::new(),
            location_range: DEFAULT_LOCATION_RANGE.to_string(),
            industry_specific: Selection::new(),
            contacts: Selection::new(),
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn industry(&self) -> &Selection {
        &self.industry
    }

    pub fn cities(&self) -> &Selection {
        &self.cities
    }

    pub fn location_range(&self) -> &str {
        &self.location_range
    }

    pub fn industry_specific(&self) -> &Selection {
        &self.industry_specific
    }

    pub fn contacts(&self) -> &Selection {
        &self.contacts
    }

    pub fn toggle_industry(&mut self, industry: &str) -> bool {
        self.industry_specific.clear();
        self.industry.toggle(industry)
    }

    pub fn set_industries<I, S>(&mut self, industries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.industry = Selection::from_values(industries);
        self.industry_specific.clear();
    }

    pub fn toggle_city(&mut self, city: &str) -> bool {
        self.cities.toggle(city)
    }

    pub fn set_cities<I, S>(&mut self, cities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = Selection::from_values(cities);
    }

    pub fn set_location_range(&mut self, range: impl Into<String>) {
        self.location_range = range.into();
    }

    pub fn toggle_industry_specific(&mut self, option: &str) -> bool {
        self.industry_specific.toggle(option)
    }

    pub fn toggle_contact(&mut self, function: &str) -> bool {
        self.contacts.toggle(function)
    }

    /// Replace industries and cities with the preset's lists.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.set_industries(preset.industries.iter().cloned());
        self.set_cities(preset.cities.iter().cloned());
    }

    #[must_use]
    pub fn with_industries<I, S>(mut self, industries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_industries(industries);
        self
    }

    #[must_use]
    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_cities(cities);
        self
    }

    #[must_use]
    pub fn with_industry_specific<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.industry_specific = Selection::from_values(options);
        self
    }

    #[must_use]
    pub fn with_contacts<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contacts = Selection::from_values(functions);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        assert!(selection.toggle("Austin"));
        assert!(selection.contains("Austin"));
        assert!(!selection.toggle("Austin"));
        assert!(selection.is_empty());
    }

    #[test]
    fn selection_from_values_drops_duplicates() {
        let selection = Selection::from_values(["Boston", "Austin", "Boston"]);
        assert_eq!(selection.as_slice(), ["Boston", "Austin"]);
    }

    #[test]
    fn toggling_industry_clears_industry_specific() {
        let mut criteria = FilterCriteria::new()
            .with_industries(["Healthcare"])
            .with_industry_specific(["Beds"]);
        assert_eq!(criteria.industry_specific().len(), 1);

        criteria.toggle_industry("Retail");
        assert!(criteria.industry_specific().is_empty());

        let mut criteria = criteria.with_industry_specific(["Revenue"]);
        criteria.toggle_industry("Retail");
        assert!(criteria.industry_specific().is_empty());
        assert_eq!(criteria.industry().as_slice(), ["Healthcare"]);
    }

    #[test]
    fn defaults_use_fifty_mile_radius() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.location_range(), "+ 50 Miles");
        assert!(criteria.industry().is_empty());
        assert!(criteria.contacts().is_empty());
    }

    #[test]
    fn preset_replaces_industries_and_cities() {
        let preset = Preset {
            name: "SaaS Companies".to_string(),
            industries: vec!["Software Development".to_string()],
            cities: vec!["Seattle".to_string(), "Austin".to_string()],
        };
        let mut criteria = FilterCriteria::new()
            .with_cities(["Boston"])
            .with_industry_specific(["Revenue"]);
        criteria.apply_preset(&preset);
        assert_eq!(criteria.industry().as_slice(), ["Software Development"]);
        assert_eq!(criteria.cities().as_slice(), ["Seattle", "Austin"]);
        assert!(criteria.industry_specific().is_empty());
    }
}
