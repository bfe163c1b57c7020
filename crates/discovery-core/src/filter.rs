//! Result-set filtering.
//!
//! Selections are ANDed across dimensions and ORed within one. An empty
//! selection places no constraint. `locationRange` is carried in the criteria
//! but is not a predicate.

use tracing::debug;

use discovery_model::{CompanyData, FilterCriteria, Selection};

fn admits(selection: &Selection, value: &str) -> bool {
    selection.is_empty() || selection.contains(value)
}

/// Whether one record passes the industry and city filters.
pub fn matches_criteria(criteria: &FilterCriteria, company: &CompanyData) -> bool {
    admits(criteria.industry(), &company.industry) && admits(criteria.cities(), &company.city)
}

/// Records of `source` that pass the criteria, in source order.
pub fn compute_result_set(criteria: &FilterCriteria, source: &[CompanyData]) -> Vec<CompanyData> {
    let matched: Vec<CompanyData> = source
        .iter()
        .filter(|company| matches_criteria(criteria, company))
        .cloned()
        .collect();
    debug!(
        matched = matched.len(),
        source = source.len(),
        industries = criteria.industry().len(),
        cities = criteria.cities().len(),
        "computed result set"
    );
    matched
}

/// Post-filter applied by flow variants that show a fixed-size preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultPadding {
    /// Emit the filtered matches as they are.
    #[default]
    None,
    /// Truncate or backfill to exactly this many records.
    ///
    /// Backfill continues the source from the index equal to the match
    /// count, so a record can appear twice when it both matched and sits in
    /// the backfill range.
    Exact(usize),
}

impl ResultPadding {
    pub fn apply(&self, mut matched: Vec<CompanyData>, source: &[CompanyData]) -> Vec<CompanyData> {
        let Self::Exact(target) = *self else {
            return matched;
        };
        if matched.len() >= target {
            matched.truncate(target);
            return matched;
        }
        let missing = target - matched.len();
        let backfill: Vec<CompanyData> = source
            .iter()
            .skip(matched.len())
            .take(missing)
            .cloned()
            .collect();
        debug!(target, backfilled = backfill.len(), "padded result set");
        matched.extend(backfill);
        matched
    }
}

#[cfg(test)]
mod tests {
    use discovery_model::CompanyId;

    use super::*;

    fn company(id: &str, industry: &str, city: &str) -> CompanyData {
        CompanyData {
            id: CompanyId::new(id).expect("company id"),
            company_name: format!("{id} Inc"),
            industry: industry.to_string(),
            city: city.to_string(),
            state: String::new(),
            country: String::new(),
            company_size: String::new(),
            revenue: String::new(),
            employees: String::new(),
            website: String::new(),
            founded: String::new(),
            company_type: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            beds_number: None,
            license_type: None,
            license_expiry_date: None,
            contact_name: String::new(),
            contact_title: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            contact_linkedin: String::new(),
            direct_email: String::new(),
            work_email: String::new(),
            department: String::new(),
            marketing_contacts: None,
            sales_contacts: None,
            engineering_contacts: None,
            operations_contacts: None,
            finance_contacts: None,
            hr_contacts: None,
            customer_success_contacts: None,
            product_management_contacts: None,
        }
    }

    fn source() -> Vec<CompanyData> {
        vec![
            company("a", "Retail", "Austin"),
            company("b", "Healthcare", "Boston"),
            company("c", "Retail", "Boston"),
            company("d", "Education", "Austin"),
        ]
    }

    fn ids(result: &[CompanyData]) -> Vec<&str> {
        result.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_everything() {
        let result = compute_result_set(&FilterCriteria::new(), &source());
        assert_eq!(ids(&result), ["a", "b", "c", "d"]);
    }

    #[test]
    fn dimensions_are_anded() {
        let criteria = FilterCriteria::new()
            .with_industries(["Retail"])
            .with_cities(["Boston"]);
        assert_eq!(ids(&compute_result_set(&criteria, &source())), ["c"]);
    }

    #[test]
    fn values_within_a_dimension_are_ored() {
        let criteria = FilterCriteria::new().with_cities(["Austin", "Boston"]);
        assert_eq!(ids(&compute_result_set(&criteria, &source())).len(), 4);
    }

    #[test]
    fn location_range_is_not_a_predicate() {
        let mut criteria = FilterCriteria::new().with_industries(["Retail"]);
        let before = compute_result_set(&criteria, &source());
        criteria.set_location_range("+ 10 Miles");
        assert_eq!(compute_result_set(&criteria, &source()), before);
    }

    #[test]
    fn padding_truncates_long_results() {
        let padded = ResultPadding::Exact(2).apply(source(), &source());
        assert_eq!(ids(&padded), ["a", "b"]);
    }

    #[test]
    fn padding_backfills_from_match_count() {
        let matched = vec![company("d", "Education", "Austin")];
        let padded = ResultPadding::Exact(3).apply(matched, &source());
        assert_eq!(ids(&padded), ["d", "b", "c"]);
    }

    #[test]
    fn padding_stops_at_source_end() {
        let padded = ResultPadding::Exact(10).apply(Vec::new(), &source());
        assert_eq!(padded.len(), 4);
    }

    #[test]
    fn no_padding_is_identity() {
        let matched = vec![company("b", "Healthcare", "Boston")];
        assert_eq!(ResultPadding::None.apply(matched.clone(), &source()), matched);
    }
}
