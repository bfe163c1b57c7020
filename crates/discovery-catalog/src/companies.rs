//! Mock company records parsed from `companies.csv`.
//!
//! The CSV is flat: list values (`technologies`) are `;`-separated and
//! optional attributes are empty cells.

use serde::Deserialize;

use discovery_model::{CompanyData, CompanyId};

use crate::error::{CatalogError, Result};

#[derive(Debug, Deserialize)]
struct CompanyRow {
    id: String,
    company_name: String,
    industry: String,
    city: String,
    state: String,
    country: String,
    company_size: String,
    revenue: String,
    employees: String,
    website: String,
    founded: String,
    #[serde(rename = "type")]
    company_type: String,
    description: String,
    technologies: String,
    beds_number: String,
    license_type: String,
    license_expiry_date: String,
    contact_name: String,
    contact_title: String,
    contact_email: String,
    contact_phone: String,
    contact_linkedin: String,
    direct_email: String,
    work_email: String,
    department: String,
    marketing_contacts: String,
    sales_contacts: String,
    engineering_contacts: String,
    operations_contacts: String,
    finance_contacts: String,
    hr_contacts: String,
    customer_success_contacts: String,
    product_management_contacts: String,
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl CompanyRow {
    fn into_company(self, origin: &str) -> Result<CompanyData> {
        let id = CompanyId::new(self.id).map_err(|err| CatalogError::InvalidRecord {
            origin: origin.to_string(),
            message: err.to_string(),
        })?;
        Ok(CompanyData {
            id,
            company_name: self.company_name,
            industry: self.industry,
            city: self.city,
            state: self.state,
            country: self.country,
            company_size: self.company_size,
            revenue: self.revenue,
            employees: self.employees,
            website: self.website,
            founded: self.founded,
            company_type: self.company_type,
            description: self.description,
            technologies: split_list(&self.technologies),
            beds_number: non_empty(self.beds_number),
            license_type: non_empty(self.license_type),
            license_expiry_date: non_empty(self.license_expiry_date),
            contact_name: self.contact_name,
            contact_title: self.contact_title,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            contact_linkedin: self.contact_linkedin,
            direct_email: self.direct_email,
            work_email: self.work_email,
            department: self.department,
            marketing_contacts: non_empty(self.marketing_contacts),
            sales_contacts: non_empty(self.sales_contacts),
            engineering_contacts: non_empty(self.engineering_contacts),
            operations_contacts: non_empty(self.operations_contacts),
            finance_contacts: non_empty(self.finance_contacts),
            hr_contacts: non_empty(self.hr_contacts),
            customer_success_contacts: non_empty(self.customer_success_contacts),
            product_management_contacts: non_empty(self.product_management_contacts),
        })
    }
}

pub fn parse_companies(text: &str, origin: &str) -> Result<Vec<CompanyData>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());
    let mut companies = Vec::new();
    for row in reader.deserialize::<CompanyRow>() {
        let row = row.map_err(|source| CatalogError::Csv {
            origin: origin.to_string(),
            source,
        })?;
        companies.push(row.into_company(origin)?);
    }
    Ok(companies)
}
