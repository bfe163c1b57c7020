use serde::{Deserialize, Serialize};

use crate::ids::CompanyId;

/// One immutable mock company record.
///
/// Industry-specific attributes and per-department contacts are optional;
/// most records only carry the ones relevant to their industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    pub id: CompanyId,
    pub company_name: String,
    pub industry: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub company_size: String,
    pub revenue: String,
    pub employees: String,
    pub website: String,
    pub founded: String,
    #[serde(rename = "type")]
    pub company_type: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub beds_number: Option<String>,
    pub license_type: Option<String>,
    pub license_expiry_date: Option<String>,
    pub contact_name: String,
    pub contact_title: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(rename = "contactLinkedIn")]
    pub contact_linkedin: String,
    pub direct_email: String,
    pub work_email: String,
    pub department: String,
    pub marketing_contacts: Option<String>,
    pub sales_contacts: Option<String>,
    pub engineering_contacts: Option<String>,
    pub operations_contacts: Option<String>,
    pub finance_contacts: Option<String>,
    pub hr_contacts: Option<String>,
    pub customer_success_contacts: Option<String>,
    pub product_management_contacts: Option<String>,
}

impl CompanyData {
    /// Display value for a column id.
    ///
    /// Lists are joined with `", "` and missing optional values render as an
    /// empty string. Returns `None` for ids that are not record attributes.
    pub fn cell(&self, column_id: &str) -> Option<String> {
        let text = |value: &str| Some(value.to_string());
        let optional = |value: &Option<String>| Some(value.clone().unwrap_or_default());
        match column_id {
            "id" => text(self.id.as_str()),
            "companyName" => text(&self.company_name),
            "industry" => text(&self.industry),
            "city" => text(&self.city),
            "state" => text(&self.state),
            "country" => text(&self.country),
            "companySize" => text(&self.company_size),
            "revenue" => text(&self.revenue),
            "employees" => text(&self.employees),
            "website" => text(&self.website),
            "founded" => text(&self.founded),
            "type" => text(&self.company_type),
            "description" => text(&self.description),
            "technologies" => Some(self.technologies.join(", ")),
            "bedsNumber" => optional(&self.beds_number),
            "licenseType" => optional(&self.license_type),
            "licenseExpiryDate" => optional(&self.license_expiry_date),
            "contactName" => text(&self.contact_name),
            "contactTitle" => text(&self.contact_title),
            "contactEmail" => text(&self.contact_email),
            "contactPhone" => text(&self.contact_phone),
            "contactLinkedIn" => text(&self.contact_linkedin),
            "directEmail" => text(&self.direct_email),
            "workEmail" => text(&self.work_email),
            "department" => text(&self.department),
            "marketingContacts" => optional(&self.marketing_contacts),
            "salesContacts" => optional(&self.sales_contacts),
            "engineeringContacts" => optional(&self.engineering_contacts),
            "operationsContacts" => optional(&self.operations_contacts),
            "financeContacts" => optional(&self.finance_contacts),
            "hrContacts" => optional(&self.hr_contacts),
            "customerSuccessContacts" => optional(&self.customer_success_contacts),
            "productManagementContacts" => optional(&self.product_management_contacts),
            _ => None,
        }
    }
}
