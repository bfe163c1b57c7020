//! Fixed mapping from contact-function display names to column ids.

/// Contact function → contact column id. Matching is exact.
pub const CONTACT_COLUMN_IDS: [(&str, &str); 8] = [
    ("Marketing", "marketingContacts"),
    ("Sales", "salesContacts"),
    ("Engineering", "engineeringContacts"),
    ("Operations", "operationsContacts"),
    ("Finance", "financeContacts"),
    ("HR", "hrContacts"),
    ("Customer Success", "customerSuccessContacts"),
    ("Product Management", "productManagementContacts"),
];

/// Column id for a contact function, if the function is in the fixed table.
pub fn contact_column_id(function: &str) -> Option<&'static str> {
    CONTACT_COLUMN_IDS
        .iter()
        .find(|(name, _)| *name == function)
        .map(|(_, id)| *id)
}

/// Contact function names in table order.
pub fn contact_functions() -> impl Iterator<Item = &'static str> {
    CONTACT_COLUMN_IDS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact() {
        assert_eq!(contact_column_id("Marketing"), Some("marketingContacts"));
        assert_eq!(contact_column_id("HR"), Some("hrContacts"));
        assert_eq!(contact_column_id("marketing"), None);
        assert_eq!(contact_column_id("Legal"), None);
    }

    #[test]
    fn table_has_eight_functions() {
        assert_eq!(contact_functions().count(), 8);
    }
}
