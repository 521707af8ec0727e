//! Customer domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Uppercase-normalized customer identity key.
///
/// Two customers are the same record iff their `CustomerId`s are equal.
/// Construction trims surrounding whitespace, rejects empty input, and
/// uppercases, so every id that reaches the cache or the store is already
/// in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Parse and normalize a raw id.
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "customer id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CustomerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A single customer record.
///
/// Beyond the identity key, every field is opaque to the repository layer
/// and carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a customer with the given id and company name.
    pub fn new(id: &str, company_name: impl Into<String>) -> DomainResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: CustomerId::new(id)?,
            company_name: company_name.into(),
            contact_name: None,
            contact_title: None,
            address: None,
            city: None,
            region: None,
            postal_code: None,
            country: None,
            phone: None,
            fax: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn with_contact(mut self, name: impl Into<String>) -> Self {
        self.contact_name = Some(name.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// True if this customer's country equals `country` (case-sensitive,
    /// matching the original equality-filter behavior).
    pub fn is_in_country(&self, country: &str) -> bool {
        self.country.as_deref() == Some(country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_normalized_to_uppercase() {
        let id = CustomerId::new("mxnt").unwrap();
        assert_eq!(id.as_str(), "MXNT");
    }

    #[test]
    fn test_id_trims_whitespace() {
        let id = CustomerId::new("  alfki ").unwrap();
        assert_eq!(id.as_str(), "ALFKI");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(CustomerId::new("").is_err());
        assert!(CustomerId::new("   ").is_err());
    }

    #[test]
    fn test_same_customer_iff_uppercased_ids_equal() {
        let a = CustomerId::new("mxnt").unwrap();
        let b = CustomerId::new("MxNt").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_country_filter() {
        let c = Customer::new("ALFKI", "Alfreds Futterkiste")
            .unwrap()
            .with_country("Germany");
        assert!(c.is_in_country("Germany"));
        assert!(!c.is_in_country("germany"));
        assert!(!c.is_in_country("UK"));
    }
}
