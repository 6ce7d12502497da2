use serde::{Deserialize, Serialize};

use super::{Record, RecordId};
use crate::forms::{FormFields, ValidationErrors};
use crate::listing::Filterable;

/// Client (off-taker) details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub id: RecordId,
    pub client_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gst_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientFields {
    pub client_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gst_number: String,
}

impl FormFields for ClientFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require_text("client_name", "Client name", &self.client_name);
        let email = self.email.trim();
        if !email.is_empty() {
            let well_formed = email
                .split_once('@')
                .map_or(false, |(user, domain)| !user.is_empty() && domain.contains('.'));
            errors.check(well_formed, "email", "Enter a valid email address");
        }
        let phone = self.phone.trim();
        if !phone.is_empty() {
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            errors.check(
                (7..=15).contains(&digits),
                "phone",
                "Enter a valid phone number",
            );
        }
        errors
    }
}

impl From<&ClientDetails> for ClientFields {
    fn from(c: &ClientDetails) -> Self {
        Self {
            client_name: c.client_name.clone(),
            contact_person: c.contact_person.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            phone: c.phone.clone().unwrap_or_default(),
            address: c.address.clone().unwrap_or_default(),
            gst_number: c.gst_number.clone().unwrap_or_default(),
        }
    }
}

impl Record for ClientDetails {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Filterable for ClientDetails {
    fn filter_key(&self) -> &str {
        &self.client_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_contact_fields_are_checked_when_present() {
        let mut fields = ClientFields {
            client_name: "Greenfield Power".into(),
            ..Default::default()
        };
        assert!(fields.validate().is_empty());

        fields.email = "ops@greenfield".into();
        fields.phone = "12".into();
        let errors = fields.validate();
        assert!(errors.get("email").is_some());
        assert!(errors.get("phone").is_some());

        fields.email = "ops@greenfield.in".into();
        fields.phone = "+91 98765 43210".into();
        assert!(fields.validate().is_empty());
    }
}
