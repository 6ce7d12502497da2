use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

/// Inline field messages, keyed by field name. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn require_text(&mut self, field: &str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, format!("{} is required", label));
        }
    }

    pub fn require<T>(&mut self, field: &str, label: &str, value: &Option<T>) {
        if value.is_none() {
            self.add(field, format!("{} is required", label));
        }
    }

    pub fn require_positive(&mut self, field: &str, label: &str, value: &Option<Decimal>) {
        match value {
            None => self.add(field, format!("{} is required", label)),
            Some(v) if *v <= Decimal::ZERO => {
                self.add(field, format!("{} must be greater than zero", label))
            }
            Some(_) => {}
        }
    }

    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_first_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.require_text("land_name", "Land name", "   ");
        errors.add("land_name", "second message");
        errors.require_positive("total_area_acres", "Total area", &Some(Decimal::ZERO));
        errors.require::<i64>("location", "Location", &Some(3));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("land_name"), Some("Land name is required"));
        assert_eq!(
            errors.get("total_area_acres"),
            Some("Total area must be greater than zero")
        );
        assert_eq!(
            errors.to_string(),
            "land_name: Land name is required; total_area_acres: Total area must be greater than zero"
        );
    }
}
