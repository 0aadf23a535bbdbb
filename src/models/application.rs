use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

pub type ApplicationId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanCategory {
    Personal,
    Housing,
    Business,
    VehicleOld,
    VehicleNew,
    Other,
}

impl LoanCategory {
    pub const ALL: [LoanCategory; 6] = [
        LoanCategory::Personal,
        LoanCategory::Housing,
        LoanCategory::Business,
        LoanCategory::VehicleOld,
        LoanCategory::VehicleNew,
        LoanCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LoanCategory::Personal => "personal",
            LoanCategory::Housing => "housing",
            LoanCategory::Business => "business",
            LoanCategory::VehicleOld => "vehicle-old",
            LoanCategory::VehicleNew => "vehicle-new",
            LoanCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoanCategory::Personal => "Personal Loan",
            LoanCategory::Housing => "Housing Loan",
            LoanCategory::Business => "Business Loan",
            LoanCategory::VehicleOld => "Vehicle Loan (Old)",
            LoanCategory::VehicleNew => "Vehicle Loan (New)",
            LoanCategory::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// A submitted application as served by the backend.
///
/// `loan_category` stays a free string: once a custom category is supplied
/// the stored value is whatever the applicant typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id", alias = "id")]
    pub id: ApplicationId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub primary_contact_number: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub loan_category: String,
    #[serde(default)]
    pub loan_category_other: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub referral_name1: String,
    #[serde(default)]
    pub referral_phone1: String,
    #[serde(default)]
    pub referral_name2: String,
    #[serde(default)]
    pub referral_phone2: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

impl Application {
    /// Submission date for display, e.g. `05/11/2025`. Unparseable
    /// timestamps are shown as received.
    pub fn submitted_on(&self) -> String {
        match self.submitted_at.as_deref() {
            None | Some("") => "-".to_string(),
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|ts| ts.format("%d/%m/%Y").to_string())
                .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.format("%d/%m/%Y").to_string()))
                .unwrap_or_else(|_| raw.to_string()),
        }
    }

    /// Label/value pairs shown in the detail panel, in display order.
    pub fn detail_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Full Name", self.name.as_str()),
            ("Phone Number", self.phone_number.as_str()),
            ("Primary Contact", self.primary_contact_number.as_str()),
            ("Gender", self.gender.as_str()),
            ("DOB", self.date_of_birth.as_str()),
            ("Loan Category", self.loan_category.as_str()),
            ("Loan Category Other", self.loan_category_other.as_deref().unwrap_or("")),
            ("Address", self.address.as_str()),
            ("Referral Name 1", self.referral_name1.as_str()),
            ("Referral Phone 1", self.referral_phone1.as_str()),
            ("Referral Name 2", self.referral_name2.as_str()),
            ("Referral Phone 2", self.referral_phone2.as_str()),
            ("Submitted At", self.submitted_at.as_deref().unwrap_or("")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_mongo_style_identity() {
        let app: Application = serde_json::from_value(json!({
            "_id": "65f1c2",
            "name": "Ramesh",
            "phoneNumber": "9876543210",
            "loanCategory": "personal",
            "submittedAt": "2025-11-05T10:15:00.000Z"
        }))
        .unwrap();
        assert_eq!(app.id, "65f1c2");
        assert_eq!(app.phone_number, "9876543210");
        assert_eq!(app.loan_category_other, None);
        assert_eq!(app.submitted_on(), "05/11/2025");
    }

    #[test]
    fn accepts_plain_id_key() {
        let app: Application = serde_json::from_value(json!({"id": "a1", "name": "Sita"})).unwrap();
        assert_eq!(app.id, "a1");
        assert_eq!(app.submitted_on(), "-");
    }

    #[test]
    fn odd_timestamps_are_shown_verbatim() {
        let app: Application = serde_json::from_value(json!({"id": "a1", "submittedAt": "yesterday"})).unwrap();
        assert_eq!(app.submitted_on(), "yesterday");
    }

    #[test]
    fn category_wire_values() {
        assert_eq!(LoanCategory::parse("vehicle-old"), Some(LoanCategory::VehicleOld));
        assert_eq!(LoanCategory::parse("Vehicle-Old"), None);
        assert_eq!(serde_json::to_value(LoanCategory::VehicleNew).unwrap(), json!("vehicle-new"));
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse(""), None);
    }
}
