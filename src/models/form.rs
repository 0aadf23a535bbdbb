use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::application::{Gender, LoanCategory};
use super::payload::AddressParts;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw application as typed into the intake form.
///
/// Every field defaults to empty so a partially filled form (or a JSON body
/// sent on each keystroke) still deserializes and gets field-level messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(length(min = 10, message = "Phone number must be at least 10 characters"))]
    pub phone_number: String,

    #[validate(length(min = 10, message = "Primary contact number must be at least 10 characters"))]
    pub primary_contact_number: String,

    #[validate(custom(function = "validate_date_of_birth"))]
    pub date_of_birth: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[validate(custom(function = "validate_loan_category"))]
    pub loan_category: String,

    pub loan_category_other: String,

    // Address
    pub door_no: String,
    pub house_name: String,

    #[validate(length(min = 2, message = "Village must be at least 2 characters"))]
    pub village: String,

    #[validate(length(min = 2, message = "District must be at least 2 characters"))]
    pub district: String,

    #[validate(length(min = 2, message = "State must be at least 2 characters"))]
    pub state: String,

    #[validate(length(min = 5, message = "Pincode must be at least 5 characters"))]
    pub pincode: String,

    // Referrals
    #[validate(length(min = 2, message = "Referral name must be at least 2 characters"))]
    pub referral_name1: String,

    #[validate(length(min = 10, message = "Referral phone must be at least 10 characters"))]
    pub referral_phone1: String,

    #[validate(length(min = 2, message = "Referral name must be at least 2 characters"))]
    pub referral_name2: String,

    #[validate(length(min = 10, message = "Referral phone must be at least 10 characters"))]
    pub referral_phone2: String,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", "Date of birth is required"));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| invalid("date", "Date of birth must be a valid date (YYYY-MM-DD)"))
}

fn validate_gender(value: &str) -> Result<(), ValidationError> {
    Gender::parse(value)
        .map(|_| ())
        .ok_or_else(|| invalid("gender", "Select a gender"))
}

fn validate_loan_category(value: &str) -> Result<(), ValidationError> {
    LoanCategory::parse(value)
        .map(|_| ())
        .ok_or_else(|| invalid("loan_category", "Select a loan category"))
}

/// Human-readable validation messages keyed by wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn single(field: &str, message: &str) -> Self {
        Self(BTreeMap::from([(field.to_string(), vec![message.to_string()])]))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message recorded for `field`, if any.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|m| m.first()).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            fields.insert(field.to_case(Case::Camel), messages);
        }
        Self(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Referral {
    pub name: String,
    pub phone: String,
}

/// An application that passed every schema rule, with typed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedApplication {
    pub name: String,
    pub phone_number: String,
    pub primary_contact_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub loan_category: LoanCategory,
    pub loan_category_other: Option<String>,
    pub address: AddressParts,
    pub referrals: [Referral; 2],
}

impl ApplicationForm {
    /// Field-level check, cheap enough to run on every change.
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    /// Full check producing the typed application.
    pub fn validate_into(&self) -> Result<ValidatedApplication, FieldErrors> {
        self.check()?;

        let gender = Gender::parse(&self.gender)
            .ok_or_else(|| FieldErrors::single("gender", "Select a gender"))?;
        let loan_category = LoanCategory::parse(&self.loan_category)
            .ok_or_else(|| FieldErrors::single("loanCategory", "Select a loan category"))?;
        let date_of_birth = NaiveDate::parse_from_str(&self.date_of_birth, DATE_FORMAT).map_err(|_| {
            FieldErrors::single("dateOfBirth", "Date of birth must be a valid date (YYYY-MM-DD)")
        })?;

        Ok(ValidatedApplication {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            primary_contact_number: self.primary_contact_number.clone(),
            date_of_birth,
            gender,
            loan_category,
            loan_category_other: Some(self.loan_category_other.clone()).filter(|s| !s.is_empty()),
            address: AddressParts {
                door_no: Some(self.door_no.clone()).filter(|s| !s.is_empty()),
                house_name: Some(self.house_name.clone()).filter(|s| !s.is_empty()),
                village: self.village.clone(),
                district: self.district.clone(),
                state: self.state.clone(),
                pincode: self.pincode.clone(),
            },
            referrals: [
                Referral {
                    name: self.referral_name1.clone(),
                    phone: self.referral_phone1.clone(),
                },
                Referral {
                    name: self.referral_name2.clone(),
                    phone: self.referral_phone2.clone(),
                },
            ],
        })
    }
}
