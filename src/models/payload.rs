use chrono::NaiveDate;
use serde::Serialize;

use super::application::{Gender, LoanCategory};
use super::form::ValidatedApplication;

/// Structured address as collected by the form. Only the concatenated
/// string produced by [`AddressParts::reshape`] is ever transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub door_no: Option<String>,
    pub house_name: Option<String>,
    pub village: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
}

impl AddressParts {
    /// `Door No: X, House: Y, Village: V, District: D, State: S, Pincode: P`,
    /// with empty parts left out.
    pub fn reshape(&self) -> String {
        let parts: [(&str, Option<&str>); 6] = [
            ("Door No", self.door_no.as_deref()),
            ("House", self.house_name.as_deref()),
            ("Village", Some(self.village.as_str())),
            ("District", Some(self.district.as_str())),
            ("State", Some(self.state.as_str())),
            ("Pincode", Some(self.pincode.as_str())),
        ];

        parts
            .into_iter()
            .filter_map(|(label, value)| match value {
                Some(v) if !v.is_empty() => Some(format!("{label}: {v}")),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The category value sent to the backend. A custom category replaces the
/// literal `other` whenever one was supplied.
pub fn resolve_category(category: LoanCategory, other: Option<&str>) -> String {
    match (category, other) {
        (LoanCategory::Other, Some(custom)) if !custom.is_empty() => custom.to_string(),
        _ => category.as_str().to_string(),
    }
}

/// JSON document POSTed to the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub name: String,
    pub phone_number: String,
    pub primary_contact_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub loan_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_category_other: Option<String>,
    pub address: String,
    pub referral_name1: String,
    pub referral_phone1: String,
    pub referral_name2: String,
    pub referral_phone2: String,
}

impl From<ValidatedApplication> for ApplicationPayload {
    fn from(app: ValidatedApplication) -> Self {
        let loan_category = resolve_category(app.loan_category, app.loan_category_other.as_deref());
        let address = app.address.reshape();
        let [first, second] = app.referrals;

        Self {
            name: app.name,
            phone_number: app.phone_number,
            primary_contact_number: app.primary_contact_number,
            date_of_birth: app.date_of_birth,
            gender: app.gender,
            loan_category,
            loan_category_other: app.loan_category_other,
            address,
            referral_name1: first.name,
            referral_phone1: first.phone,
            referral_name2: second.name,
            referral_phone2: second.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::tests::filled_form;
    use serde_json::json;

    fn parts(door_no: &str, house_name: &str) -> AddressParts {
        AddressParts {
            door_no: Some(door_no.to_string()),
            house_name: Some(house_name.to_string()),
            village: "X".into(),
            district: "Y".into(),
            state: "Z".into(),
            pincode: "560001".into(),
        }
    }

    #[test]
    fn empty_door_number_is_omitted() {
        assert_eq!(
            parts("", "12B").reshape(),
            "House: 12B, Village: X, District: Y, State: Z, Pincode: 560001"
        );
    }

    #[test]
    fn all_parts_in_fixed_order() {
        assert_eq!(
            parts("7", "Rose Villa").reshape(),
            "Door No: 7, House: Rose Villa, Village: X, District: Y, State: Z, Pincode: 560001"
        );
    }

    #[test]
    fn missing_optionals_leave_no_dangling_separator() {
        let mut address = parts("", "");
        address.door_no = None;
        assert_eq!(address.reshape(), "Village: X, District: Y, State: Z, Pincode: 560001");
    }

    #[test]
    fn custom_category_replaces_other() {
        let mut form = filled_form();
        form.loan_category = "other".into();
        form.loan_category_other = "Education Loan".into();
        let payload = ApplicationPayload::from(form.validate_into().unwrap());
        assert_eq!(payload.loan_category, "Education Loan");
    }

    #[test]
    fn other_without_custom_value_stays_other() {
        assert_eq!(resolve_category(LoanCategory::Other, Some("")), "other");
        assert_eq!(resolve_category(LoanCategory::Other, None), "other");
    }

    #[test]
    fn custom_value_ignored_for_listed_categories() {
        assert_eq!(resolve_category(LoanCategory::Business, Some("Gold")), "business");
    }

    #[test]
    fn payload_carries_only_the_reshaped_address() {
        let payload = ApplicationPayload::from(filled_form().validate_into().unwrap());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ramesh Kumar",
                "phoneNumber": "9876543210",
                "primaryContactNumber": "9123456780",
                "dateOfBirth": "1990-04-12",
                "gender": "male",
                "loanCategory": "housing",
                "address": "Door No: 14, House: Lakshmi Nilaya, Village: Hebbal, District: Bangalore Urban, State: Karnataka, Pincode: 560024",
                "referralName1": "Suresh",
                "referralPhone1": "9000000001",
                "referralName2": "Meena",
                "referralPhone2": "9000000002"
            })
        );
        for key in ["doorNo", "houseName", "village", "district", "state", "pincode"] {
            assert!(value.get(key).is_none(), "{key} leaked into the payload");
        }
    }
}
