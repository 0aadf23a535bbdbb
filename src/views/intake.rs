use super::{escape, page};
use crate::config::SiteInfo;
use crate::models::{ApplicationForm, FieldErrors, Gender, LoanCategory};
use crate::notice::Notice;

fn error_line(errors: &FieldErrors, name: &str) -> String {
    errors
        .first(name)
        .map(|m| format!(r#"<p class="error">{}</p>"#, escape(m)))
        .unwrap_or_default()
}

fn input(name: &str, label: &str, kind: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field"><label for="{name}">{label}</label><input id="{name}" name="{name}" type="{kind}" value="{value}">{error}</div>"#,
        label = escape(label),
        value = escape(value),
        error = error_line(errors, name),
    )
}

fn select(name: &str, label: &str, options: &[(&str, &str)], selected: &str, errors: &FieldErrors) -> String {
    let mut opts = String::from(r#"<option value="">Select</option>"#);
    for (value, text) in options {
        opts.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            value,
            if *value == selected { " selected" } else { "" },
            escape(text),
        ));
    }
    format!(
        r#"<div class="field"><label for="{name}">{label}</label><select id="{name}" name="{name}">{opts}</select>{error}</div>"#,
        label = escape(label),
        error = error_line(errors, name),
    )
}

pub fn render_form(site: &SiteInfo, form: &ApplicationForm, errors: &FieldErrors, notice: Option<&Notice>) -> String {
    let genders: Vec<(&str, &str)> = Gender::ALL.iter().map(|g| (g.as_str(), g.label())).collect();
    let categories: Vec<(&str, &str)> = LoanCategory::ALL.iter().map(|c| (c.as_str(), c.label())).collect();

    let fields = [
        input("name", "Full Name *", "text", &form.name, errors),
        input("phoneNumber", "Phone Number *", "tel", &form.phone_number, errors),
        input("primaryContactNumber", "Primary Contact Number *", "tel", &form.primary_contact_number, errors),
        input("dateOfBirth", "Date of Birth *", "date", &form.date_of_birth, errors),
        select("gender", "Gender *", &genders, &form.gender, errors),
        select("loanCategory", "Loan Category *", &categories, &form.loan_category, errors),
        input("loanCategoryOther", "Specify Loan Category (if Other)", "text", &form.loan_category_other, errors),
        "<h3>Address</h3>".to_string(),
        r#"<div class="grid">"#.to_string(),
        input("doorNo", "Door No", "text", &form.door_no, errors),
        input("houseName", "House Name", "text", &form.house_name, errors),
        input("village", "Village *", "text", &form.village, errors),
        input("district", "District *", "text", &form.district, errors),
        input("state", "State *", "text", &form.state, errors),
        input("pincode", "Pincode *", "text", &form.pincode, errors),
        "</div>".to_string(),
        "<h3>Referrals</h3>".to_string(),
        r#"<div class="grid">"#.to_string(),
        input("referralName1", "Referral Name 1 *", "text", &form.referral_name1, errors),
        input("referralPhone1", "Referral Phone 1 *", "tel", &form.referral_phone1, errors),
        input("referralName2", "Referral Name 2 *", "text", &form.referral_name2, errors),
        input("referralPhone2", "Referral Phone 2 *", "tel", &form.referral_phone2, errors),
        "</div>".to_string(),
    ];

    let body = format!(
        r#"<p><a href="/">&larr; Back to Home</a></p>
<section class="card">
<h1>Loan Application Form</h1>
<p>Fill in your details</p>
<form method="post" action="/loan-form" novalidate>
{}
<button type="submit">Submit Application</button>
</form>
</section>"#,
        fields.concat()
    );
    page("Loan Application Form", &site.name, notice, &body)
}

pub fn render_thank_you(site: &SiteInfo, notice: Option<&Notice>) -> String {
    let body = r#"<section class="card">
<h1>Thank You</h1>
<p>Your application has been received. Our team will contact you shortly.</p>
<p><a href="/">Back to Home</a></p>
</section>"#;
    page("Thank You", &site.name, notice, body)
}
