use super::{escape, page};
use crate::config::SiteInfo;

pub fn render(site: &SiteInfo) -> String {
    let body = format!(
        r#"<h1>{name}</h1>
<a class="card" href="/loan-form" style="display:block;color:inherit;text-decoration:none">
  <h2>Apply for Loan</h2>
  <p>Submit your loan application</p>
  <p>Fill out our simple form to enquire about personal, housing, business, or vehicle loans, and our team will contact you shortly.</p>
  <strong>Start Application</strong>
</a>
<section class="card">
  <h2>Contact Us</h2>
  <p>Reach out for loan assistance or queries</p>
  <p>Phone: <a href="tel:{phone_href}">{phone}</a></p>
  <p>Email: <a href="mailto:{email}">{email}</a></p>
  <p>Instagram: <a href="https://www.instagram.com/{instagram}" rel="noopener noreferrer">@{instagram}</a></p>
  <p>{name}<br>{address}</p>
</section>"#,
        name = escape(&site.name),
        phone = escape(&site.phone),
        phone_href = escape(&site.phone.replace(' ', "")),
        email = escape(&site.email),
        instagram = escape(&site.instagram),
        address = escape(&site.address),
    );
    page(&site.name, &site.name, None, &body)
}
