use super::{escape, page};
use crate::dashboard::Dashboard;
use crate::models::Application;
use crate::notice::Notice;

const TITLE: &str = "Admin Dashboard";

pub fn render_login(brand: &str, notice: Option<&Notice>, error: Option<&str>) -> String {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();
    let body = format!(
        r#"<section class="card">
<h1>Admin Login</h1>
<form method="post" action="/admin/login">
<div class="field"><label for="token">Access token</label><input id="token" name="token" type="password" autocomplete="off">{error}</div>
<button type="submit">Sign in</button>
</form>
</section>"#
    );
    page("Admin Login", brand, notice, &body)
}

/// Table row. `View` only links while no detail panel is open, since the
/// panel has to be closed before another item can be opened.
fn row(app: &Application, panel_open: bool) -> String {
    let id = escape(&app.id);
    let view = if panel_open {
        r#"<span class="disabled" aria-disabled="true">View</span>"#.to_string()
    } else {
        format!(r#"<a href="/admin/applications/{id}">View</a>"#)
    };
    format!(
        r#"<tr><td>{name}</td><td>{phone}</td><td>{category}</td><td>{date}</td><td class="actions">{view}<a href="/admin/applications/{id}/pdf">PDF</a><a href="/admin/applications/{id}/delete">Delete</a></td></tr>"#,
        name = escape(&app.name),
        phone = escape(&app.phone_number),
        category = escape(&app.loan_category),
        date = escape(&app.submitted_on()),
    )
}

fn detail_panel(app: &Application) -> String {
    let id = escape(&app.id);
    let fields: String = app
        .detail_fields()
        .into_iter()
        .map(|(label, value)| {
            let value = if value.is_empty() { "-" } else { value };
            format!(r#"<div><p>{}</p><p><strong>{}</strong></p></div>"#, label, escape(value))
        })
        .collect();
    format!(
        r#"<section class="card" id="details">
<h2>Application Details</h2>
<p>Complete details of the applicant.</p>
<div class="grid">{fields}</div>
<div class="actions">
<form method="post" action="/admin/applications/{id}/close"><button type="submit">Close</button></form>
<a href="/admin/applications/{id}/pdf">Download PDF</a>
<a href="/admin/applications/{id}/delete">Delete</a>
</div>
</section>"#
    )
}

pub fn render_dashboard(brand: &str, dashboard: &Dashboard, notice: Option<&Notice>) -> String {
    let mut categories = String::from(r#"<option value="">All Loan Categories</option>"#);
    for category in dashboard.loan_categories() {
        let selected = if category == dashboard.filter_category { " selected" } else { "" };
        categories.push_str(&format!(
            r#"<option value="{0}"{1}>{0}</option>"#,
            escape(category),
            selected
        ));
    }

    let filtered = dashboard.filtered();
    let rows: String = if filtered.is_empty() {
        r#"<tr><td colspan="5">No applications found</td></tr>"#.to_string()
    } else {
        let panel_open = dashboard.detail().is_some();
        filtered.into_iter().map(|app| row(app, panel_open)).collect()
    };

    let detail = dashboard.detail().map(detail_panel).unwrap_or_default();

    let body = format!(
        r#"<div class="actions">
<h1>{title}</h1>
<a href="/admin?refresh=true">Refresh</a>
<form method="post" action="/admin/logout"><button type="submit">Logout</button></form>
</div>
<form method="get" action="/admin" class="actions">
<input type="text" name="search" placeholder="Search by name..." value="{search}">
<select name="category">{categories}</select>
<button type="submit">Filter</button>
</form>
{detail}
<section class="card">
<h2>Manage Loan Applications</h2>
<table>
<thead><tr><th>Name</th><th>Phone</th><th>Loan</th><th>Date</th><th>Actions</th></tr></thead>
<tbody>{rows}</tbody>
</table>
</section>"#,
        title = TITLE,
        search = escape(&dashboard.search_term),
    );
    page(TITLE, brand, notice, &body)
}

pub fn render_confirm_delete(brand: &str, app: &Application) -> String {
    let body = format!(
        r#"<section class="card">
<h1>Delete application from {name}?</h1>
<form method="post" action="/admin/applications/{id}/delete" class="actions">
<button type="submit" name="confirm" value="yes">Delete</button>
<button type="submit" name="confirm" value="no">Cancel</button>
</form>
</section>"#,
        name = escape(&app.name),
        id = escape(&app.id),
    );
    page("Confirm Delete", brand, None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: &str, name: &str, category: &str) -> Application {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "phoneNumber": "9876543210",
            "loanCategory": category,
        }))
        .unwrap()
    }

    #[test]
    fn empty_dashboard_says_so() {
        let html = render_dashboard("Brand", &Dashboard::default(), None);
        assert!(html.contains("No applications found"));
        assert!(!html.contains("Application Details"));
    }

    #[test]
    fn lists_rows_and_category_options() {
        let mut dashboard = Dashboard::default();
        dashboard.replace(vec![app("1", "Ramesh", "personal"), app("2", "Sita", "housing")]);
        dashboard.set_filters(None, Some("housing".into()));
        let html = render_dashboard("Brand", &dashboard, None);

        assert!(html.contains(r#"<option value="personal">personal</option>"#));
        assert!(html.contains(r#"<option value="housing" selected>housing</option>"#));
        assert!(html.contains("<td>Sita</td>"));
        assert!(!html.contains("<td>Ramesh</td>"));
    }

    #[test]
    fn detail_panel_fills_missing_values_with_dash() {
        let mut dashboard = Dashboard::default();
        dashboard.replace(vec![app("1", "Ramesh", "personal")]);
        dashboard.view("1");
        let html = render_dashboard("Brand", &dashboard, None);

        assert!(html.contains("Application Details"));
        assert!(html.contains("<p>Loan Category Other</p><p><strong>-</strong></p>"));
        assert!(html.contains(r#"action="/admin/applications/1/close""#));
    }

    #[test]
    fn view_links_are_disabled_while_a_panel_is_open() {
        let mut dashboard = Dashboard::default();
        dashboard.replace(vec![app("2", "Ramesh", "housing"), app("3", "Sita", "personal")]);
        let html = render_dashboard("Brand", &dashboard, None);
        assert!(html.contains(r#"<a href="/admin/applications/3">View</a>"#));

        dashboard.view("2");
        let html = render_dashboard("Brand", &dashboard, None);
        assert!(!html.contains(r#"href="/admin/applications/3">"#));
        assert!(!html.contains(r#"href="/admin/applications/2">"#));
        assert!(html.contains(r#"<span class="disabled" aria-disabled="true">View</span>"#));
        assert!(html.contains(r#"<a href="/admin/applications/3/delete">Delete</a>"#));

        dashboard.close();
        let html = render_dashboard("Brand", &dashboard, None);
        assert!(html.contains(r#"<a href="/admin/applications/3">View</a>"#));
    }

    #[test]
    fn confirmation_names_the_applicant() {
        let html = render_confirm_delete("Brand", &app("9", "Ravi & Sons", "business"));
        assert!(html.contains("Delete application from Ravi &amp; Sons?"));
        assert!(html.contains(r#"value="yes""#));
    }
}
