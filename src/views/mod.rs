//! Server-rendered HTML. Every dynamic value goes through [`escape`].

pub mod admin;
pub mod intake;
pub mod landing;

use crate::notice::Notice;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f7f8fa; color: #1f2933; }
header { background: #fff; border-bottom: 1px solid #e4e7eb; padding: 1rem 2rem; }
header a { color: inherit; text-decoration: none; font-weight: 700; font-size: 1.25rem; }
main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.card { background: #fff; border: 1px solid #e4e7eb; border-radius: 12px; padding: 1.5rem; margin-bottom: 1.5rem; }
.notice { border-radius: 8px; padding: .75rem 1rem; margin-bottom: 1rem; background: #e8f5e9; }
.notice.destructive { background: #fdecea; }
.field { margin-bottom: 1rem; }
.field label { display: block; font-weight: 600; margin-bottom: .25rem; }
.field input, .field select { width: 100%; padding: .5rem; box-sizing: border-box; }
.error { color: #c62828; font-size: .875rem; }
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: .5rem; border-bottom: 1px solid #e4e7eb; }
.actions { display: flex; gap: .5rem; }
.disabled { color: #9ca3af; cursor: not-allowed; }
"#;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn notice_banner(notice: Option<&Notice>) -> String {
    match notice {
        Some(n) => format!(
            r#"<div class="notice{}" role="status"><strong>{}</strong> {}</div>"#,
            if n.is_destructive() { " destructive" } else { "" },
            escape(&n.title),
            escape(&n.description),
        ),
        None => String::new(),
    }
}

pub fn page(title: &str, brand: &str, notice: Option<&Notice>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<header><a href="/">{brand}</a></header>
<main>
{notice}
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        style = STYLE,
        brand = escape(brand),
        notice = notice_banner(notice),
    )
}
