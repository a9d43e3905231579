//! Portfolio page generation.
//!
//! The selectable designs are a closed set rendered in code; they share one
//! page skeleton and differ in stylesheet. Every user-supplied value passes
//! through `escape_html` on its way into markup, because the classifier
//! stores resume lines verbatim and profile fields arrive straight from the
//! form.

use serde::{Deserialize, Serialize};

use crate::portfolio::ingest::PortfolioDraft;

/// A selectable page design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioTemplate {
    Classic,
    Modern,
    Minimal,
}

impl PortfolioTemplate {
    pub fn as_str(self) -> &'static str {
        match self {
            PortfolioTemplate::Classic => "classic",
            PortfolioTemplate::Modern => "modern",
            PortfolioTemplate::Minimal => "minimal",
        }
    }
}

const CLASSIC_STYLE: &str = "\
body{font-family:Georgia,serif;margin:0;color:#222;background:#f4f1ea}\
header{background:#2c3e50;color:#fff;padding:3rem 2rem;text-align:center}\
header .photo{width:120px;height:120px;border-radius:50%;object-fit:cover;border:3px solid #fff}\
h1{margin:0.5rem 0 0;font-size:2.2rem}\
.role{margin:0.25rem 0 0;font-style:italic;color:#d5dbe1}\
.contact{list-style:none;padding:0;margin:1rem 0 0}\
.contact li{display:inline-block;margin:0 0.75rem}\
.contact a{color:#aed6f1}\
main{max-width:720px;margin:2rem auto;padding:0 1.5rem}\
h2{border-bottom:2px solid #2c3e50;padding-bottom:0.25rem}\
section ul{padding-left:1.25rem}";

const MODERN_STYLE: &str = "\
body{font-family:'Segoe UI',Helvetica,Arial,sans-serif;margin:0;color:#1b1b1b;background:#fff}\
header{background:linear-gradient(135deg,#4a00e0,#8e2de2);color:#fff;padding:4rem 2rem}\
header .photo{width:110px;height:110px;border-radius:12px;object-fit:cover}\
h1{margin:0.5rem 0 0;font-size:2.5rem;font-weight:600}\
.role{margin:0.25rem 0 0;opacity:0.85}\
.contact{list-style:none;padding:0;margin:1rem 0 0}\
.contact li{display:inline-block;margin-right:1.25rem}\
.contact a{color:#ffd9ff}\
main{max-width:780px;margin:2.5rem auto;padding:0 1.5rem}\
h2{color:#4a00e0;text-transform:uppercase;letter-spacing:0.08em;font-size:1rem}\
section ul{list-style:square;padding-left:1.25rem}";

const MINIMAL_STYLE: &str = "\
body{font-family:Helvetica,Arial,sans-serif;margin:0;color:#111;background:#fff}\
header{padding:3rem 1.5rem 1rem;border-bottom:1px solid #ddd}\
header .photo{width:90px;height:90px;border-radius:50%;object-fit:cover}\
h1{margin:0.5rem 0 0;font-size:1.8rem;font-weight:500}\
.role{margin:0.25rem 0 0;color:#666}\
.contact{list-style:none;padding:0;margin:0.75rem 0 0;color:#444}\
.contact li{display:inline-block;margin-right:1rem}\
.contact a{color:#444}\
main{max-width:640px;margin:1.5rem auto;padding:0 1.5rem}\
h2{font-size:1.05rem;margin-top:2rem}\
section ul{padding-left:1.1rem}";

/// Renders a complete standalone HTML page for `draft` in the chosen
/// design. Pure string building; storage is the caller's concern.
pub fn render_portfolio(template: PortfolioTemplate, draft: &PortfolioDraft) -> String {
    let style = match template {
        PortfolioTemplate::Classic => CLASSIC_STYLE,
        PortfolioTemplate::Modern => MODERN_STYLE,
        PortfolioTemplate::Minimal => MINIMAL_STYLE,
    };

    let name = escape_html(&draft.name);
    let mut html = String::with_capacity(2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{name} | Portfolio</title>\n"));
    html.push_str(&format!("<style>{style}</style>\n"));
    html.push_str("</head>\n");
    html.push_str(&format!("<body class=\"{}\">\n", template.as_str()));

    html.push_str("<header>\n");
    if let Some(photo_url) = &draft.photo_url {
        html.push_str(&format!(
            "<img class=\"photo\" src=\"{}\" alt=\"{name}\">\n",
            escape_html(photo_url)
        ));
    }
    html.push_str(&format!("<h1>{name}</h1>\n"));
    html.push_str(&format!("<p class=\"role\">{}</p>\n", escape_html(&draft.title)));
    html.push_str("<ul class=\"contact\">\n");
    html.push_str(&format!("<li>{}</li>\n", escape_html(&draft.email)));
    html.push_str(&format!("<li>{}</li>\n", escape_html(&draft.phone)));
    push_link(&mut html, "LinkedIn", &draft.linkedin);
    push_link(&mut html, "GitHub", &draft.github);
    html.push_str("</ul>\n");
    html.push_str("</header>\n");

    html.push_str("<main>\n");
    html.push_str(&format!(
        "<section>\n<h2>About</h2>\n<p>{}</p>\n</section>\n",
        escape_html(&draft.summary)
    ));
    push_section(&mut html, "Skills", &draft.sections.skills);
    push_section(&mut html, "Projects", &draft.sections.projects);
    push_section(&mut html, "Education", &draft.sections.education);
    html.push_str("</main>\n");

    html.push_str("</body>\n</html>\n");
    html
}

fn push_link(html: &mut String, label: &str, url: &str) {
    if url.trim().is_empty() {
        return;
    }
    html.push_str(&format!(
        "<li><a href=\"{}\">{label}</a></li>\n",
        escape_html(url)
    ));
}

fn push_section(html: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    html.push_str(&format!("<section>\n<h2>{heading}</h2>\n<ul>\n"));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape_html(item)));
    }
    html.push_str("</ul>\n</section>\n");
}

/// Escapes the five HTML metacharacters. Quote escaping matters because
/// some values land inside attribute positions.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
