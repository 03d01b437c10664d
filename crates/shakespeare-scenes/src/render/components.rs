//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// Book-like serif layout; search form sits in the header on every page.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fbf8f1;--fg:#1d1a16;--fg2:#4f4940;--fg3:#8a8174;--accent:#7a1f1f;--accent-hover:#5c1414;--border:rgba(122,31,31,.18);--serif:"Iowan Old Style","Palatino Linotype",Palatino,Georgia,serif}
body{font-family:var(--serif);line-height:1.65;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:720px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

.site-header{max-width:720px;width:100%;margin-bottom:2rem}
.site-title{font-size:1.6rem;font-weight:700;letter-spacing:-.01em;color:var(--fg)}
.site-title:hover{text-decoration:none;color:var(--accent)}
.search{display:flex;gap:.5rem;margin-top:.75rem}
.search input{flex:1;font:inherit;font-size:1rem;padding:.5rem .75rem;border:1px solid var(--border);border-radius:6px;background:#fff;color:var(--fg)}
.search input:focus{outline:2px solid var(--accent);outline-offset:-1px}
.search button{font:inherit;font-size:.95rem;padding:.5rem 1.1rem;border:none;border-radius:6px;background:var(--accent);color:#fff;cursor:pointer}
.search button:hover{background:var(--accent-hover)}

.home-intro{color:var(--fg2);font-size:1.1rem}
.home-hints{margin-top:1rem;color:var(--fg3);font-size:.95rem}
.home-hints code{font-family:ui-monospace,Menlo,monospace;font-size:.85em}

.results-summary{color:var(--fg3);font-size:.95rem;margin-bottom:1.25rem}
.result{padding:1rem 0;border-top:1px solid var(--border)}
.result-title{font-size:1.1rem;font-weight:600}
.result-where{font-size:.85rem;color:var(--fg3);font-variant:small-caps;letter-spacing:.03em}
.result-snippet{margin-top:.4rem;color:var(--fg2)}
.result-snippet b{color:var(--fg);background:rgba(122,31,31,.1);font-weight:600}
.no-results{color:var(--fg2);padding:1rem 0;border-top:1px solid var(--border)}

.scene-work{font-size:1.75rem;font-weight:700;letter-spacing:-.01em;line-height:1.25}
.scene-where{margin-top:.25rem;color:var(--fg3);font-variant:small-caps;letter-spacing:.04em}
.scene-description{margin-top:.5rem;font-style:italic;color:var(--fg2)}
.scene-body{margin-top:1.5rem;font-size:1.08rem;line-height:1.8}
.scene-body p{margin-top:1rem}

.footer{text-align:center;margin-top:2rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);width:100%;max-width:720px}

@media(prefers-color-scheme:dark){
:root{--bg:#14120f;--fg:#ece6da;--fg2:#b9b0a2;--fg3:#7d7568;--accent:#e07a6a;--accent-hover:#f0998b;--border:rgba(224,122,106,.22)}
.search input{background:#1d1a16}
.result-snippet b{background:rgba(224,122,106,.15)}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Georgia,serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fbf8f1;color:#1d1a16;padding:1rem}
.error-page{text-align:center;max-width:420px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#6b6358;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#7a1f1f}
@media(prefers-color-scheme:dark){
body{background:#14120f;color:#ece6da}
.error-page p{color:#b9b0a2}
.error-page a{color:#e07a6a}
}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles only, no scripts, forms may only submit to this origin.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'self'; form-action 'self'; base-uri 'none'; frame-ancestors 'none'";

/// Render the full HTML page shell with `<head>`, site header, and footer.
///
/// `query` prefills the search box; it is always escaped.
pub fn page_shell(
    title: &str,
    site_name: &str,
    query: Option<&str>,
    body_content: Markup,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="site-header" {
                    a href="/" class="site-title" { (site_name) }
                    (search_form(query))
                }
                main { (body_content) }
                footer class="footer" {
                    "Texts from the public-domain works of William Shakespeare."
                }
            }
        }
    }
}

/// Render the search form, optionally prefilled.
pub fn search_form(query: Option<&str>) -> Markup {
    html! {
        form class="search" method="get" action="/" role="search" {
            input type="search" name="q" maxlength="100" placeholder="Search the plays"
                aria-label="Search the plays" value=[query];
            button type="submit" { "Search" }
        }
    }
}

/// Link to a single scene page, with every value form-urlencoded.
pub fn scene_href(work_id: &str, act: i32, scene: i32) -> String {
    let (act, scene) = (act.to_string(), scene.to_string());
    let pairs = [("a", act.as_str()), ("s", scene.as_str()), ("w", work_id)];
    match serde_urlencoded::to_string(pairs) {
        Ok(query) => format!("/scene?{query}"),
        // String pairs always serialize; fall back to the home page regardless.
        Err(_) => "/".to_string(),
    }
}

/// Human-readable scene location, e.g. "Act 1, Scene 2".
pub fn scene_label(act: i32, scene: i32) -> String {
    format!("Act {act}, Scene {scene}")
}

/// Format a scene body for raw HTML output.
///
/// Paragraph breaks (`\n\n`) become `<p>` and the remaining newlines `<br>`.
/// The text is corpus-sourced and passed through unescaped.
pub fn format_body(body: &str) -> PreEscaped<String> {
    PreEscaped(body.replace("\n\n", "<p>").replace('\n', "<br>"))
}

/// Format a search headline for raw HTML output.
///
/// Keeps the store's `<b>` highlighting; newlines become `<br>`.
pub fn format_headline(headline: &str) -> PreEscaped<String> {
    PreEscaped(headline.replace('\n', "<br>"))
}
