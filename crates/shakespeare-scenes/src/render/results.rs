//! Search results page.

use maud::{Markup, html};

use super::components::{format_headline, page_shell, scene_href, scene_label};
use crate::query::SearchResult;

/// View model for the results page.
pub struct ResultsPage<'a> {
    pub site_name: &'a str,
    /// The (already truncated) query. Always rendered escaped.
    pub query: &'a str,
    /// Hits in the order the store returned them.
    pub results: &'a [SearchResult],
}

impl ResultsPage<'_> {
    /// Render the results page.
    pub fn render(&self) -> Markup {
        let title = format!("{} – {}", self.query, self.site_name);
        let count = self.results.len();

        let body = html! {
            p class="results-summary" {
                (count) @if count == 1 { " scene matches " } @else { " scenes match " }
                "“" (self.query) "”"
            }
            @if self.results.is_empty() {
                p class="no-results" { "Nothing found. Try fewer or different words." }
            }
            @for hit in self.results {
                article class="result" {
                    a class="result-title" href=(scene_href(&hit.work_id, hit.act, hit.scene)) {
                        (hit.title)
                    }
                    div class="result-where" {
                        (scene_label(hit.act, hit.scene)) " · " (hit.description)
                    }
                    // Headline text comes from the corpus, not the user.
                    div class="result-snippet" { (format_headline(&hit.headline)) }
                }
            }
        };

        page_shell(&title, self.site_name, Some(self.query), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(work_id: &str, title: &str, act: i32, scene: i32, headline: &str) -> SearchResult {
        SearchResult {
            work_id: work_id.to_string(),
            title: title.to_string(),
            act,
            scene,
            description: "A street.".to_string(),
            headline: headline.to_string(),
        }
    }

    #[test]
    fn results_preserve_order() {
        let results = vec![
            hit("tempest", "The Tempest", 5, 1, "O <b>brave</b> new world"),
            hit("henry5", "Henry V", 3, 1, "Once more unto the <b>breach</b>"),
        ];
        let html = ResultsPage {
            site_name: "S",
            query: "brave",
            results: &results,
        }
        .render()
        .into_string();

        let first = html.find("The Tempest").unwrap();
        let second = html.find("Henry V").unwrap();
        assert!(first < second);
        assert!(html.contains("2 scenes match"));
        assert!(html.contains(r#"href="/scene?a=5&amp;s=1&amp;w=tempest""#));
    }

    #[test]
    fn results_headline_is_raw_with_breaks() {
        let results = vec![hit("hamlet", "Hamlet", 3, 1, "To <b>be</b>\nor not")];
        let html = ResultsPage {
            site_name: "S",
            query: "be",
            results: &results,
        }
        .render()
        .into_string();
        assert!(html.contains("To <b>be</b><br>or not"));
    }

    #[test]
    fn results_query_is_escaped() {
        let html = ResultsPage {
            site_name: "S",
            query: "<script>alert('x')</script>",
            results: &[],
        }
        .render()
        .into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn results_description_is_escaped() {
        let mut h = hit("hamlet", "Hamlet", 1, 1, "x");
        h.description = "<em>Elsinore</em>".to_string();
        let results = vec![h];
        let html = ResultsPage {
            site_name: "S",
            query: "x",
            results: &results,
        }
        .render()
        .into_string();
        assert!(html.contains("&lt;em&gt;Elsinore&lt;/em&gt;"));
    }

    #[test]
    fn empty_results_render_a_page() {
        let html = ResultsPage {
            site_name: "S",
            query: "zzzz",
            results: &[],
        }
        .render()
        .into_string();
        assert!(html.contains("0 scenes match"));
        assert!(html.contains(r#"class="no-results""#));
        assert!(!html.contains(r#"class="result""#));
    }

    #[test]
    fn single_result_wording() {
        let results = vec![hit("lear", "King Lear", 1, 1, "nothing")];
        let html = ResultsPage {
            site_name: "S",
            query: "nothing",
            results: &results,
        }
        .render()
        .into_string();
        assert!(html.contains("1 scene matches"));
    }
}
