//! Home page, shown when there is no search query.

use maud::{Markup, html};

use super::components::page_shell;

/// View model for the home page.
pub struct HomePage<'a> {
    pub site_name: &'a str,
}

impl HomePage<'_> {
    /// Render the home page.
    pub fn render(&self) -> Markup {
        let body = html! {
            p class="home-intro" {
                "Search the complete plays for a word or phrase, then read the scene it comes from."
            }
            p class="home-hints" {
                "Quote a phrase to match it exactly, e.g. " code { "\"brave new world\"" }
                ", or exclude a word with a minus sign, e.g. " code { "ghost -hamlet" } "."
            }
        };

        page_shell(self.site_name, self.site_name, None, body)
    }
}
