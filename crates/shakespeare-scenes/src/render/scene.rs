//! Single scene page.

use maud::{Markup, html};

use super::components::{format_body, page_shell, scene_label};

/// View model for a scene page.
pub struct ScenePage<'a> {
    pub site_name: &'a str,
    pub work_title: &'a str,
    pub act: i32,
    pub scene: i32,
    pub description: &'a str,
    /// Unformatted scene text.
    pub body: &'a str,
}

impl ScenePage<'_> {
    /// Render the scene page.
    pub fn render(&self) -> Markup {
        let label = scene_label(self.act, self.scene);
        let title = format!("{}, {} – {}", self.work_title, label, self.site_name);

        let body = html! {
            article class="scene" {
                h1 class="scene-work" { (self.work_title) }
                div class="scene-where" { (label) }
                p class="scene-description" { (self.description) }
                // Scene text comes from the corpus, not the user.
                div class="scene-body" { (format_body(self.body)) }
            }
        };

        page_shell(&title, self.site_name, None, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page<'a>(body: &'a str, description: &'a str) -> ScenePage<'a> {
        ScenePage {
            site_name: "S",
            work_title: "Hamlet",
            act: 1,
            scene: 2,
            description,
            body,
        }
    }

    #[test]
    fn scene_body_gets_breaks() {
        let html = page("Line one.\nLine two.\n\nNew paragraph.", "A room of state.")
            .render()
            .into_string();
        assert!(html.contains("Line one.<br>Line two.<p>New paragraph."));
        assert!(html.contains("A room of state."));
        assert!(html.contains("Act 1, Scene 2"));
        assert!(html.contains("<h1 class=\"scene-work\">Hamlet</h1>"));
    }

    #[test]
    fn scene_description_is_escaped() {
        let html = page("x", "<b>Elsinore</b>").render().into_string();
        assert!(html.contains("&lt;b&gt;Elsinore&lt;/b&gt;"));
    }

    #[test]
    fn scene_title_names_work_and_location() {
        let html = page("x", "y").render().into_string();
        assert!(html.contains("<title>Hamlet, Act 1, Scene 2 – S</title>"));
    }
}
