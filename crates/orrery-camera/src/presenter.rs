//! Boundary to whatever shows descriptive text next to the scene.

use tracing::info;

/// Receives descriptive payloads when the focus or view changes.
pub trait InfoPresenter {
    /// A body was focused.
    fn present_body(&mut self, title: &str, description: &str, facts: &[String]);
    /// A scale view was selected.
    fn present_view(&mut self, title: &str, description_html: &str);
}

/// A captured presenter call.
#[derive(Clone, Debug, PartialEq)]
pub enum Presentation {
    Body {
        title: String,
        description: String,
        facts: Vec<String>,
    },
    View {
        title: String,
        description_html: String,
    },
}

/// Stores every payload it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    pub presentations: Vec<Presentation>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Presentation> {
        self.presentations.last()
    }
}

impl InfoPresenter for RecordingPresenter {
    fn present_body(&mut self, title: &str, description: &str, facts: &[String]) {
        self.presentations.push(Presentation::Body {
            title: title.to_string(),
            description: description.to_string(),
            facts: facts.to_vec(),
        });
    }

    fn present_view(&mut self, title: &str, description_html: &str) {
        self.presentations.push(Presentation::View {
            title: title.to_string(),
            description_html: description_html.to_string(),
        });
    }
}

/// Writes payloads to the log. Used by the headless host.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingPresenter;

impl InfoPresenter for TracingPresenter {
    fn present_body(&mut self, title: &str, description: &str, facts: &[String]) {
        info!(target: "orrery::info", %title, %description, facts = ?facts, "body info");
    }

    fn present_view(&mut self, title: &str, description_html: &str) {
        info!(target: "orrery::info", %title, %description_html, "view info");
    }
}
