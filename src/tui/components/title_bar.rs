//! # TitleBar Component
//!
//! Top status bar: application name, current walkthrough page, and the
//! transient status message. Purely presentational - all three values
//! arrive as props, so it renders exactly what it is given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Title of the current walkthrough page.
    pub screen_title: &'static str,
    /// Transient status (e.g. "Monitor muted").
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: &'static str, status_message: String) -> Self {
        Self {
            screen_title,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("pacesim - {}", self.screen_title)
        } else {
            format!("pacesim - {} | {}", self.screen_title, self.status_message)
        };
        frame.render_widget(Span::raw(title_text), area);
    }
}
