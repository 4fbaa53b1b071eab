//! # ConsolePane Component
//!
//! Scrollable view of the simulated uploader console.
//!
//! ## Responsibilities
//!
//! - Display the append-only console entries with severity colors
//! - Stick to the bottom while new entries arrive (the "scroll to
//!   bottom" side effect of every append)
//! - Unpin on manual scroll-up, re-pin when scrolled back to the end
//!
//! `ConsolePane` is a transient component (created each frame) wrapping
//! `&mut ConsolePaneState` (persistent scroll state) and the
//! `ConsoleLog` (props).

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::console::{ConsoleLog, Severity};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the console pane. Persisted in the parent TuiState.
pub struct ConsolePaneState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content.
    pub stick_to_bottom: bool,
    /// Last known viewport height, cached during render.
    viewport_height: u16,
    /// Total content height, cached during render.
    content_height: u16,
}

impl Default for ConsolePaneState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePaneState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
            content_height: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset();
        let y = current
            .y
            .saturating_add_signed(delta as i16)
            .min(self.max_scroll());
        self.scroll_state.set_offset(Position { x: current.x, y });
    }

    /// Re-engage auto-scroll if the user has reached the bottom, so
    /// scrolling past the end pins back to it.
    fn repin_if_at_bottom(&mut self) {
        if self.scroll_state.offset().y >= self.max_scroll() {
            self.stick_to_bottom = true;
        }
    }
}

impl EventHandler for ConsolePaneState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => {
                self.stick_to_bottom = false;
                self.scroll_by(-1);
            }
            TuiEvent::ScrollDown => {
                self.scroll_by(1);
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.stick_to_bottom = false;
                self.scroll_by(-i32::from(self.viewport_height.max(1)));
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_by(i32::from(self.viewport_height.max(1)));
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => {
                let max = self.max_scroll();
                self.scroll_state.set_offset(Position { x: 0, y: max });
                self.stick_to_bottom = true;
            }
            _ => return None,
        }
        Some(())
    }
}

/// Scrollable console view. Created fresh each frame.
pub struct ConsolePane<'a> {
    pub state: &'a mut ConsolePaneState,
    pub log: &'a ConsoleLog,
}

impl<'a> ConsolePane<'a> {
    pub fn new(state: &'a mut ConsolePaneState, log: &'a ConsoleLog) -> Self {
        Self { state, log }
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default(),
        Severity::Warn => Style::default().fg(Color::Yellow),
        Severity::Error => Style::default().fg(Color::Red),
    }
}

impl Component for ConsolePane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("MyCareLink 5000 - Firmware Upload Console");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_width = inner.width.saturating_sub(1); // scrollbar safe area
        if content_width == 0 || inner.height == 0 {
            return;
        }

        // Build one wrapped paragraph per entry and cache heights
        let rendered: Vec<(Paragraph, u16)> = self
            .log
            .entries()
            .iter()
            .map(|entry| {
                let line = Line::styled(entry.format(), severity_style(entry.severity));
                let paragraph = Paragraph::new(line).wrap(Wrap { trim: false });
                let height = paragraph.line_count(content_width) as u16;
                (paragraph, height)
            })
            .collect();

        let total_height: u16 = rendered.iter().map(|(_, h)| h).sum();
        self.state.viewport_height = inner.height;
        self.state.content_height = total_height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (paragraph, height) in rendered {
            scroll_view.render_widget(paragraph, Rect::new(0, y_offset, content_width, height));
            y_offset += height;
        }

        if self.state.stick_to_bottom {
            let y = total_height.saturating_sub(inner.height);
            self.state.scroll_state.set_offset(Position { x: 0, y });
        }
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
