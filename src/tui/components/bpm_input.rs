//! # BpmInput Component
//!
//! Single-line text input for the heart-rate override. The buffer is
//! internal state; focus is a prop from the view loop's input mode.
//! Whatever has been typed is submitted verbatim on Enter - validation
//! happens in the reducer, which is where the error entry comes from.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the BpmInput.
#[derive(Debug, Clone, PartialEq)]
pub enum BpmInputEvent {
    /// User pressed Enter; carries the raw buffer (possibly empty).
    Submit(String),
    /// Buffer contents changed.
    Changed,
}

pub struct BpmInput {
    /// Text buffer (internal state).
    pub buffer: String,
    /// Whether keys are currently routed here (prop).
    pub focused: bool,
}

impl Default for BpmInput {
    fn default() -> Self {
        Self::new()
    }
}

impl BpmInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
        }
    }
}

impl Component for BpmInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Red)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .title("Override BPM")
            .border_style(border_style);

        let display = if self.buffer.is_empty() && !self.focused {
            Paragraph::new("Enter BPM").style(Style::default().add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(display.block(block), area);

        if self.focused {
            let cursor_x = area.x + 1 + self.buffer.chars().count() as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for BpmInput {
    type Event = BpmInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(BpmInputEvent::Changed)
            }
            TuiEvent::Backspace => {
                self.buffer.pop().map(|_| BpmInputEvent::Changed)
            }
            TuiEvent::Activate => {
                let text = std::mem::take(&mut self.buffer);
                Some(BpmInputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_builds_buffer() {
        let mut input = BpmInput::new();
        input.handle_event(&TuiEvent::InputChar('1'));
        input.handle_event(&TuiEvent::InputChar('5'));
        input.handle_event(&TuiEvent::InputChar('0'));
        assert_eq!(input.buffer, "150");

        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "15");
    }

    #[test]
    fn test_backspace_on_empty_is_a_noop() {
        let mut input = BpmInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_submit_takes_buffer() {
        let mut input = BpmInput::new();
        input.handle_event(&TuiEvent::InputChar('9'));
        input.handle_event(&TuiEvent::InputChar('9'));

        let event = input.handle_event(&TuiEvent::Activate);
        assert_eq!(event, Some(BpmInputEvent::Submit("99".to_string())));
        assert!(input.buffer.is_empty(), "buffer cleared after submit");
    }

    #[test]
    fn test_submit_empty_buffer_still_submits() {
        // an empty submission must reach the reducer so it can log the
        // invalid-input error
        let mut input = BpmInput::new();
        let event = input.handle_event(&TuiEvent::Activate);
        assert_eq!(event, Some(BpmInputEvent::Submit(String::new())));
    }

    #[test]
    fn test_render_shows_buffer() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = BpmInput::new();
        input.focused = true;
        input.handle_event(&TuiEvent::InputChar('4'));
        input.handle_event(&TuiEvent::InputChar('2'));

        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Override BPM"));
        assert!(text.contains("42"));
    }
}
