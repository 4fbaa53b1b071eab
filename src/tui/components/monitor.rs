//! # HeartMonitor Component
//!
//! The heart-rate strip shown once the device is connected: a pulsing
//! heart glyph, the current BPM, and the mute indicator. Mute only
//! silences the tone; the number shown here never changes because of it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::heart::HeartState;
use crate::tui::component::Component;

pub struct HeartMonitor {
    /// Monitor state (prop, copied from App each frame).
    pub heart: HeartState,
    /// Animation phase in [0, 1] driving the glyph pulse.
    pub pulse_value: f32,
}

impl HeartMonitor {
    pub fn new(heart: HeartState, pulse_value: f32) -> Self {
        Self { heart, pulse_value }
    }
}

impl Component for HeartMonitor {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Heart Rate Monitor");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let glyph_style = if self.pulse_value > 0.5 {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
        };
        let bpm_style = if self.heart.is_abnormal() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![
            Span::styled("♥ ", glyph_style),
            Span::styled(format!("{} BPM", self.heart.value), bpm_style),
        ];
        if self.heart.overridden {
            spans.push(Span::styled(
                "  (overridden)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        if self.heart.muted {
            spans.push(Span::styled(
                "  [muted]",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }
}
