//! # Narrative Pages
//!
//! The static walkthrough pages around the simulation: what a pacemaker
//! is, what went wrong, and what the impact was. Each page is a heading,
//! a few paragraphs, and a single continue hint, centered in the
//! terminal the way the landing view does it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::state::Screen;
use crate::tui::component::Component;

pub struct NarrativePage {
    heading: &'static str,
    paragraphs: &'static [&'static str],
    hint: &'static str,
}

impl NarrativePage {
    /// The page for a given screen, or None for the simulation (which
    /// has its own layout).
    pub fn for_screen(screen: Screen) -> Option<Self> {
        match screen {
            Screen::Home => Some(Self {
                heading: "pacesim",
                paragraphs: &[
                    "Many medical devices are not designed with security in \
                     mind. This has led to an ecosystem of devices that are \
                     vulnerable to cyber attacks.",
                    "This walkthrough simulates one specific vulnerability: \
                     CVE-2020-27252. This pacemaker vulnerability allows an \
                     attacker to exploit a race condition in the device's \
                     firmware update process to gain unauthorized access to \
                     the device.",
                    "Reference: https://nvd.nist.gov/vuln/detail/CVE-2020-27252",
                ],
                hint: "Press Enter to get started.",
            }),
            Screen::Pacemaker => Some(Self {
                heading: "You Start my Heart",
                paragraphs: &[
                    "A pacemaker is a critical medical device implanted under \
                     the skin near the heart. It is connected to the heart \
                     with wires that deliver electrical signals to regulate \
                     the heartbeat.",
                    "To make maintenance easier, many pacemakers carry \
                     wireless communication capabilities that let doctors \
                     monitor and adjust the device remotely - far better than \
                     pulling it out of the patient for every adjustment.",
                    "But remote access cuts both ways: the wireless \
                     communication channel is also a new attack vector.",
                ],
                hint: "Press Enter to see what went wrong.",
            }),
            Screen::Vulnerability => Some(Self {
                heading: "Time-of-Check, Time-of-Use",
                paragraphs: &[
                    "The vulnerability existed because of a time-of-check \
                     time-of-use weakness. This kind of flaw arises when a \
                     program checks the state of a resource, then uses the \
                     resource as if that check were still valid.",
                    "The pacemaker's uploader checked the state of the \
                     wireless channel before trusting anything transmitted \
                     over it - but the state could change between the time of \
                     the check and the time of the use. An attacker could \
                     slip malicious firmware through that window and take \
                     control of the device.",
                ],
                hint: "Press Enter to simulate it.",
            }),
            Screen::Impact => Some(Self {
                heading: "Impacts",
                paragraphs: &[
                    "Thankfully, due to quick remediation on the \
                     manufacturer's part, there are no known cases of \
                     CVE-2020-27252 being used to damage anyone's heart or \
                     equipment.",
                    "The exploit still highlights how much security matters \
                     in medical devices. A malicious actor exploiting a flaw \
                     like this one could cause serious harm to a patient.",
                    "That is why medical device manufacturers need to take \
                     security seriously and harden their devices against \
                     cyber attacks.",
                ],
                hint: "Press Enter to return home.",
            }),
            Screen::Simulation => None,
        }
    }
}

impl Component for NarrativePage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            self.heading,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));
        for paragraph in self.paragraphs {
            lines.push(Line::raw(*paragraph));
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            self.hint,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));

        // Center a readable column, the narrow side of the terminal
        let [column] = Layout::horizontal([Constraint::Max(72)])
            .flex(Flex::Center)
            .areas(area);

        let text = Text::from(lines);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, column);
    }
}
