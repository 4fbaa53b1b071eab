//! # StepPanel Component
//!
//! The right-hand panel of the simulation screen: heading, explanatory
//! copy, and the action hint for the current step. Shows a spinner line
//! while a simulated delay is in flight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::Step;
use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct StepPanel {
    pub step: Step,
    pub busy: bool,
    pub spinner_frame: usize,
}

impl StepPanel {
    pub fn new(step: Step, busy: bool, spinner_frame: usize) -> Self {
        Self {
            step,
            busy,
            spinner_frame,
        }
    }

    pub fn heading(step: Step) -> &'static str {
        match step {
            Step::Intro => "Introduction",
            Step::Connect => "Step 1: Connect to the device",
            Step::Upload => "Step 2: Upload the firmware",
            Step::Exploit => "Step 3: Exploit your access",
        }
    }

    fn body(step: Step) -> &'static [&'static str] {
        match step {
            Step::Intro => &[
                "In this simulation you will upload a firmware image to a \
                 simulated pacemaker. The image travels over a wireless \
                 connection to the device.",
                "The console on the left shows the progress of the upload. \
                 It is a facsimile of what the MyCareLink 5000, the uploader \
                 impacted by the vulnerability, might look like.",
            ],
            Step::Connect => &[
                "The first step is to connect to the device, simulating the \
                 process of reaching the pacemaker over a wireless link.",
            ],
            Step::Upload => &[
                "The next step is to upload the firmware image, simulating \
                 malicious firmware being pushed to the pacemaker.",
                "Because this exploit rests on a time-of-check time-of-use \
                 weakness, the image is transferred after the device has \
                 already checked the state of the wireless connection.",
            ],
            Step::Exploit => &[
                "The firmware upload is complete. The device has been \
                 compromised and unauthorized access has been gained.",
                "Now you can do whatever you want with the device. For \
                 example, you could override the heart rate to a dangerous \
                 level.",
            ],
        }
    }

    fn hint(step: Step, busy: bool) -> &'static str {
        if busy {
            return match step {
                Step::Connect => "Connecting...",
                Step::Upload => "Uploading firmware...",
                _ => "Working...",
            };
        }
        match step {
            Step::Intro => "Press Enter to start the simulation.",
            Step::Connect => "Press Enter to connect to the device.",
            Step::Upload => "Press Enter to start the firmware upload.",
            Step::Exploit => "Type a BPM below and press Enter to override. Press f to view the impact.",
        }
    }
}

impl Component for StepPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(Self::heading(self.step));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        for paragraph in Self::body(self.step) {
            lines.push(Line::raw(*paragraph));
            lines.push(Line::raw(""));
        }

        let hint = Self::hint(self.step, self.busy);
        if self.busy {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            lines.push(Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Green)),
                Span::raw(" "),
                Span::styled(hint, Style::default().fg(Color::Green)),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                hint,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}
