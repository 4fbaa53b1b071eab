//! Top-level layout: title bar, body (narrative page or simulation
//! grid), and a one-line key legend. The simulation body mirrors the
//! original uploader screen - console on the left, current step on the
//! right, monitor strip underneath once the device is connected.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{App, Screen, Step};
use crate::tui::component::Component;
use crate::tui::components::{ConsolePane, HeartMonitor, NarrativePage, StepPanel, TitleBar};
use crate::tui::{InputMode, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, body_area, legend_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.screen.title(), app.status_message.clone()).render(frame, title_area);

    match app.screen {
        Screen::Simulation => draw_simulation(frame, body_area, app, tui, spinner_frame),
        _ => {
            if let Some(mut page) = NarrativePage::for_screen(app.screen) {
                page.render(frame, body_area);
            }
        }
    }

    frame.render_widget(
        Span::styled(legend(app, tui), Style::default().fg(Color::DarkGray)),
        legend_area,
    );
}

fn draw_simulation(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min, Percentage};

    let monitor_height = if app.sim.heart.active { 3 } else { 0 };
    let [main_area, monitor_area] =
        Layout::vertical([Min(0), Length(monitor_height)]).areas(area);

    let [console_area, step_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(main_area);

    ConsolePane::new(&mut tui.console, &app.sim.console).render(frame, console_area);

    if app.sim.step == Step::Exploit {
        let [panel_area, input_area] = Layout::vertical([Min(0), Length(3)]).areas(step_area);
        StepPanel::new(app.sim.step, app.sim.busy, spinner_frame).render(frame, panel_area);
        tui.bpm_input.focused = tui.input_mode == InputMode::Override;
        tui.bpm_input.render(frame, input_area);
    } else {
        StepPanel::new(app.sim.step, app.sim.busy, spinner_frame).render(frame, step_area);
    }

    if app.sim.heart.active {
        HeartMonitor::new(app.sim.heart, tui.pulse_value).render(frame, monitor_area);
    }
}

fn legend(app: &App, tui: &TuiState) -> &'static str {
    match app.screen {
        Screen::Simulation => match tui.input_mode {
            InputMode::Override => "Enter: submit | Esc: cancel",
            InputMode::Controls => match app.sim.step {
                Step::Exploit if app.sim.heart.active => {
                    "Enter: override BPM | f: view impact | m: mute | ↑/↓: scroll | q: quit"
                }
                _ if app.sim.heart.active => {
                    "Enter: continue | m: mute | ↑/↓: scroll console | q: quit"
                }
                _ => "Enter: continue | ↑/↓: scroll console | q: quit",
            },
        },
        _ => "Enter: continue | q: quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{app_at_exploit, app_at_simulation, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, app, &mut tui, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_home_screen_draws_narrative() {
        let app = test_app();
        let text = render(&app);
        assert!(text.contains("CVE-2020-27252"));
        assert!(text.contains("pacesim - Welcome"));
    }

    #[test]
    fn test_simulation_screen_draws_console_and_step() {
        let app = app_at_simulation();
        let text = render(&app);
        assert!(text.contains("Firmware Upload Console"));
        assert!(text.contains("Introduction"));
        // monitor only appears after the device connects
        assert!(!text.contains("Heart Rate Monitor"));
    }

    #[test]
    fn test_connected_simulation_shows_monitor() {
        let mut app = app_at_simulation();
        update(&mut app, Action::StartSimulation);
        update(&mut app, Action::ConnectDevice);
        update(&mut app, Action::DeviceConnected { resting_bpm: 66 });

        let text = render(&app);
        assert!(text.contains("Heart Rate Monitor"));
        assert!(text.contains("66 BPM"));
    }

    #[test]
    fn test_exploit_step_shows_override_input() {
        let app = app_at_exploit();
        let text = render(&app);
        assert!(text.contains("Override BPM"));
        assert!(text.contains("Step 3: Exploit your access"));
    }
}
