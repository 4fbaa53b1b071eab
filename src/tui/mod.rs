//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a simulated delay in flight, or the monitor
//!   beating): draws every ~80ms for a smooth spinner and pulse.
//! - **Idle** (narrative pages): sleeps up to 250ms, only redraws on
//!   events or terminal resize.
//!
//! ## Input Modes
//!
//! Keys are modal. In `Controls` mode, Enter activates the current
//! step and single letters are commands (m, f, q). In `Override` mode
//! every key goes to the BPM input; Enter submits the raw text to the
//! reducer, which owns validation. Typing on the exploit step
//! auto-switches to `Override`, so "abc" followed by Enter really does
//! reach the parser and earn its error entry.

mod component;
mod components;
mod event;
mod ui;

use log::debug;
use std::sync::mpsc;
use std::time::Duration;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen, Step};
use crate::sim::dispatch::run_effect;
use crate::sim::scheduler::TokioScheduler;
use crate::sim::session::SimSession;
use crate::sim::tone::TerminalBell;
use crate::tui::component::EventHandler;
use crate::tui::components::{BpmInput, BpmInputEvent, ConsolePaneState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Enter activates the current step; letters are commands.
    Controls,
    /// Text editing in the BPM input. Esc returns to Controls.
    Override,
}

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub console: ConsolePaneState,
    pub bpm_input: BpmInput,
    pub input_mode: InputMode,
    // Animation state
    pub pulse_value: f32,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            console: ConsolePaneState::new(),
            bpm_input: BpmInput::new(),
            input_mode: InputMode::Controls,
            pulse_value: 0.0,
        }
    }
}

/// Turns a terminal event into a core action, updating modal state on
/// the way. Returns None for events that are presentation-only.
fn translate_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if app.screen != Screen::Simulation {
        return match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::Activate | TuiEvent::InputChar(' ') => Some(Action::AdvanceScreen),
            _ => None,
        };
    }

    match tui.input_mode {
        InputMode::Override => {
            if matches!(event, TuiEvent::Escape) {
                tui.input_mode = InputMode::Controls;
                tui.bpm_input.buffer.clear();
                return None;
            }
            match tui.bpm_input.handle_event(event) {
                Some(BpmInputEvent::Submit(text)) => {
                    tui.input_mode = InputMode::Controls;
                    Some(Action::OverrideHeartRate(text))
                }
                _ => None,
            }
        }
        InputMode::Controls => match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar('m') => Some(Action::ToggleMute),
            TuiEvent::InputChar('f') if app.sim.step == Step::Exploit => {
                Some(Action::FinishSimulation)
            }
            TuiEvent::Activate => match app.sim.step {
                Step::Intro => Some(Action::StartSimulation),
                Step::Connect => Some(Action::ConnectDevice),
                Step::Upload => Some(Action::StartUpload),
                Step::Exploit => {
                    tui.input_mode = InputMode::Override;
                    None
                }
            },
            // Typing on the exploit step auto-switches to the override
            // input and forwards the character
            TuiEvent::InputChar(c) if app.sim.step == Step::Exploit => {
                tui.input_mode = InputMode::Override;
                tui.bpm_input.handle_event(&TuiEvent::InputChar(*c));
                None
            }
            _ => None,
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from timer tasks
    let (tx, rx) = mpsc::channel();
    let scheduler = TokioScheduler::new(tx);
    let mut session = SimSession::new();
    let tone = TerminalBell;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        // Spinner and heart pulse need continuous frames
        let animating =
            app.screen == Screen::Simulation && (app.sim.busy || app.sim.heart.active);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain all pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // Scroll events always go to the console pane
            if app.screen == Screen::Simulation
                && matches!(
                    event,
                    TuiEvent::ScrollUp
                        | TuiEvent::ScrollDown
                        | TuiEvent::ScrollPageUp
                        | TuiEvent::ScrollPageDown
                        | TuiEvent::ScrollToBottom
                )
            {
                tui.console.handle_event(&event);
                continue;
            }

            if let Some(action) = translate_event(&app, &mut tui, &event) {
                let effect = update(&mut app, action);
                if effect == Effect::Quit {
                    should_quit = true;
                }
                run_effect(effect, &mut session, &scheduler, &tone, &config);
            }
        }
        if should_quit {
            break;
        }

        // Handle timer-driven actions from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
                break;
            }
            run_effect(effect, &mut session, &scheduler, &tone, &config);
        }
        if should_quit {
            break;
        }
    }

    // Deterministic teardown: nothing may tick after the screen is gone
    session.stop_heart();
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app_at_exploit, app_at_simulation, test_app};

    #[test]
    fn test_narrative_enter_advances() {
        let app = test_app();
        let mut tui = TuiState::new();
        let action = translate_event(&app, &mut tui, &TuiEvent::Activate);
        assert_eq!(action, Some(Action::AdvanceScreen));
    }

    #[test]
    fn test_enter_maps_to_current_step_action() {
        let mut app = app_at_simulation();
        let mut tui = TuiState::new();

        assert_eq!(
            translate_event(&app, &mut tui, &TuiEvent::Activate),
            Some(Action::StartSimulation)
        );
        update(&mut app, Action::StartSimulation);
        assert_eq!(
            translate_event(&app, &mut tui, &TuiEvent::Activate),
            Some(Action::ConnectDevice)
        );
    }

    #[test]
    fn test_mute_key_in_controls_mode() {
        let app = app_at_exploit();
        let mut tui = TuiState::new();
        assert_eq!(
            translate_event(&app, &mut tui, &TuiEvent::InputChar('m')),
            Some(Action::ToggleMute)
        );
    }

    #[test]
    fn test_typing_on_exploit_step_enters_override_mode() {
        let app = app_at_exploit();
        let mut tui = TuiState::new();

        assert_eq!(
            translate_event(&app, &mut tui, &TuiEvent::InputChar('1')),
            None
        );
        assert_eq!(tui.input_mode, InputMode::Override);
        assert_eq!(tui.bpm_input.buffer, "1");

        // once in override mode, letters are text, not commands
        translate_event(&app, &mut tui, &TuiEvent::InputChar('m'));
        assert_eq!(tui.bpm_input.buffer, "1m");

        let action = translate_event(&app, &mut tui, &TuiEvent::Activate);
        assert_eq!(action, Some(Action::OverrideHeartRate("1m".to_string())));
        assert_eq!(tui.input_mode, InputMode::Controls);
    }

    #[test]
    fn test_escape_cancels_override_entry() {
        let app = app_at_exploit();
        let mut tui = TuiState::new();
        translate_event(&app, &mut tui, &TuiEvent::InputChar('9'));
        assert_eq!(tui.input_mode, InputMode::Override);

        let action = translate_event(&app, &mut tui, &TuiEvent::Escape);
        assert_eq!(action, None);
        assert_eq!(tui.input_mode, InputMode::Controls);
        assert!(tui.bpm_input.buffer.is_empty());
    }

    #[test]
    fn test_finish_key_only_on_exploit_step() {
        let mut tui = TuiState::new();

        let app = app_at_exploit();
        assert_eq!(
            translate_event(&app, &mut tui, &TuiEvent::InputChar('f')),
            Some(Action::FinishSimulation)
        );

        let app = app_at_simulation();
        assert_eq!(
            translate_event(&app, &mut tui, &TuiEvent::InputChar('f')),
            None
        );
    }
}
