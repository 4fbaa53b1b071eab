//! End-to-end simulation scenarios driven headlessly: real reducer, real
//! tokio scheduler under a paused clock, no terminal. Time is advanced
//! with `tokio::time::advance`, so the "two second" connect really is
//! two virtual seconds without any test ever sleeping.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use pacesim::core::action::{Action, Effect, update};
use pacesim::core::config::ResolvedConfig;
use pacesim::core::console::Severity;
use pacesim::core::state::{App, Screen, Step};
use pacesim::sim::dispatch::run_effect;
use pacesim::sim::scheduler::TokioScheduler;
use pacesim::sim::session::SimSession;
use pacesim::sim::tone::TonePlayer;

/// Counts beats instead of beeping.
#[derive(Default)]
struct CountingTone {
    beats: AtomicUsize,
}

impl CountingTone {
    fn count(&self) -> usize {
        self.beats.load(Ordering::SeqCst)
    }
}

impl TonePlayer for CountingTone {
    fn play_beat(&self) {
        self.beats.fetch_add(1, Ordering::SeqCst);
    }
}

struct Harness {
    app: App,
    session: SimSession,
    scheduler: TokioScheduler,
    rx: Receiver<Action>,
    config: ResolvedConfig,
    tone: CountingTone,
}

impl Harness {
    /// A fresh harness already navigated onto the simulation screen.
    fn new() -> Self {
        let config = ResolvedConfig::default();
        let mut app = App::from_config(&config);
        while app.screen != Screen::Simulation {
            update(&mut app, Action::AdvanceScreen);
        }

        let (tx, rx) = mpsc::channel();
        Self {
            app,
            session: SimSession::new(),
            scheduler: TokioScheduler::new(tx),
            rx,
            config,
            tone: CountingTone::default(),
        }
    }

    /// Feeds a user action through the reducer and runs its effect.
    fn act(&mut self, action: Action) -> Effect {
        let effect = update(&mut self.app, action);
        run_effect(
            effect,
            &mut self.session,
            &self.scheduler,
            &self.tone,
            &self.config,
        );
        effect
    }

    /// Drains timer-delivered actions, running their effects too.
    fn drain(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            let effect = update(&mut self.app, action);
            run_effect(
                effect,
                &mut self.session,
                &self.scheduler,
                &self.tone,
                &self.config,
            );
        }
    }

    /// Advances virtual time and processes everything that fired.
    async fn advance(&mut self, ms: u64) {
        settle().await;
        tokio::time::advance(Duration::from_millis(ms)).await;
        settle().await;
        self.drain();
    }

    fn messages(&self) -> Vec<String> {
        self.app
            .sim
            .console
            .messages()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

/// Lets spawned timer tasks run between clock advances.
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Asserts that `expected` appears within `messages` in order.
fn assert_ordered(messages: &[String], expected: &[&str]) {
    let mut iter = messages.iter();
    for want in expected {
        assert!(
            iter.any(|m| m == want),
            "expected {want:?} (in order) within {messages:?}"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_full_exploit_scenario() {
    let mut h = Harness::new();
    assert_eq!(h.app.sim.step, Step::Intro);

    // intro -> connect step is immediate
    h.act(Action::StartSimulation);
    assert_eq!(h.app.sim.step, Step::Connect);

    // connect; a second click while in flight must not double-trigger
    assert_eq!(h.act(Action::ConnectDevice), Effect::ScheduleConnect);
    assert_eq!(h.act(Action::ConnectDevice), Effect::None);

    h.advance(1999).await;
    assert_eq!(h.app.sim.step, Step::Connect, "connect delay has not elapsed");

    h.advance(2).await;
    assert_eq!(h.app.sim.step, Step::Upload);
    assert_ordered(
        &h.messages(),
        &["Connecting to device...", "Connected to device!"],
    );
    assert_eq!(h.messages().len(), 2, "double click produced no extra entries");
    assert!(h.app.sim.heart.active);
    assert!(
        (60..=70).contains(&h.app.sim.heart.value),
        "resting rate is {}",
        h.app.sim.heart.value
    );
    assert!(h.session.heart_running());

    // upload takes both delays; the device is not compromised early
    h.act(Action::StartUpload);
    h.advance(2000).await;
    assert_eq!(h.app.sim.step, Step::Upload, "transfer still in flight");
    assert!(h.app.sim.busy);

    h.advance(4000).await;
    assert_eq!(h.app.sim.step, Step::Exploit);
    assert!(!h.app.sim.busy);

    let messages = h.messages();
    assert_ordered(
        &messages,
        &[
            "Checking connection state...",
            "Connection state: OK",
            "Starting firmware upload process...",
            "Firmware upload complete!",
            "Device compromised! Unauthorized access gained.",
        ],
    );
    assert_eq!(
        messages.last().map(String::as_str),
        Some("Device compromised! Unauthorized access gained.")
    );

    // override to a dangerous rate
    h.act(Action::OverrideHeartRate("150".into()));
    assert_eq!(h.app.sim.heart.value, 150);
    assert!(h.app.sim.heart.overridden);
    let messages = h.messages();
    assert_ordered(&messages, &["Heart rate overridden to 150 BPM"]);
    assert_eq!(
        messages.last().map(String::as_str),
        Some("Heart rate is abnormally high! Please consult a doctor immediately.")
    );
    let warn = h.app.sim.console.entries().last().unwrap();
    assert_eq!(warn.severity, Severity::Warn);

    // the loop now beats at the new cadence: 150 BPM -> 400ms
    let before = h.tone.count();
    h.advance(401).await;
    assert_eq!(h.tone.count(), before + 1);

    // finishing tears the timer down for good
    h.act(Action::FinishSimulation);
    assert_eq!(h.app.screen, Screen::Impact);
    assert!(!h.session.heart_running());
    let after_finish = h.tone.count();
    h.advance(10_000).await;
    assert_eq!(h.tone.count(), after_finish, "no beats after teardown");
}

#[tokio::test(start_paused = true)]
async fn test_mute_suppresses_tone_but_not_display() {
    let mut h = Harness::new();
    h.act(Action::StartSimulation);
    h.act(Action::ConnectDevice);
    h.advance(2001).await;
    assert!(h.app.sim.heart.active);

    let interval_ms = 60_000 / u64::from(h.app.sim.heart.value);
    h.advance(interval_ms + 1).await;
    assert_eq!(h.tone.count(), 1, "first beat audible");

    h.act(Action::ToggleMute);
    let shown = h.app.sim.heart.value;
    let muted_count = h.tone.count();
    h.advance(interval_ms * 3).await;
    assert_eq!(h.tone.count(), muted_count, "muted beats are silent");
    assert_eq!(h.app.sim.heart.value, shown, "display unaffected by mute");

    h.act(Action::ToggleMute);
    h.advance(interval_ms + 1).await;
    assert!(h.tone.count() > muted_count, "unmuted beats audible again");
}

#[tokio::test(start_paused = true)]
async fn test_invalid_override_changes_nothing() {
    let mut h = Harness::new();
    h.act(Action::StartSimulation);
    h.act(Action::ConnectDevice);
    h.advance(2001).await;
    h.act(Action::StartUpload);
    h.advance(2001).await;
    h.advance(4001).await;
    assert_eq!(h.app.sim.step, Step::Exploit);

    let heart_before = h.app.sim.heart;
    let len_before = h.app.sim.console.len();

    assert_eq!(h.act(Action::OverrideHeartRate("abc".into())), Effect::None);
    assert_eq!(h.app.sim.heart, heart_before);
    assert_eq!(h.app.sim.console.len(), len_before + 1);

    let error = h.app.sim.console.entries().last().unwrap();
    assert_eq!(error.severity, Severity::Error);
    assert_eq!(
        error.message,
        "Invalid BPM value entered. Please enter a positive integer."
    );
    assert!(h.session.heart_running(), "resting loop keeps running");
}
