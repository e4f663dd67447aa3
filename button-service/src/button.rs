//! Button Service Definitions

use embassy_time::{Duration, Instant};
use embedded_hal::digital::{InputPin, PinState};

use crate::button_interpreter::{Event, Interpreter, State};
use crate::callback::{Callback, Callbacks};
use crate::pin::{ActiveState, ButtonPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Struct representing the timing thresholds of a button.
pub struct ButtonConfig {
    click_window: Duration,
    long_press_threshold: Duration,
}

impl ButtonConfig {
    /// Creates a new ButtonConfig instance with the given thresholds.
    pub const fn new(click_window: Duration, long_press_threshold: Duration) -> Self {
        Self {
            click_window,
            long_press_threshold,
        }
    }

    /// Gets the click window.
    ///
    /// A press released and not followed by a second press within this time after it began is a
    /// click; a second press inside it starts a double click.
    pub fn get_click_window(&self) -> Duration {
        self.click_window
    }

    /// Gets the long press threshold.
    pub fn get_long_press_threshold(&self) -> Duration {
        self.long_press_threshold
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            click_window: Duration::from_millis(250),
            long_press_threshold: Duration::from_millis(600),
        }
    }
}

/// A push-button classified by polling.
///
/// Call [`Button::tick`] on every iteration of the control loop. Each call samples the pin and the
/// clock once, advances the state machine by at most one transition and returns the event it
/// recognized, if any. Thresholds are wall-clock durations, so a loop that stalls for longer than a
/// threshold changes the classification.
pub struct Button<'a, P> {
    gpio: P,
    active_state: ActiveState,
    config: ButtonConfig,
    interpreter: Interpreter,
    callbacks: Callbacks<'a>,
    last_activity: Option<Instant>,
}

impl<'a, P: ButtonPin> Button<'a, P> {
    /// Creates a new `Button` with the default thresholds.
    ///
    /// An active-low button drives the line high once so that it idles high. For an active-high
    /// button on an input-only pin use [`Button::new_active_high`], which needs no [`ButtonPin`].
    pub fn new(gpio: P, active_state: ActiveState) -> Self {
        Self::new_with_config(gpio, active_state, ButtonConfig::default())
    }

    /// Creates a new `Button` with the given thresholds.
    pub fn new_with_config(mut gpio: P, active_state: ActiveState, config: ButtonConfig) -> Self {
        if active_state == ActiveState::ActiveLow && gpio.bias_high().is_err() {
            warn!("Failed to bias button pin high");
        }

        Self::from_parts(gpio, active_state, config)
    }
}

impl<'a, P: InputPin> Button<'a, P> {
    /// Creates an active-high `Button` on any input pin. The line is never written.
    pub fn new_active_high(gpio: P, config: ButtonConfig) -> Self {
        Self::from_parts(gpio, ActiveState::ActiveHigh, config)
    }

    fn from_parts(gpio: P, active_state: ActiveState, config: ButtonConfig) -> Self {
        Self {
            gpio,
            active_state,
            config,
            interpreter: Interpreter::new(),
            callbacks: Callbacks::default(),
            last_activity: None,
        }
    }

    /// Returns the button configuration.
    pub fn get_config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Sets the button configuration. Takes effect on the next poll.
    pub fn set_config(&mut self, config: ButtonConfig) {
        self.config = config;
    }

    /// Sets the click window. Takes effect on the next poll.
    pub fn set_click_window(&mut self, click_window: Duration) {
        self.config.click_window = click_window;
    }

    /// Sets the long press threshold. Takes effect on the next poll.
    pub fn set_long_press_threshold(&mut self, long_press_threshold: Duration) {
        self.config.long_press_threshold = long_press_threshold;
    }

    /// Sets the handler for [`Event::Click`], replacing any previous one. `None` disables it.
    pub fn attach_click(&mut self, callback: Option<Callback<'a>>) {
        self.callbacks.click = callback;
    }

    /// Sets the handler for [`Event::DoubleClick`].
    pub fn attach_double_click(&mut self, callback: Option<Callback<'a>>) {
        self.callbacks.double_click = callback;
    }

    /// Sets the legacy press handler.
    ///
    /// Despite its name this fires once when a long press starts, never on the initial press-down.
    #[deprecated(note = "use `attach_long_press_start`, `attach_long_press_stop` or `attach_during_long_press`")]
    pub fn attach_press(&mut self, callback: Option<Callback<'a>>) {
        self.callbacks.press = callback;
    }

    /// Sets the handler fired once when a long press starts.
    pub fn attach_long_press_start(&mut self, callback: Option<Callback<'a>>) {
        self.callbacks.long_press_start = callback;
    }

    /// Sets the handler fired when the button is released after a long press.
    pub fn attach_long_press_stop(&mut self, callback: Option<Callback<'a>>) {
        self.callbacks.long_press_stop = callback;
    }

    /// Sets the handler fired on the poll that starts a long press and on every poll after it while
    /// the button is held.
    pub fn attach_during_long_press(&mut self, callback: Option<Callback<'a>>) {
        self.callbacks.during_long_press = callback;
    }

    /// Reads the pin now and reports whether it is at the active level.
    ///
    /// This is the raw electrical state and may disagree with the state machine.
    pub fn is_pressed(&mut self) -> bool {
        self.level() == self.active_state.active_level()
    }

    /// Reads the pin now and reports whether it is at the inactive level.
    pub fn is_released(&mut self) -> bool {
        self.level() == self.active_state.inactive_level()
    }

    /// True from the poll that started a long press until the poll that saw its release.
    pub fn is_long_press_active(&self) -> bool {
        self.interpreter.is_long_press_active()
    }

    /// Time of the last poll that produced an event, or `None` before the first one.
    pub fn get_last_activity_time(&self) -> Option<Instant> {
        self.last_activity
    }

    /// Current state of the state machine.
    pub fn state(&self) -> State {
        self.interpreter.state()
    }

    /// Configured polarity.
    pub fn active_state(&self) -> ActiveState {
        self.active_state
    }

    /// Polls the button against the system clock.
    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(Instant::now())
    }

    /// Polls the button as if the clock read `now`.
    ///
    /// `now` must never go backwards between calls.
    pub fn tick_at(&mut self, now: Instant) -> Option<Event> {
        let pressed = self.level() == self.active_state.active_level();
        let event = self.interpreter.step(pressed, now, &self.config)?;

        trace!("Button event {:?} at {:?}", event, now);
        self.last_activity = Some(now);
        self.callbacks.dispatch(event);

        Some(event)
    }

    /// Consumes the button and returns its pin.
    pub fn release(self) -> P {
        self.gpio
    }

    fn level(&mut self) -> PinState {
        match self.gpio.is_high() {
            Ok(high) => PinState::from(high),
            Err(_) => {
                warn!("Failed to read button pin, treating it as released");
                self.active_state.inactive_level()
            }
        }
    }
}
