//! Button Interpreter Module
//!
//! Folds a stream of `(pressed, now)` samples into click, double-click and long-press events. Both
//! thresholds are measured from the instant the first press of a sequence was seen.

use embassy_time::Instant;

use crate::button::ButtonConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Position of the button in a press/release sequence.
pub enum State {
    /// Waiting for the button to be pressed.
    Idle,
    /// Pressed once, waiting for release or for the long-press threshold.
    PressedWaitRelease,
    /// Released after a short press, waiting for a second press or for the click window to close.
    ReleasedWaitRetrigger,
    /// Pressed a second time inside the click window, waiting for release.
    PressedSecondWaitRelease,
    /// Held past the long-press threshold, waiting for release.
    LongPressActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Event recognized by a single poll.
pub enum Event {
    /// The button went down from idle.
    Pressed,
    /// A single short press, reported once the click window closed without a second press.
    Click,
    /// Two short presses inside the click window, reported on the second release.
    DoubleClick,
    /// The button has been held past the long-press threshold.
    LongPressStart,
    /// The button is still held after a long press started. Reported on every poll.
    DuringLongPress,
    /// The button was released after a long press.
    LongPressStop,
}

#[derive(Debug, Clone, Copy)]
/// The transition table, without any pin or clock access.
pub struct Interpreter {
    state: State,
    press_start: Instant,
}

impl Interpreter {
    /// Creates an interpreter in the [`State::Idle`] state.
    pub const fn new() -> Self {
        Self {
            state: State::Idle,
            press_start: Instant::from_ticks(0),
        }
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// True while a long press is in progress.
    pub fn is_long_press_active(&self) -> bool {
        self.state == State::LongPressActive
    }

    /// Evaluates exactly one transition for a sample taken at `now`.
    pub fn step(&mut self, pressed: bool, now: Instant, config: &ButtonConfig) -> Option<Event> {
        let held = now.saturating_duration_since(self.press_start);

        let (next, event) = match (self.state, pressed) {
            (State::Idle, true) => {
                self.press_start = now;
                (State::PressedWaitRelease, Some(Event::Pressed))
            }
            (State::Idle, false) => (State::Idle, None),

            (State::PressedWaitRelease, false) => (State::ReleasedWaitRetrigger, None),
            (State::PressedWaitRelease, true) if held > config.get_long_press_threshold() => {
                (State::LongPressActive, Some(Event::LongPressStart))
            }
            (State::PressedWaitRelease, true) => (State::PressedWaitRelease, None),

            // The window check wins over a retrigger seen on the same poll
            (State::ReleasedWaitRetrigger, _) if held > config.get_click_window() => (State::Idle, Some(Event::Click)),
            (State::ReleasedWaitRetrigger, true) => (State::PressedSecondWaitRelease, None),
            (State::ReleasedWaitRetrigger, false) => (State::ReleasedWaitRetrigger, None),

            (State::PressedSecondWaitRelease, false) => (State::Idle, Some(Event::DoubleClick)),
            (State::PressedSecondWaitRelease, true) => (State::PressedSecondWaitRelease, None),

            (State::LongPressActive, false) => (State::Idle, Some(Event::LongPressStop)),
            (State::LongPressActive, true) => (State::LongPressActive, Some(Event::DuringLongPress)),
        };

        if next != self.state {
            debug!("Button state {:?} -> {:?}", self.state, next);
            self.state = next;
        }

        event
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
