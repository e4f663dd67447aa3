//! Polled push-button event detection
//!
//! A [`Button`] turns the level of one digital input into [`Event`]s: the initial press, a click, a
//! double click, and the start, continuation and end of a long press. There is no interrupt or timer
//! behind it; the host calls [`Button::tick`] from its own loop and the button samples the pin and
//! [`embassy_time::Instant::now`] once per call.
//!
//! ```ignore
//! let mut button = Button::new(pin, ActiveState::ActiveLow);
//! let mut toggle = || led.toggle();
//! button.attach_click(Some(&mut toggle));
//!
//! loop {
//!     button.tick();
//!     Timer::after_millis(5).await;
//! }
//! ```

#![no_std]
#![warn(missing_docs)]

#[macro_use]
mod fmt;

pub mod button;
pub mod button_interpreter;
pub mod callback;
pub mod pin;

pub use button::{Button, ButtonConfig};
pub use button_interpreter::{Event, State};
pub use callback::Callback;
pub use pin::{ActiveState, ButtonPin};
