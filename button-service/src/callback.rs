//! Callback slots fired from the poll loop

use crate::button_interpreter::Event;

/// A zero-argument handler invoked synchronously from [`Button::tick`](crate::Button::tick).
pub type Callback<'a> = &'a mut dyn FnMut();

/// One optional handler per event kind.
#[derive(Default)]
pub(crate) struct Callbacks<'a> {
    pub(crate) click: Option<Callback<'a>>,
    pub(crate) double_click: Option<Callback<'a>>,
    pub(crate) press: Option<Callback<'a>>,
    pub(crate) long_press_start: Option<Callback<'a>>,
    pub(crate) long_press_stop: Option<Callback<'a>>,
    pub(crate) during_long_press: Option<Callback<'a>>,
}

impl Callbacks<'_> {
    /// Invokes the handlers registered for `event`.
    ///
    /// Entering a long press fires the legacy press handler, then long-press-start, then
    /// during-long-press. [`Event::Pressed`] has no handler.
    pub(crate) fn dispatch(&mut self, event: Event) {
        match event {
            Event::Pressed => {}
            Event::Click => fire(&mut self.click),
            Event::DoubleClick => fire(&mut self.double_click),
            Event::LongPressStart => {
                fire(&mut self.press);
                fire(&mut self.long_press_start);
                fire(&mut self.during_long_press);
            }
            Event::DuringLongPress => fire(&mut self.during_long_press),
            Event::LongPressStop => fire(&mut self.long_press_stop),
        }
    }
}

fn fire(slot: &mut Option<Callback<'_>>) {
    if let Some(callback) = slot.as_deref_mut() {
        callback();
    }
}
