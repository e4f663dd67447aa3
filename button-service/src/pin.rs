//! Pin polarity and line access

use embedded_hal::digital::{InputPin, OutputPin, PinState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Enum representing if the button is active low or active high.
pub enum ActiveState {
    /// Button connects the line to ground when pressed; the line idles high.
    ActiveLow,
    /// Button connects the line to VCC when pressed.
    ActiveHigh,
}

impl ActiveState {
    /// Picks the polarity from an "active low" flag.
    pub const fn from_active_low(active_low: bool) -> Self {
        if active_low {
            Self::ActiveLow
        } else {
            Self::ActiveHigh
        }
    }

    /// Level read while the button is physically pressed.
    pub const fn active_level(self) -> PinState {
        match self {
            Self::ActiveLow => PinState::Low,
            Self::ActiveHigh => PinState::High,
        }
    }

    /// Level read while the button is released.
    pub const fn inactive_level(self) -> PinState {
        match self {
            Self::ActiveLow => PinState::High,
            Self::ActiveHigh => PinState::Low,
        }
    }
}

/// A digital line a button can be attached to.
///
/// Besides reading the level, an active-low button drives the line high once at construction so
/// that it idles high. Every pin that is both an [`InputPin`] and an [`OutputPin`] qualifies. An
/// active-high button on an input-only pin does not need this trait, see
/// [`Button::new_active_high`](crate::Button::new_active_high).
pub trait ButtonPin: InputPin {
    /// Drives the idle line high.
    fn bias_high(&mut self) -> Result<(), Self::Error>;
}

impl<P: InputPin + OutputPin> ButtonPin for P {
    fn bias_high(&mut self) -> Result<(), Self::Error> {
        self.set_high()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn polarity_levels() {
        assert_eq!(ActiveState::from_active_low(true), ActiveState::ActiveLow);
        assert_eq!(ActiveState::from_active_low(false), ActiveState::ActiveHigh);

        assert_eq!(ActiveState::ActiveLow.active_level(), PinState::Low);
        assert_eq!(ActiveState::ActiveLow.inactive_level(), PinState::High);
        assert_eq!(ActiveState::ActiveHigh.active_level(), PinState::High);
        assert_eq!(ActiveState::ActiveHigh.inactive_level(), PinState::Low);
    }
}
