//! Vibration motor abstraction

/// Built-in vibration patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VibePattern {
    /// Two short pulses
    DoublePulse,
}

/// Vibration motor
///
/// Implementations queue the pattern and return immediately.
pub trait Haptics {
    /// Play a pattern
    fn vibrate(&mut self, pattern: VibePattern);

    /// Cancel whatever is playing
    fn cancel(&mut self);

    /// Play two short pulses
    fn double_pulse(&mut self) {
        self.vibrate(VibePattern::DoublePulse);
    }
}

impl<T: Haptics + ?Sized> Haptics for &mut T {
    fn vibrate(&mut self, pattern: VibePattern) {
        (**self).vibrate(pattern)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}
