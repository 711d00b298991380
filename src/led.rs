// led.rs

use embedded_hal::{delay::DelayNs, digital::StatefulOutputPin};
use log::*;

pub struct Led<P> {
    pin: P,
}

impl<P: StatefulOutputPin> Led<P> {
    pub fn new(pin: P) -> Self {
        Led { pin }
    }

    pub fn set(&mut self, on: bool) {
        let res = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if let Err(e) = res {
            error!("LED pin error: {e:?}");
        }
    }

    pub fn is_on(&mut self) -> bool {
        self.pin.is_set_high().unwrap_or(false)
    }

    fn toggle(&mut self) {
        if let Err(e) = self.pin.toggle() {
            error!("LED pin error: {e:?}");
        }
    }

    /// Blocks for roughly `2 * times - 1` periods of `delay_ms`.
    /// Afterwards the LED shows connectivity again: on if connected, off otherwise.
    pub fn blink<D: DelayNs>(&mut self, times: u32, delay_ms: u32, connected: bool, delay: &mut D) {
        for i in 0..times {
            self.toggle();
            delay.delay_ms(delay_ms);
            self.toggle();
            if i + 1 < times {
                delay.delay_ms(delay_ms);
            }
        }
        self.set(connected);
    }

    #[cfg(test)]
    pub(crate) fn pin(&self) -> &P {
        &self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FakeDelay, FakePin};

    #[test]
    fn blink_pairs_and_timing() {
        let mut led = Led::new(FakePin::new(true));
        let mut delay = FakeDelay::default();

        led.blink(3, 100, true, &mut delay);
        assert_eq!(led.pin().blink_pairs(), 3);
        assert_eq!(delay.elapsed_ms(), 500);
        assert!(led.is_on());
    }

    #[test]
    fn blink_ends_dark_when_disconnected() {
        let mut led = Led::new(FakePin::new(true));
        let mut delay = FakeDelay::default();

        led.blink(5, 200, false, &mut delay);
        assert_eq!(led.pin().blink_pairs(), 5);
        assert_eq!(delay.elapsed_ms(), 1800);
        assert!(!led.is_on());
    }

    #[test]
    fn zero_blinks_only_restores_level() {
        let mut led = Led::new(FakePin::new(false));
        let mut delay = FakeDelay::default();

        led.blink(0, 50, true, &mut delay);
        assert_eq!(led.pin().blink_pairs(), 0);
        assert_eq!(delay.elapsed_ms(), 0);
        assert!(led.is_on());
    }
}

// EOF
