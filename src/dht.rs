// dht.rs

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};
use log::*;

use crate::ClimateSensor;

// no edge should take longer than ~100 us, give it some slack
const EDGE_TIMEOUT_US: u32 = 200;
// a "0" bit is 26-28 us high, a "1" is 70 us
const BIT_SAMPLE_US: u32 = 40;
const START_LOW_MS: u32 = 18;
const START_RELEASE_US: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DhtReading {
    pub temperature: f32,
    pub humidity: f32,
}

// Bus errors from the pin itself, plus the ways the sensor can misbehave.
#[derive(Debug)]
pub enum MeasurementError<E> {
    PinError(E),
    Timeout,
    Checksum { expected: u8, got: u8 },
}

/// DHT11 on a single open-drain pin with an external or internal pull-up.
pub struct Dht11<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(mut pin: P, delay: D) -> Self {
        // idle level is high
        pin.set_high().ok();
        Dht11 { pin, delay }
    }

    pub fn read(&mut self) -> Result<DhtReading, MeasurementError<P::Error>> {
        self.pin.set_low().map_err(MeasurementError::PinError)?;
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high().map_err(MeasurementError::PinError)?;
        self.delay.delay_us(START_RELEASE_US);

        // response: 80 us low, 80 us high, then the first bit starts low
        self.wait_for(false)?;
        self.wait_for(true)?;
        self.wait_for(false)?;

        let mut frame = [0u8; 5];
        for byte in frame.iter_mut() {
            for _ in 0..8 {
                self.wait_for(true)?;
                self.delay.delay_us(BIT_SAMPLE_US);
                let bit = self.pin.is_high().map_err(MeasurementError::PinError)?;
                *byte = (*byte << 1) | bit as u8;
                if bit {
                    self.wait_for(false)?;
                }
            }
        }
        decode_frame(&frame)
    }

    fn wait_for(&mut self, high: bool) -> Result<(), MeasurementError<P::Error>> {
        for _ in 0..EDGE_TIMEOUT_US {
            if self.pin.is_high().map_err(MeasurementError::PinError)? == high {
                return Ok(());
            }
            self.delay.delay_us(1);
        }
        Err(MeasurementError::Timeout)
    }
}

pub fn decode_frame<E>(frame: &[u8; 5]) -> Result<DhtReading, MeasurementError<E>> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(MeasurementError::Checksum {
            expected: frame[4],
            got: sum,
        });
    }

    let humidity = frame[0] as f32 + frame[1] as f32 * 0.1;
    let mut temperature = frame[2] as f32 + (frame[3] & 0x0f) as f32 * 0.1;
    // newer DHT11 revisions flag sub-zero readings in bit 7 of the decimal byte
    if frame[3] & 0x80 != 0 {
        temperature = -temperature;
    }
    Ok(DhtReading {
        temperature,
        humidity,
    })
}

impl<P, D> ClimateSensor for Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn sample(&mut self) -> (f32, f32) {
        match self.read() {
            Ok(r) => (r.temperature, r.humidity),
            Err(e) => {
                error!("DHT11 read error: {e:?}");
                (f32::NAN, f32::NAN)
            }
        }
    }
}


// EOF
