// testutil.rs

use std::{collections::VecDeque, convert::Infallible};

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin, StatefulOutputPin},
};

use crate::*;

pub struct FakeNet {
    link_up: bool,
    begun: bool,
    polls: u32,
    /// Polls after `begin()` before the link comes up, `None` for never.
    pub up_after: Option<u32>,
    pub begin_fails: bool,
    /// The link goes away while a POST is in flight.
    pub drop_on_post: bool,
    pub begins: u32,
    /// HTTP status to answer with, `None` for a transport error.
    pub reply: Option<u16>,
    pub posts: Vec<(String, String)>,
}

impl FakeNet {
    fn new(link_up: bool, up_after: Option<u32>) -> Self {
        FakeNet {
            link_up,
            begun: false,
            polls: 0,
            up_after,
            begin_fails: false,
            drop_on_post: false,
            begins: 0,
            reply: Some(200),
            posts: Vec::new(),
        }
    }

    pub fn connected() -> Self {
        Self::new(true, Some(0))
    }

    pub fn connects_after(polls: u32) -> Self {
        Self::new(false, Some(polls))
    }

    pub fn unreachable() -> Self {
        Self::new(false, None)
    }

    pub fn replying(mut self, status: u16) -> Self {
        self.reply = Some(status);
        self
    }

    pub fn failing(mut self) -> Self {
        self.reply = None;
        self
    }

    pub fn drop_link(&mut self) {
        self.link_up = false;
        self.begun = false;
        self.polls = 0;
    }
}

impl Network for FakeNet {
    fn is_connected(&mut self) -> bool {
        if !self.link_up && self.begun {
            self.polls += 1;
            if matches!(self.up_after, Some(n) if self.polls > n) {
                self.link_up = true;
            }
        }
        self.link_up
    }

    fn begin(&mut self, _ssid: &str, _pass: &str) -> anyhow::Result<()> {
        self.begins += 1;
        self.begun = true;
        self.polls = 0;
        if self.begin_fails {
            return Err(anyhow!("wifi driver busy"));
        }
        Ok(())
    }

    fn post_json(&mut self, url: &str, body: &str) -> anyhow::Result<HttpResponse> {
        self.posts.push((url.to_string(), body.to_string()));
        if self.drop_on_post {
            self.drop_link();
        }
        match self.reply {
            Some(status) => Ok(HttpResponse {
                status,
                body: "{\"status\":\"success\"}".into(),
            }),
            None => Err(anyhow!("connection refused")),
        }
    }
}

pub struct FakeSensor {
    samples: VecDeque<(f32, f32)>,
}

impl FakeSensor {
    pub fn new(samples: Vec<(f32, f32)>) -> Self {
        FakeSensor {
            samples: samples.into(),
        }
    }

    pub fn push(&mut self, temperature: f32, humidity: f32) {
        self.samples.push_back((temperature, humidity));
    }
}

impl ClimateSensor for FakeSensor {
    fn sample(&mut self) -> (f32, f32) {
        self.samples.pop_front().unwrap_or((f32::NAN, f32::NAN))
    }
}

/// Output pin that remembers its level and counts toggles.
pub struct FakePin {
    high: bool,
    toggles: u32,
}

impl FakePin {
    pub fn new(high: bool) -> Self {
        FakePin { high, toggles: 0 }
    }

    pub fn blink_pairs(&self) -> u32 {
        self.toggles / 2
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for FakePin {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high)
    }

    fn toggle(&mut self) -> Result<(), Infallible> {
        self.high = !self.high;
        self.toggles += 1;
        Ok(())
    }
}

/// Doesn't sleep, just adds up how long it was asked to.
#[derive(Default)]
pub struct FakeDelay {
    elapsed_ns: u64,
}

impl FakeDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}

pub struct FakeClock {
    pub now_ms: u64,
    pub utc: Option<DateTime<Utc>>,
    pub sync_ok: bool,
    pub syncs: u32,
}

impl FakeClock {
    pub fn new() -> Self {
        FakeClock {
            now_ms: 0,
            utc: None,
            sync_ok: true,
            syncs: 0,
        }
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn utc_now(&self) -> Option<DateTime<Utc>> {
        self.utc
    }

    fn sync_time(&mut self) -> Result<(), DeviceError> {
        self.syncs += 1;
        if self.sync_ok {
            Ok(())
        } else {
            Err(DeviceError::TimeSyncUnavailable)
        }
    }
}

pub type FakeStation = Station<FakeNet, FakeSensor, FakePin, FakeDelay, FakeClock>;

pub fn fake_station(net: FakeNet) -> FakeStation {
    Station::new(
        MyConfig::default(),
        net,
        FakeSensor::new(Vec::new()),
        FakePin::new(false),
        FakeDelay::default(),
        FakeClock::new(),
    )
}

/// A station that already went through a successful connect.
pub fn online_station(net: FakeNet) -> FakeStation {
    let mut st = fake_station(net);
    st.state.wifi = ConnectivityState::Connected;
    st.led.set(true);
    st
}

// EOF
