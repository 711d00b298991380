// wifi.rs

use embedded_hal::{delay::DelayNs, digital::StatefulOutputPin};
use log::*;

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The station's only link to the outside world: Wi-Fi association plus
/// a blocking HTTP POST on top of it.
pub trait Network {
    /// Associated and holding an IP address.
    fn is_connected(&mut self) -> bool;

    /// Start associating. Does not wait for the result.
    fn begin(&mut self, ssid: &str, pass: &str) -> anyhow::Result<()>;

    /// POST `body` as application/json. Any HTTP status is `Ok`,
    /// `Err` means nothing usable came back.
    fn post_json(&mut self, url: &str, body: &str) -> anyhow::Result<HttpResponse>;
}

impl<N, S, P, D, C> Station<N, S, P, D, C>
where
    N: Network,
    P: StatefulOutputPin,
    D: DelayNs,
{
    /// Re-reads the link status. Returns the state it was found in.
    pub fn poll_link(&mut self) -> ConnectivityState {
        let up = self.net.is_connected();
        match (self.state.wifi, up) {
            (ConnectivityState::Connected, false) => {
                warn!("{}", DeviceError::ConnectivityLost);
                self.state.wifi = ConnectivityState::Disconnected;
            }
            (_, true) => self.state.wifi = ConnectivityState::Connected,
            _ => {}
        }
        self.state.wifi
    }

    /// Returns the number of 500 ms polls it took to come up, zero if we
    /// already were. Gives up after `connect_attempts` polls; the next loop
    /// iteration will simply try again.
    pub fn ensure_connected(&mut self) -> Result<u32, DeviceError> {
        if self.net.is_connected() {
            self.state.wifi = ConnectivityState::Connected;
            self.led.set(true);
            return Ok(0);
        }

        info!("WiFi connecting to {}...", self.config.wifi_ssid);
        self.state.wifi = ConnectivityState::Connecting;
        if let Err(e) = self.net.begin(&self.config.wifi_ssid, &self.config.wifi_pass) {
            error!("WiFi connect error: {e:?}");
        }

        let mut attempts = 0;
        while attempts < self.config.connect_attempts && !self.net.is_connected() {
            self.delay.delay_ms(self.config.connect_poll_ms);
            attempts += 1;
            debug!("WiFi waiting for association... {attempts}");
        }

        if self.net.is_connected() {
            info!("WiFi connected.");
            self.state.wifi = ConnectivityState::Connected;
            self.led.set(true);
            Ok(attempts)
        } else {
            let e = DeviceError::ConnectivityTimeout(attempts);
            error!("{e}");
            self.state.wifi = ConnectivityState::Disconnected;
            self.led.set(false);
            Err(e)
        }
    }
}


// EOF
