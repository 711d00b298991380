// report.rs

use embedded_hal::{delay::DelayNs, digital::StatefulOutputPin};
use log::*;
use serde::Serialize;

use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reading {
    #[serde(rename = "temperatura")]
    pub temperature: f32,
    #[serde(rename = "umidade")]
    pub humidity: f32,
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorEvent {
    #[serde(rename = "status")]
    pub status_tag: StatusTag,
    pub message: String,
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Nothing was sent, we are offline.
    Skipped,
    Accepted(u16),
    Rejected(u16),
    TransportFailed(String),
}

impl Delivery {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 | 201 => Delivery::Accepted(status),
            _ => Delivery::Rejected(status),
        }
    }

    /// (times, delay_ms) for the LED.
    pub fn blink_pattern(&self) -> Option<(u32, u32)> {
        match self {
            Delivery::Skipped => None,
            Delivery::Accepted(_) => Some((3, 100)),
            Delivery::Rejected(_) => Some((5, 200)),
            Delivery::TransportFailed(_) => Some((10, 50)),
        }
    }

    pub fn error(&self) -> Option<DeviceError> {
        match self {
            Delivery::Rejected(code) => Some(DeviceError::DeliveryRejected(*code)),
            Delivery::TransportFailed(e) => Some(DeviceError::TransportFailure(e.clone())),
            _ => None,
        }
    }
}

impl<N, S, P, D, C> Station<N, S, P, D, C>
where
    N: Network,
    P: StatefulOutputPin,
    D: DelayNs,
{
    pub fn send_reading(&mut self, reading: &Reading) -> Delivery {
        self.post("reading", reading)
    }

    pub fn send_error(&mut self, event: &ErrorEvent) -> Delivery {
        self.post("error event", event)
    }

    fn post<T: Serialize>(&mut self, what: &str, payload: &T) -> Delivery {
        if !self.state.is_connected() {
            warn!("WiFi not connected! {what} not sent.");
            return Delivery::Skipped;
        }

        let body = match serde_json::to_string(payload) {
            Ok(b) => b,
            Err(e) => {
                error!("Cannot encode {what}: {e}");
                return Delivery::Skipped;
            }
        };

        let url = &self.config.collector_url;
        info!("[HTTP] POST {what} to {url}: {body}");
        let delivery = match self.net.post_json(url, &body) {
            Ok(resp) => {
                info!("[HTTP] response {}: {}", resp.status, resp.body);
                Delivery::from_status(resp.status)
            }
            Err(e) => Delivery::TransportFailed(format!("{e:#}")),
        };

        match delivery.error() {
            None => info!("{what} sent successfully."),
            Some(e) => error!("{e}"),
        }
        if let Some((times, delay_ms)) = delivery.blink_pattern() {
            let connected = self.poll_link() == ConnectivityState::Connected;
            self.led.blink(times, delay_ms, connected, &mut self.delay);
        }
        delivery
    }
}


// EOF
