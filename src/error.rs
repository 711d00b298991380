// error.rs

use std::fmt;

/// Things that go wrong during a loop iteration. None of them stops the loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceError {
    ConnectivityLost,
    ConnectivityTimeout(u32),
    SensorReadFailure,
    DeliveryRejected(u16),
    TransportFailure(String),
    TimeSyncUnavailable,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::ConnectivityLost => write!(f, "WiFi connection lost"),
            DeviceError::ConnectivityTimeout(n) => {
                write!(f, "WiFi not connected after {n} attempts")
            }
            DeviceError::SensorReadFailure => write!(f, "sensor read failed"),
            DeviceError::DeliveryRejected(code) => {
                write!(f, "collector rejected the data, HTTP {code}")
            }
            DeviceError::TransportFailure(e) => write!(f, "HTTP POST failed: {e}"),
            DeviceError::TimeSyncUnavailable => write!(f, "NTP time not available"),
        }
    }
}

impl std::error::Error for DeviceError {}

// EOF
