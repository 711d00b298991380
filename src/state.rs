// state.rs

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectivityState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectivityState::Disconnected => "disconnected",
            ConnectivityState::Connecting => "connecting",
            ConnectivityState::Connected => "connected",
        })
    }
}

/// Everything the loop mutates between iterations.
#[derive(Clone, Debug, Default)]
pub struct MyState {
    pub wifi: ConnectivityState,
    pub last_sample_ms: u64,
    pub time_synced: bool,
    pub samples: u64,
}

impl MyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.wifi == ConnectivityState::Connected
    }

    pub fn sample_due(&self, now_ms: u64, interval_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_sample_ms) >= interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disconnected() {
        let s = MyState::new();
        assert_eq!(s.wifi, ConnectivityState::Disconnected);
        assert!(!s.is_connected());
        assert!(!s.time_synced);
    }

    #[test]
    fn sample_due_after_interval() {
        let mut s = MyState::new();
        assert!(!s.sample_due(29_999, 30_000));
        assert!(s.sample_due(30_000, 30_000));

        s.last_sample_ms = 30_000;
        assert!(!s.sample_due(45_000, 30_000));
        assert!(s.sample_due(60_000, 30_000));
        // clock behind the last sample never triggers
        assert!(!s.sample_due(10_000, 30_000));
    }
}

// EOF
