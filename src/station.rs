// station.rs

use embedded_hal::{delay::DelayNs, digital::StatefulOutputPin};
use log::*;

use crate::*;

const ACTIVITY_BLINK: (u32, u32) = (1, 50);

/// The device context. Owns every piece of hardware and all mutable state;
/// `run()` never returns.
pub struct Station<N, S, P, D, C> {
    pub(crate) config: MyConfig,
    pub(crate) state: MyState,
    pub(crate) net: N,
    pub(crate) sensor: S,
    pub(crate) led: Led<P>,
    pub(crate) delay: D,
    pub(crate) clock: C,
}

impl<N, S, P, D, C> Station<N, S, P, D, C>
where
    N: Network,
    S: ClimateSensor,
    P: StatefulOutputPin,
    D: DelayNs,
    C: Clock,
{
    pub fn new(config: MyConfig, net: N, sensor: S, led: P, delay: D, clock: C) -> Self {
        Station {
            config,
            state: MyState::new(),
            net,
            sensor,
            led: Led::new(led),
            delay,
            clock,
        }
    }

    pub fn config(&self) -> &MyConfig {
        &self.config
    }

    pub fn state(&self) -> &MyState {
        &self.state
    }

    pub fn start(&mut self) {
        self.led.set(false);
        self.ensure_connected().ok();

        info!("Synchronizing time with {:?}...", self.config.ntp_servers);
        match self.clock.sync_time() {
            Ok(()) => self.state.time_synced = true,
            Err(e) => warn!("{e}, the collector will use its receive time."),
        }
        match self
            .clock
            .utc_now()
            .and_then(|t| local_time(t, self.config.utc_offset))
        {
            Some(t) => info!("Local time: {}", t.format("%A, %B %d %Y %H:%M:%S")),
            None => warn!("{}", DeviceError::TimeSyncUnavailable),
        }

        info!("Ready, sampling every {} ms.", self.config.read_interval_ms);
    }

    /// One pass of the main loop. Returns what happened to the sample, if one was due.
    pub fn tick(&mut self) -> Option<Delivery> {
        if self.poll_link() != ConnectivityState::Connected {
            warn!("WiFi disconnected! Reconnecting...");
            self.led.set(false);
            self.ensure_connected().ok();
        }

        let now = self.clock.now_ms();
        let delivery = if self.state.sample_due(now, self.config.read_interval_ms) {
            let (times, delay_ms) = ACTIVITY_BLINK;
            let connected = self.poll_link() == ConnectivityState::Connected;
            self.led.blink(times, delay_ms, connected, &mut self.delay);

            let d = self.sample_and_report();
            self.state.last_sample_ms = now;
            Some(d)
        } else {
            None
        };

        self.delay.delay_ms(self.config.loop_delay_ms);
        delivery
    }

    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.tick();
        }
    }

    pub fn sample_and_report(&mut self) -> Delivery {
        self.state.samples += 1;
        info!("--- Reading #{} ---", self.state.samples);

        // a link that dropped since the top of the loop must not get a POST
        self.poll_link();
        let timestamp = timestamp(&self.clock);
        if timestamp.is_none() {
            debug!("No wall clock time, sending without timestamp.");
        }

        let delivery = match read_sensor(&mut self.sensor) {
            Ok(sample) => {
                info!("Temperature: {:.1} C", sample.temperature);
                info!("Humidity: {:.1} %", sample.humidity);
                let status = classify(sample.temperature, sample.humidity);
                info!("Status: {status}");

                let reading = Reading {
                    temperature: sample.temperature,
                    humidity: sample.humidity,
                    device_id: self.config.device_id.clone(),
                    timestamp,
                };
                self.send_reading(&reading)
            }
            Err(e) => {
                error!("{e}");
                let event = ErrorEvent {
                    status_tag: StatusTag::ErroSensor,
                    message: SENSOR_ERROR_MSG.into(),
                    device_id: self.config.device_id.clone(),
                    timestamp,
                };
                self.send_error(&event)
            }
        };

        info!("--- End of reading ---");
        delivery
    }
}


// EOF
