// esp.rs

use std::time::Instant;

use anyhow::anyhow;
use chrono::{DateTime, Datelike, Utc};
use embedded_svc::{
    http::client::Client as HttpClient,
    wifi::{ClientConfiguration, Configuration},
};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_svc::{
    http::client::{Configuration as HttpConfiguration, EspHttpConnection},
    io::{self, Write},
    sntp::{EspSntp, SntpConf, SyncStatus},
    wifi::EspWifi,
};
use log::*;

use crate::*;

const HTTP_BUF_SIZE: usize = 512;
// the RTC starts at 1970 until SNTP has set it
const MIN_VALID_YEAR: i32 = 2024;
const SNTP_WAIT_POLLS: u32 = 50;
const SNTP_POLL_MS: u32 = 100;

pub struct EspNetwork<'a> {
    wifi: EspWifi<'a>,
}

impl<'a> EspNetwork<'a> {
    pub fn new(wifi: EspWifi<'a>) -> Self {
        EspNetwork { wifi }
    }
}

impl Network for EspNetwork<'_> {
    fn is_connected(&mut self) -> bool {
        matches!(
            (self.wifi.is_connected(), self.wifi.is_up()),
            (Ok(true), Ok(true))
        )
    }

    fn begin(&mut self, ssid: &str, pass: &str) -> anyhow::Result<()> {
        if !self.wifi.is_started()? {
            info!("WiFi setting credentials...");
            self.wifi
                .set_configuration(&Configuration::Client(ClientConfiguration {
                    ssid: ssid.try_into().map_err(|_| anyhow!("SSID too long"))?,
                    password: pass.try_into().map_err(|_| anyhow!("password too long"))?,
                    ..Default::default()
                }))?;

            info!("WiFi driver starting...");
            self.wifi.start()?;
        } else {
            // drop a half-dead association before trying again
            self.wifi.disconnect().ok();
        }

        self.wifi.connect()?;
        Ok(())
    }

    fn post_json(&mut self, url: &str, body: &str) -> anyhow::Result<HttpResponse> {
        let mut client = HttpClient::wrap(EspHttpConnection::new(&HttpConfiguration::default())?);

        let content_length = body.len().to_string();
        let headers = [
            ("content-type", "application/json"),
            ("content-length", content_length.as_str()),
        ];
        let mut req = client.post(url, &headers)?;
        req.write_all(body.as_bytes())?;
        req.flush()?;

        let mut resp = req.submit()?;
        let status = resp.status();
        let mut buf = [0u8; HTTP_BUF_SIZE];
        let len = io::utils::try_read_full(&mut resp, &mut buf).map_err(|(e, _)| e)?;

        Ok(HttpResponse {
            status,
            body: String::from_utf8_lossy(&buf[..len]).into_owned(),
        })
    }
}

pub struct EspClock {
    boot: Instant,
    servers: [&'static str; 2],
    // keeps SNTP running, dropping it stops the service
    sntp: Option<EspSntp<'static>>,
}

impl EspClock {
    pub fn new(servers: [&'static str; 2]) -> Self {
        EspClock {
            boot: Instant::now(),
            servers,
            sntp: None,
        }
    }
}

impl Clock for EspClock {
    fn now_ms(&self) -> u64 {
        self.boot.elapsed().as_millis() as u64
    }

    fn utc_now(&self) -> Option<DateTime<Utc>> {
        let now = Utc::now();
        (now.year() >= MIN_VALID_YEAR).then_some(now)
    }

    fn sync_time(&mut self) -> Result<(), DeviceError> {
        let mut conf = SntpConf::default();
        // slot count is CONFIG_LWIP_SNTP_MAX_SERVERS, see sdkconfig.defaults
        if conf.servers.len() < self.servers.len() {
            warn!(
                "SNTP has {} server slot(s), ignoring {:?}",
                conf.servers.len(),
                &self.servers[conf.servers.len()..]
            );
        }
        for (slot, server) in conf.servers.iter_mut().zip(self.servers) {
            *slot = server;
        }

        let sntp = EspSntp::new(&conf).map_err(|e| {
            error!("SNTP init failed: {e:?}");
            DeviceError::TimeSyncUnavailable
        })?;

        let mut synced = false;
        for _ in 0..SNTP_WAIT_POLLS {
            if matches!(sntp.get_sync_status(), SyncStatus::Completed) {
                synced = true;
                break;
            }
            FreeRtos::delay_ms(SNTP_POLL_MS);
        }
        self.sntp = Some(sntp);

        if synced {
            info!("SNTP time synchronized.");
            Ok(())
        } else {
            Err(DeviceError::TimeSyncUnavailable)
        }
    }
}

// EOF
