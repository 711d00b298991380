// config.rs

pub const DEFAULT_COLLECTOR_URL: &str = "http://collector.local:5000/data";
pub const DEFAULT_DEVICE_ID: &str = "ESP32_DHT11_Device_01";

const DEFAULT_READ_INTERVAL_MS: u64 = 30_000;
const DEFAULT_LOOP_DELAY_MS: u32 = 1000;
const DEFAULT_CONNECT_ATTEMPTS: u32 = 20;
const DEFAULT_CONNECT_POLL_MS: u32 = 500;
const DEFAULT_UTC_OFFSET: i32 = -3 * 3600;

pub const NTP_SERVERS: [&str; 2] = ["pool.ntp.org", "time.nist.gov"];

pub const SENSOR_ERROR_MSG: &str = "Falha na leitura do DHT11";

/// Everything here is fixed at build time, see build.rs for the overrides.
#[derive(Clone, Debug)]
pub struct MyConfig {
    pub wifi_ssid: String,
    pub wifi_pass: String,
    pub collector_url: String,
    pub device_id: String,

    pub read_interval_ms: u64,
    pub loop_delay_ms: u32,
    pub connect_attempts: u32,
    pub connect_poll_ms: u32,

    pub utc_offset: i32,
    pub ntp_servers: [&'static str; 2],
}

impl Default for MyConfig {
    fn default() -> Self {
        Self {
            wifi_ssid: option_env!("WIFI_SSID").unwrap_or("internet").into(),
            wifi_pass: option_env!("WIFI_PASS").unwrap_or("password").into(),
            collector_url: option_env!("COLLECTOR_URL")
                .unwrap_or(DEFAULT_COLLECTOR_URL)
                .into(),
            device_id: option_env!("DEVICE_ID").unwrap_or(DEFAULT_DEVICE_ID).into(),

            read_interval_ms: DEFAULT_READ_INTERVAL_MS,
            loop_delay_ms: DEFAULT_LOOP_DELAY_MS,
            connect_attempts: DEFAULT_CONNECT_ATTEMPTS,
            connect_poll_ms: DEFAULT_CONNECT_POLL_MS,

            utc_offset: DEFAULT_UTC_OFFSET,
            ntp_servers: NTP_SERVERS,
        }
    }
}


// EOF
