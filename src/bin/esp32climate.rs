// bin/esp32climate.rs

#[cfg(target_os = "espidf")]
esp_idf_sys::esp_app_desc!();

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use esp32climate::*;
    use esp_idf_hal::{
        delay::{Ets, FreeRtos},
        gpio::{self, IOPin, OutputPin, Pull},
        prelude::Peripherals,
    };
    use esp_idf_svc::{eventloop::EspSystemEventLoop, nvs, wifi::EspWifi};

    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("=== ESP32 temperature & humidity station v{FW_VERSION} ===");

    let config = MyConfig::default();
    info!("My config:\n{config:#?}");

    let sysloop = EspSystemEventLoop::take()?;
    let nvs_default_partition = nvs::EspDefaultNvsPartition::take()?;
    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    #[cfg(feature = "esp32c3")]
    let (led_pin, dht_pin) = (pins.gpio8.downgrade_output(), pins.gpio4.downgrade());

    #[cfg(feature = "esp32s")]
    let (led_pin, dht_pin) = (pins.gpio2.downgrade_output(), pins.gpio4.downgrade());

    let led = gpio::PinDriver::output(led_pin)?;

    let mut dht_drv = gpio::PinDriver::input_output_od(dht_pin)?;
    dht_drv.set_pull(Pull::Up)?;
    let sensor = Dht11::new(dht_drv, Ets);
    info!("DHT11 sensor initialized.");

    let wifi = EspWifi::new(
        peripherals.modem,
        sysloop.clone(),
        Some(nvs_default_partition),
    )?;

    info!("Entering main loop...");
    Station::new(
        config.clone(),
        EspNetwork::new(wifi),
        sensor,
        led,
        FreeRtos,
        EspClock::new(config.ntp_servers),
    )
    .run()
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("esp32climate is ESP-IDF firmware, build it for an espidf target.");
    std::process::exit(1);
}

// EOF
