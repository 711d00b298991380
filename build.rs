// build.rs

use std::env;

fn main() -> anyhow::Result<()> {
    // Necessary because of this issue: https://github.com/rust-lang/cargo/issues/9641
    // see also https://github.com/rust-lang/cargo/issues/9554
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::build::CfgArgs::output_propagated("ESP_IDF")?;
        embuild::build::LinkArgs::output_propagated("ESP_IDF")?;
    }

    let wifi_ssid = env::var("WIFI_SSID").unwrap_or_else(|_| "internet".into());
    let wifi_pass = env::var("WIFI_PASS").unwrap_or_else(|_| "password".into());
    let collector_url =
        env::var("COLLECTOR_URL").unwrap_or_else(|_| "http://collector.local:5000/data".into());
    let device_id = env::var("DEVICE_ID").unwrap_or_else(|_| "ESP32_DHT11_Device_01".into());

    println!("cargo:rustc-env=WIFI_SSID={wifi_ssid}");
    println!("cargo:rustc-env=WIFI_PASS={wifi_pass}");
    println!("cargo:rustc-env=COLLECTOR_URL={collector_url}");
    println!("cargo:rustc-env=DEVICE_ID={device_id}");
    for var in ["WIFI_SSID", "WIFI_PASS", "COLLECTOR_URL", "DEVICE_ID"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    Ok(())
}

// EOF
