// measure.rs

use std::fmt;

use log::*;
use serde::Serialize;

use crate::DeviceError;

/// A temperature/humidity source. A channel that could not be read is NaN.
pub trait ClimateSensor {
    /// Returns (temperature °C, relative humidity %).
    fn sample(&mut self) -> (f32, f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub temperature: f32,
    pub humidity: f32,
}

pub fn read_sensor<S: ClimateSensor>(sensor: &mut S) -> Result<Sample, DeviceError> {
    let (temperature, humidity) = sensor.sample();
    if temperature.is_nan() || humidity.is_nan() {
        error!("Sensor read failed: temperature={temperature} humidity={humidity}");
        return Err(DeviceError::SensorReadFailure);
    }
    Ok(Sample {
        temperature,
        humidity,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    Normal,
    AlertaTemperatura,
    AlertaUmidade,
    CriticoTemperatura,
    CriticoUmidade,
    ErroSensor,
}

impl StatusTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTag::Normal => "normal",
            StatusTag::AlertaTemperatura => "alerta_temperatura",
            StatusTag::AlertaUmidade => "alerta_umidade",
            StatusTag::CriticoTemperatura => "critico_temperatura",
            StatusTag::CriticoUmidade => "critico_umidade",
            StatusTag::ErroSensor => "erro_sensor",
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// First match wins. Thresholds are strict, a value sitting exactly
// on a limit falls through to the next rule.
pub fn classify(temperature: f32, humidity: f32) -> StatusTag {
    if temperature > 40.0 || temperature < 0.0 {
        StatusTag::CriticoTemperatura
    } else if humidity > 95.0 || humidity < 10.0 {
        StatusTag::CriticoUmidade
    } else if temperature > 30.0 || temperature < 5.0 {
        StatusTag::AlertaTemperatura
    } else if humidity > 90.0 || humidity < 20.0 {
        StatusTag::AlertaUmidade
    } else {
        StatusTag::Normal
    }
}


// EOF
