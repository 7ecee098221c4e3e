#![cfg_attr(not(test), no_std)]

//! Async driver for the Sensirion SCD41 CO2/temperature/humidity sensor.
//!
//! The driver speaks the sensor's I2C command protocol: fixed 16-bit command
//! codes, write-then-delayed-read transactions, data-ready polling, and
//! CRC-validated frame decoding. It is generic over any bus implementing
//! [`embedded_hal_async::i2c::I2c`] and takes its delays from an injected
//! [`embedded_hal_async::delay::DelayNs`], so it runs unchanged on any async
//! HAL (the bundled demo uses `embassy-rp`).
//!
//! ```ignore
//! use scd41_async::{Error, Scd41};
//!
//! let mut sensor = Scd41::new(i2c, delay);
//! sensor.init().await?;
//! loop {
//!     match sensor.measure().await {
//!         Ok(data) => info!("CO2: {} ppm", data.co2_ppm),
//!         Err(Error::NotReady) => info!("no new data available"),
//!         Err(e) => error!("read failed: {:?}", e),
//!     }
//!     // sleep a second, platform specific
//! }
//! ```

mod commands;
pub use commands::*;

mod crc;
pub use crc::crc8;

mod error;
pub use error::*;

mod scd41;
pub use scd41::Scd41;

/// A single decoded sample read from the SCD41 sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scd41Data {
    /// CO2 concentration in parts per million.
    pub co2_ppm: u16,
    /// Temperature in °C, rounded to one decimal place.
    pub temperature: f32,
    /// Relative humidity in %, rounded to one decimal place.
    pub humidity: f32,
}

impl Scd41Data {
    /// Validates and decodes a raw 9-byte measurement frame.
    ///
    /// The frame holds three big-endian words, each followed by its CRC-8:
    /// CO2 (ppm, direct), raw temperature and raw humidity (linear scale
    /// over the full 16-bit range). Any CRC mismatch fails the whole frame.
    pub fn from_frame(frame: &[u8; 9]) -> Result<Self, Error> {
        crc::validate_groups(frame)?;

        let co2_ppm = u16::from_be_bytes([frame[0], frame[1]]);

        let raw_temperature = u16::from_be_bytes([frame[3], frame[4]]);
        let temperature = round_1dp(-45.0 + 175.0 * raw_temperature as f32 / 65535.0);

        let raw_humidity = u16::from_be_bytes([frame[6], frame[7]]);
        let humidity = round_1dp(100.0 * raw_humidity as f32 / 65535.0);

        Ok(Self {
            co2_ppm,
            temperature,
            humidity,
        })
    }
}

// Round to one decimal place without std or libm. `as i32` truncates toward
// zero, so nudge away from zero by half a step first.
fn round_1dp(value: f32) -> f32 {
    let scaled = value * 10.0;
    let nearest = if scaled >= 0.0 {
        (scaled + 0.5) as i32
    } else {
        (scaled - 0.5) as i32
    };
    nearest as f32 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_for(words: [u16; 3]) -> [u8; 9] {
        let mut frame = [0u8; 9];
        for (i, word) in words.iter().enumerate() {
            let [hi, lo] = word.to_be_bytes();
            frame[i * 3] = hi;
            frame[i * 3 + 1] = lo;
            frame[i * 3 + 2] = crc8(&[hi, lo]);
        }
        frame
    }

    #[test]
    fn decodes_known_frame() {
        // 0x01F4 = 500 ppm, 0x6667 -> 25.0 °C, 0x6162 -> 38.0 %RH
        let frame = frame_for([0x01F4, 0x6667, 0x6162]);
        let data = Scd41Data::from_frame(&frame).unwrap();
        assert_eq!(data.co2_ppm, 500);
        assert_eq!(data.temperature, 25.0);
        assert_eq!(data.humidity, 38.0);
    }

    #[test]
    fn round_trips_re_encoded_values() {
        let frame = frame_for([800, 0x6667, 0x8000]);
        let data = Scd41Data::from_frame(&frame).unwrap();
        assert_eq!(data.co2_ppm, 800);
        assert_eq!(data.temperature, 25.0);
        assert_eq!(data.humidity, 50.0);
    }

    #[test]
    fn decodes_range_extremes() {
        let frame = frame_for([0, 0x0000, 0xFFFF]);
        let data = Scd41Data::from_frame(&frame).unwrap();
        assert_eq!(data.co2_ppm, 0);
        assert_eq!(data.temperature, -45.0);
        assert_eq!(data.humidity, 100.0);
    }

    #[test]
    fn corrupted_frame_yields_no_partial_reading() {
        let mut frame = frame_for([0x01F4, 0x6667, 0x6162]);
        frame[5] ^= 0x01;
        assert_eq!(Scd41Data::from_frame(&frame), Err(Error::Crc));
    }
}
