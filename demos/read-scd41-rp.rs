#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::peripherals::I2C0;
use embassy_rp::{bind_interrupts, i2c};
use embassy_time::{Delay, Duration, Timer};
use panic_probe as _;
use scd41_async::{Error, Scd41};

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    let sda = p.PIN_0;
    let scl = p.PIN_1;

    // Configure I2C
    let i2c = i2c::I2c::new_async(p.I2C0, scl, sda, Irqs, Default::default());

    // Create sensor instance and start periodic measurement
    let mut sensor = Scd41::new(i2c, Delay);
    while let Err(e) = sensor.init().await {
        error!("SCD41 initialization failed: {}", e);
        Timer::after(Duration::from_secs(1)).await;
    }

    // Poll once a second
    loop {
        match sensor.measure().await {
            Ok(data) => {
                info!(
                    "CO2: {} ppm, Humidity: {} %, Temperature: {} °C",
                    data.co2_ppm, data.humidity, data.temperature
                );
            }
            Err(Error::NotReady) => info!("no new data available"),
            Err(Error::Crc) => error!("CRC check failed, skipping sample"),
            Err(Error::I2c) => error!("I2C communication error"),
        }

        Timer::after(Duration::from_secs(1)).await;
    }
}
