use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use log::{debug, error};

use crate::commands::*;
use crate::{Error, Scd41Data, crc};

// Minimum gap between a read command and clocking out its reply.
const READ_DELAY_MS: u32 = 1;
// Settling time the sensor needs after a stop command.
const STOP_SETTLE_MS: u32 = 500;

// Data is ready iff the low 11 bits of the status word are nonzero.
const DATA_READY_MASK: u16 = 0x07FF;

/// Driver for the SCD41 sensor.
///
/// Owns the bus and a delay source; every transaction blocks the caller
/// (awaits) until the sensor has answered. Brings the sensor into periodic
/// measurement mode with [`Scd41::init`], then poll with [`Scd41::measure`]
/// about once a second.
pub struct Scd41<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> Scd41<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Creates a driver on the sensor's default address `0x62`.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, SCD41_I2C_ADDRESS)
    }

    /// Creates a driver on a non-default address.
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    /// Hands the bus back, consuming the driver.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Brings the sensor into periodic measurement mode from any state.
    ///
    /// The sensor keeps streaming across host restarts, so a stop is issued
    /// first and given a full second to settle before the start command.
    pub async fn init(&mut self) -> Result<(), Error> {
        self.stop_periodic_measurement().await?;
        self.delay.delay_ms(STOP_SETTLE_MS).await;
        self.start_periodic_measurement().await?;
        debug!("SCD41 initialization finished");
        Ok(())
    }

    /// Starts periodic measurement mode. The sensor samples autonomously
    /// every few seconds until stopped; first data is ready after ~5 s.
    pub async fn start_periodic_measurement(&mut self) -> Result<(), Error> {
        self.write(&CMD_START_PERIODIC_MEASUREMENT).await
    }

    /// Stops periodic measurement mode and waits out the 500 ms the sensor
    /// needs before it accepts further commands.
    pub async fn stop_periodic_measurement(&mut self) -> Result<(), Error> {
        self.write(&CMD_STOP_PERIODIC_MEASUREMENT).await?;
        self.delay.delay_ms(STOP_SETTLE_MS).await;
        Ok(())
    }

    /// Asks the sensor whether a fresh sample is buffered.
    ///
    /// The status reply carries its own CRC byte, which is checked here as
    /// well; a glitched status read reports `Error::Crc` rather than a bogus
    /// ready bit.
    pub async fn data_ready(&mut self) -> Result<bool, Error> {
        let mut reply = [0u8; 3];
        self.command_read(&CMD_GET_DATA_READY_STATUS, &mut reply)
            .await?;
        crc::validate_groups(&reply)?;
        let word = u16::from_be_bytes([reply[0], reply[1]]);
        Ok(word & DATA_READY_MASK != 0)
    }

    /// Reads and decodes the buffered sample.
    ///
    /// Call only after [`Scd41::data_ready`] reported true; the sensor
    /// returns stale or zeroed words otherwise.
    pub async fn read_measurement(&mut self) -> Result<Scd41Data, Error> {
        let mut frame = [0u8; 9];
        self.command_read(&CMD_READ_MEASUREMENT, &mut frame).await?;
        debug!("raw measurement frame: {:02X?}", frame);
        Scd41Data::from_frame(&frame)
    }

    /// Polls the data-ready flag and reads one sample.
    ///
    /// Returns [`Error::NotReady`] when the sensor has nothing fresh, so a
    /// polling loop can log and retry next cycle instead of aborting.
    pub async fn measure(&mut self) -> Result<Scd41Data, Error> {
        if !self.data_ready().await? {
            return Err(Error::NotReady);
        }
        self.read_measurement().await
    }

    // Write-then-delayed-read transaction. The sensor needs >=1 ms after a
    // read command before the reply can be clocked out, so a combined
    // write_read is not an option here.
    async fn command_read(&mut self, command: &[u8; 2], reply: &mut [u8]) -> Result<(), Error> {
        self.write(command).await?;
        self.delay.delay_ms(READ_DELAY_MS).await;
        self.i2c.read(self.address, reply).await.map_err(|e| {
            error!("I2C read after command {:02X?} failed: {:?}", command, e);
            Error::I2c
        })
    }

    async fn write(&mut self, command: &[u8; 2]) -> Result<(), Error> {
        debug!("sending command {:02X?}", command);
        self.i2c.write(self.address, command).await.map_err(|e| {
            error!("I2C write of command {:02X?} failed: {:?}", command, e);
            Error::I2c
        })
    }
}
