/// Errors returned by the SCD41 driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A 3-byte word group failed its CRC-8 check. The whole frame is
    /// discarded; no partially decoded reading is ever returned.
    Crc,
    /// The underlying I2C transaction failed.
    I2c,
    /// The sensor has not buffered a fresh sample yet.
    NotReady,
}
