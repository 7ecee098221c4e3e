// SCD41_I2C_ADDRESS is the fixed 7-bit bus address the sensor answers on.
pub const SCD41_I2C_ADDRESS: u8 = 0x62;

// Starts periodic measurement mode; the sensor samples autonomously every
// five seconds until stopped. No reply.
pub const CMD_START_PERIODIC_MEASUREMENT: [u8; 2] = [0x21, 0xb1];

// Stops periodic measurement mode. No reply; the sensor needs at least
// 500 ms afterwards before it accepts further commands.
pub const CMD_STOP_PERIODIC_MEASUREMENT: [u8; 2] = [0x3f, 0x86];

// Asks whether a fresh sample is buffered. Reply is one CRC-protected word;
// the low 11 bits are nonzero when data is ready.
pub const CMD_GET_DATA_READY_STATUS: [u8; 2] = [0xe4, 0xb8];

// Reads the buffered sample. Reply is three CRC-protected words:
// CO2, raw temperature, raw humidity.
pub const CMD_READ_MEASUREMENT: [u8; 2] = [0xec, 0x05];
