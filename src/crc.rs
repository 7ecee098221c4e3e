use crate::Error;

const CRC8_POLYNOMIAL: u8 = 0x31;
const CRC8_INIT: u8 = 0xFF;

/// Sensirion CRC-8: polynomial 0x31, init 0xFF, no reflection.
///
/// Every 16-bit word the sensor sends or receives is followed by this
/// checksum computed over the word's two bytes.
#[inline]
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = CRC8_INIT;

    for &b in data {
        crc ^= b;
        for _ in 0..8 {
            crc = if (crc & 0x80) != 0 {
                (crc << 1) ^ CRC8_POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }

    crc
}

// Checks every {hi, lo, crc} group of a sensor reply. Any mismatch rejects
// the whole frame.
pub(crate) fn validate_groups(frame: &[u8]) -> Result<(), Error> {
    for group in frame.chunks_exact(3) {
        let computed = crc8(&group[..2]);
        if computed != group[2] {
            log::error!(
                "CRC check failed: computed {:02X}, received {:02X}, frame {:02X?}",
                computed,
                group[2],
                frame
            );
            return Err(Error::Crc);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_datasheet_fixture() {
        // Sensirion's documented test vector.
        assert_eq!(crc8(&[0xBE, 0xEF]), 0x92);
    }

    #[test]
    fn zero_word_checksum() {
        assert_eq!(crc8(&[0x00, 0x00]), 0x81);
    }

    #[test]
    fn accepts_well_formed_groups() {
        let mut frame = [0x01, 0xF4, 0, 0x66, 0x67, 0, 0x61, 0x62, 0];
        for i in (0..9).step_by(3) {
            frame[i + 2] = crc8(&frame[i..i + 2]);
        }
        assert_eq!(validate_groups(&frame), Ok(()));
    }

    #[test]
    fn rejects_any_corrupted_group() {
        let mut frame = [0x01, 0xF4, 0, 0x66, 0x67, 0, 0x61, 0x62, 0];
        for i in (0..9).step_by(3) {
            frame[i + 2] = crc8(&frame[i..i + 2]);
        }
        for crc_index in [2, 5, 8] {
            let mut corrupted = frame;
            corrupted[crc_index] ^= 0xFF;
            assert_eq!(validate_groups(&corrupted), Err(Error::Crc));
        }
    }
}
