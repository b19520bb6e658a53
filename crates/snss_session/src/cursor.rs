//! Little-endian readers over an in-memory byte slice.
//!
//! Strings are stored pickle-style: a `u32` length prefix, then the payload
//! padded with zeros to the next 4-byte boundary. Every read either consumes its
//! full width or fails without advancing.

use crate::error::DecodeError;

const PICKLE_ALIGNMENT: usize = 4;

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consumes exactly `len` bytes and returns them borrowed from the source.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(DecodeError::end_of_data(self.position, len, remaining));
        }

        let start = self.position;
        self.position += len;
        Ok(&self.bytes[start..self.position])
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.take_array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.take_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        self.take_array().map(u64::from_le_bytes)
    }

    /// Reads a length-prefixed single-byte string. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let start = self.position;
        let len = self.read_u32()? as usize;
        let bytes = self.take_padded(start, len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Reads a length-prefixed UTF-16LE string. The prefix counts code units,
    /// not bytes. Unpaired surrogates decode to U+FFFD.
    pub fn read_wide_string(&mut self) -> Result<String, DecodeError> {
        let start = self.position;
        let units = self.read_u32()? as usize;
        let bytes = self.take_padded(start, units.saturating_mul(2))?;

        let code_units = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect::<Vec<_>>();
        Ok(String::from_utf16_lossy(&code_units))
    }

    /// Consumes `len` bytes rounded up to the pickle alignment and returns the
    /// unpadded prefix. On failure the cursor is rewound to `rewind_to`.
    fn take_padded(&mut self, rewind_to: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        // A length this close to `usize::MAX` can never fit in the buffer.
        let Some(padded) = len.checked_next_multiple_of(PICKLE_ALIGNMENT) else {
            let err = DecodeError::end_of_data(self.position, len, self.remaining());
            self.position = rewind_to;
            return Err(err);
        };
        match self.take(padded) {
            Ok(bytes) => Ok(&bytes[..len]),
            Err(err) => {
                self.position = rewind_to;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ByteCursor;
    use crate::error::DecodeError;

    #[test]
    fn fixed_width_reads_are_little_endian() {
        let bytes = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
            0x0f,
        ];
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16().unwrap(), 0x0302);
        assert_eq!(cursor.read_u32().unwrap(), 0x0706_0504);
        assert_eq!(cursor.read_u64().unwrap(), 0x0f0e_0d0c_0b0a_0908);
        assert_eq!(
            cursor.read_u8().unwrap_err(),
            DecodeError::end_of_data(15, 1, 0)
        );
    }

    #[test]
    fn short_read_does_not_advance() {
        let mut cursor = ByteCursor::new(&[0xaa, 0xbb, 0xcc]);
        let error = cursor.read_u32().unwrap_err();

        assert_eq!(error, DecodeError::end_of_data(0, 4, 3));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_u16().unwrap(), 0xbbaa);
    }

    #[test]
    fn string_consumes_padding_but_returns_declared_length() {
        let mut bytes = 5u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"hello\0\0\0");
        bytes.extend_from_slice(&7u32.to_le_bytes());
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_string().unwrap(), "hello");
        assert_eq!(cursor.position(), 12);
        assert_eq!(cursor.read_u32().unwrap(), 7);
    }

    #[test]
    fn aligned_string_has_no_padding() {
        let mut bytes = 4u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"abcd");
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_string().unwrap(), "abcd");
        assert!(cursor.is_empty());
    }

    #[test]
    fn string_missing_padding_is_a_short_read() {
        let mut bytes = 3u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"abc");
        let mut cursor = ByteCursor::new(&bytes);

        let error = cursor.read_string().unwrap_err();
        assert_eq!(error, DecodeError::end_of_data(4, 4, 3));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn wide_string_decodes_utf16_and_skips_padding() {
        let text = "Añ😀";
        let units = text.encode_utf16().collect::<Vec<_>>();
        let mut bytes = (units.len() as u32).to_le_bytes().to_vec();
        for unit in &units {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        // 4 code units = 8 bytes, already aligned; add a trailing marker.
        bytes.extend_from_slice(&9u32.to_le_bytes());
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_wide_string().unwrap(), text);
        assert_eq!(cursor.read_u32().unwrap(), 9);
    }

    #[test]
    fn odd_length_wide_string_is_padded_to_four_bytes() {
        let mut bytes = 1u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[b'Z', 0, 0, 0]);
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_wide_string().unwrap(), "Z");
        assert!(cursor.is_empty());
    }

    #[test]
    fn oversized_wide_string_length_fails() {
        let mut bytes = u32::MAX.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0; 8]);
        let mut cursor = ByteCursor::new(&bytes);

        assert!(cursor.read_wide_string().is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_wide_string_reports_real_byte_count() {
        let mut bytes = u32::MAX.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0; 8]);
        let mut cursor = ByteCursor::new(&bytes);

        // 2 * u32::MAX bytes, rounded up to the next multiple of 4.
        assert_eq!(
            cursor.read_wide_string().unwrap_err(),
            DecodeError::end_of_data(4, 0x2_0000_0000, 8)
        );
    }

    #[test]
    fn unpaddable_length_reports_the_declared_length() {
        let mut cursor = ByteCursor::new(&[0; 6]);
        cursor.take(2).unwrap();

        let error = cursor.take_padded(0, usize::MAX - 1).unwrap_err();
        assert_eq!(error, DecodeError::end_of_data(2, usize::MAX - 1, 4));
        assert_eq!(cursor.position(), 0);
    }
}
