use crate::cursor::ByteCursor;
use crate::error::SnssError;

pub const SNSS_MAGIC: [u8; 4] = *b"SNSS";
pub const SUPPORTED_VERSIONS: [u32; 2] = [1, 3];

const HEADER_LEN: usize = 8;
const RECORD_SIZE_LEN: usize = 2;

/// One framed command. `offset` points at the record's size field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub offset: usize,
    pub command_type: u8,
    pub payload: &'a [u8],
}

/// Validates the file header and frames the remaining bytes into records.
///
/// Iteration stops cleanly when the data ends exactly on a record boundary.
/// A truncated record yields one error and then ends the iteration.
#[derive(Debug, Clone)]
pub struct RecordReader<'a> {
    cursor: ByteCursor<'a>,
    version: u32,
    failed: bool,
}

impl<'a> RecordReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, SnssError> {
        let mut cursor = ByteCursor::new(bytes);

        let magic = cursor.take(SNSS_MAGIC.len()).map_err(|_| SnssError::TruncatedHeader {
            needed: HEADER_LEN,
            available: bytes.len(),
        })?;
        if magic != SNSS_MAGIC {
            let mut found = [0u8; 4];
            found.copy_from_slice(magic);
            return Err(SnssError::BadMagicHeader { found });
        }

        let version = cursor.read_u32().map_err(|_| SnssError::TruncatedHeader {
            needed: HEADER_LEN,
            available: bytes.len(),
        })?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(SnssError::UnsupportedVersion { found: version });
        }

        Ok(Self {
            cursor,
            version,
            failed: false,
        })
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn next_record(&mut self) -> Result<Option<Record<'a>>, SnssError> {
        if self.cursor.is_empty() {
            return Ok(None);
        }

        let offset = self.cursor.position();
        let size = self.cursor.read_u16().map_err(|_| {
            SnssError::truncated_record(offset, RECORD_SIZE_LEN, self.cursor.remaining())
        })? as usize;

        // The size covers the type byte, so zero can never be satisfied.
        let remaining = self.cursor.remaining();
        if size == 0 || size > remaining {
            return Err(SnssError::truncated_record(
                offset,
                RECORD_SIZE_LEN + size.max(1),
                RECORD_SIZE_LEN + remaining,
            ));
        }

        let body = self
            .cursor
            .take(size)
            .map_err(|_| SnssError::truncated_record(offset, RECORD_SIZE_LEN + size, remaining))?;

        Ok(Some(Record {
            offset,
            command_type: body[0],
            payload: &body[1..],
        }))
    }
}

impl<'a> Iterator for RecordReader<'a> {
    type Item = Result<Record<'a>, SnssError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_record() {
            Ok(record) => record.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}
