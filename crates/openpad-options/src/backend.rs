//! Storage backend interface
//!
//! The physical medium (EEPROM, emulated flash page, file) lives outside the
//! core. It only has to offer contiguous byte reads and writes plus an
//! explicit flush that makes previous writes durable.

use crate::{ERASED_BYTE, StorageError, StorageResult};

pub trait OptionsBackend {
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> StorageResult<()>;

    fn write(&mut self, offset: usize, bytes: &[u8]) -> StorageResult<()>;

    fn flush(&mut self) -> StorageResult<()>;
}

impl<B: OptionsBackend + ?Sized> OptionsBackend for &mut B {
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> StorageResult<()> {
        (**self).read(offset, buf)
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) -> StorageResult<()> {
        (**self).write(offset, bytes)
    }

    fn flush(&mut self) -> StorageResult<()> {
        (**self).flush()
    }
}

impl<B: OptionsBackend + ?Sized> OptionsBackend for Box<B> {
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> StorageResult<()> {
        (**self).read(offset, buf)
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) -> StorageResult<()> {
        (**self).write(offset, bytes)
    }

    fn flush(&mut self) -> StorageResult<()> {
        (**self).flush()
    }
}

/// RAM-backed medium, initialized to the erased pattern.
///
/// Keeps a log of every write and counts flushes so callers can observe wear.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    bytes: Vec<u8>,
    writes: Vec<(usize, Vec<u8>)>,
    flush_count: usize,
}

impl MemoryBackend {
    pub fn new(capacity: usize) -> Self {
        Self::from_bytes(vec![ERASED_BYTE; capacity])
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            writes: Vec::new(),
            flush_count: 0,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn writes(&self) -> &[(usize, Vec<u8>)] {
        &self.writes
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.flush_count = 0;
    }

    fn range(&self, offset: usize, len: usize) -> StorageResult<std::ops::Range<usize>> {
        let capacity = self.bytes.len();
        match offset.checked_add(len) {
            Some(end) if end <= capacity => Ok(offset..end),
            _ => Err(StorageError::OutOfRange {
                offset,
                len,
                capacity,
            }),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new(crate::RECORD_LEN)
    }
}

impl OptionsBackend for MemoryBackend {
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> StorageResult<()> {
        let range = self.range(offset, buf.len())?;
        let src = self.bytes.get(range).ok_or(StorageError::ReadFailed(offset))?;
        buf.copy_from_slice(src);
        Ok(())
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) -> StorageResult<()> {
        let range = self.range(offset, bytes.len())?;
        let dst = self
            .bytes
            .get_mut(range)
            .ok_or(StorageError::WriteFailed(offset))?;
        dst.copy_from_slice(bytes);
        self.writes.push((offset, bytes.to_vec()));
        Ok(())
    }

    fn flush(&mut self) -> StorageResult<()> {
        self.flush_count = self.flush_count.saturating_add(1);
        Ok(())
    }
}
