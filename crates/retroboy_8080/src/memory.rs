use crate::error::CpuError;

/// Total addressable memory size (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// Flat, bounds-checked byte memory owned by the CPU.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    /// Zero-filled 64 KiB memory.
    pub fn new() -> Self {
        Self::with_size(MEMORY_SIZE)
    }

    /// Zero-filled memory of `size` bytes. Sizes above 64 KiB are clamped,
    /// since nothing past 0xffff is addressable.
    pub fn with_size(size: usize) -> Self {
        Self {
            bytes: vec![0; size.min(MEMORY_SIZE)].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> Result<u8, CpuError> {
        self.bytes
            .get(addr as usize)
            .copied()
            .ok_or(CpuError::OutOfBoundsAccess {
                addr: addr as usize,
            })
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), CpuError> {
        let slot = self
            .bytes
            .get_mut(addr as usize)
            .ok_or(CpuError::OutOfBoundsAccess {
                addr: addr as usize,
            })?;
        *slot = value;
        Ok(())
    }

    /// Copy `data` into memory starting at `at`.
    ///
    /// Nothing is written if the image would run past the end of memory.
    pub fn load(&mut self, data: &[u8], at: u16) -> Result<(), CpuError> {
        let start = at as usize;
        let end = start + data.len();
        if end > self.bytes.len() {
            return Err(CpuError::OutOfBoundsAccess {
                addr: end.saturating_sub(1).max(start),
            });
        }
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Zero every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory").field("len", &self.len()).finish()
    }
}
