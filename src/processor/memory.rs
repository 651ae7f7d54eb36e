use crate::errors::VmError;
use crate::hardware::MEMORY_SIZE;

/// Raw storage backing the whole address space
pub struct Ram {
    memory: Box<[u8; MEMORY_SIZE]>,
}

impl Ram {
    pub fn new() -> Self {
        Self {
            memory: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Read a byte from the specified `address`
    pub fn read(&self, address: u16) -> u8 {
        self.memory[address as usize]
    }

    /// Write a byte of `data` to the specified `address`
    pub fn write(&mut self, address: u16, data: u8) {
        self.memory[address as usize] = data;
    }

    /// Load `contents` array starting on `address`.
    ///
    /// Contents must fit before the end of the address space, nothing is
    /// copied otherwise.
    pub fn load(&mut self, address: u16, contents: &[u8]) -> Result<(), VmError> {
        let start = address as usize;
        let end = start + contents.len();
        if end > MEMORY_SIZE {
            return Err(VmError::LoadOutOfBounds {
                address,
                len: contents.len(),
            });
        }

        self.memory[start..end].copy_from_slice(contents);
        Ok(())
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}
