use crate::errors::{BusError, DeviceError};

/// Inclusive range of addresses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressRange {
    pub start: u16,
    pub end: u16,
}

impl AddressRange {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Range claiming a single `address`
    pub fn single(address: u16) -> Self {
        Self::new(address, address)
    }

    pub fn contains(&self, address: u16) -> bool {
        address >= self.start && address <= self.end
    }

    pub fn overlaps(&self, other: &AddressRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// What the CPU sees of the outside world
pub trait Bus {
    /// Read a byte from the specified `address`
    fn read(&self, address: u16) -> u8;

    /// Read raw memory at `address`. Mapped devices never see it
    fn peek(&self, address: u16) -> u8;

    /// Write a byte of `data` to the specified `address`
    fn write(&mut self, address: u16, data: u8) -> Result<(), BusError>;
}

/// Memory-mapped device capability.
///
/// A device claims an address range on the bus and observes reads and writes
/// inside it. Devices receive absolute addresses.
pub trait Device {
    /// Name used to identify the device in logs and errors
    fn name(&self) -> &'static str;

    /// Addresses claimed by the device
    fn address_range(&self) -> AddressRange;

    /// Intercept a read. `None` lets the bus fall through to raw memory
    fn read(&self, address: u16) -> Option<u8>;

    /// Observe a write. The bus stores `data` in raw memory regardless of the
    /// returned value; `Ok(true)` only reports the device handled it
    fn write(&mut self, address: u16, data: u8) -> Result<bool, DeviceError>;
}
