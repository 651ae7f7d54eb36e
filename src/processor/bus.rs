use log::{debug, warn};

use crate::errors::{BusError, VmError};
use crate::interfaces::AddressRange;
use crate::interfaces::Bus as BusTrait;
use crate::types::SharedDevice;

use super::memory::Ram;

/// Memory bus.
///
/// Every address is backed by RAM. Devices can be mapped on top of it to
/// observe writes and intercept reads. When several devices claim an address,
/// the first one attached wins.
pub struct MemoryBus {
    id: &'static str,
    devices: Vec<MappedDevice>,

    ram: Ram,
}

struct MappedDevice {
    device: SharedDevice,
    addr_range: AddressRange,
}

impl MemoryBus {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            devices: Vec::new(),
            ram: Ram::new(),
        }
    }

    /// Map `device` on the addresses it claims
    pub fn attach(&mut self, device: SharedDevice) -> Result<(), BusError> {
        let (device_id, addr_range) = {
            let device = device.borrow();
            (device.name(), device.address_range())
        };

        if addr_range.start > addr_range.end {
            return Err(BusError::InvalidAddressRange {
                device_id,
                start: addr_range.start,
                end: addr_range.end,
            });
        }

        for registered in self.devices.iter() {
            if registered.addr_range.overlaps(&addr_range) {
                warn!(
                    "Device '{device_id}' (with address {addr_range:?}) overlaps with '{0}' (with address {1:?}), '{0}' keeps precedence",
                    registered.device.borrow().name(),
                    registered.addr_range,
                );
            }
        }

        debug!(
            "Bus ({0}) attached '{device_id}' on ${1:0>4X}-${2:0>4X}",
            self.id, addr_range.start, addr_range.end
        );
        self.devices.push(MappedDevice { device, addr_range });
        Ok(())
    }

    /// Copy `contents` to raw memory starting on `address`. Devices don't see
    /// this
    pub fn load(&mut self, address: u16, contents: &[u8]) -> Result<(), VmError> {
        self.ram.load(address, contents)?;
        debug!(
            "Bus ({0}) loaded {1} bytes at ${address:0>4X}",
            self.id,
            contents.len()
        );
        Ok(())
    }

    /// Read raw memory, bypassing any device
    pub fn peek(&self, address: u16) -> u8 {
        self.ram.read(address)
    }

    fn device_at(&self, address: u16) -> Option<&MappedDevice> {
        self.devices
            .iter()
            .find(|mapped| mapped.addr_range.contains(address))
    }
}

impl BusTrait for MemoryBus {
    fn read(&self, address: u16) -> u8 {
        let data = self
            .device_at(address)
            .and_then(|mapped| mapped.device.borrow().read(address))
            .unwrap_or_else(|| self.ram.read(address));

        debug!(
            "Bus ({0}) read from: {address:0>4X} <- {data:0>2X}",
            self.id
        );
        data
    }

    fn peek(&self, address: u16) -> u8 {
        MemoryBus::peek(self, address)
    }

    fn write(&mut self, address: u16, data: u8) -> Result<(), BusError> {
        debug!("Bus ({0}) write to: {address:0>4X} <- {data:0>2X}", self.id);

        self.ram.write(address, data);

        let Some(MappedDevice { device, .. }) = self.device_at(address) else {
            return Ok(());
        };

        let mut device = device.borrow_mut();
        let handled = device
            .write(address, data)
            .map_err(|error| BusError::DeviceWriteError {
                bus_id: self.id,
                device_id: device.name(),
                address,
                details: error.to_string(),
            })?;
        debug!(
            "Bus ({0}) device '{1}' handled write: {handled}",
            self.id,
            device.name()
        );
        Ok(())
    }
}
