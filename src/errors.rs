//! VM errors
//!
//! All errors the virtual machine can produce

use std::path::PathBuf;

use thiserror::Error;

/// VM error type
///
/// All VM errors are encapsuled inside this error type
#[derive(Debug, Error)]
pub enum VmError {
    #[error("Unknown opcode ${opcode:0>2X} at address ${address:0>4X}")]
    UnknownOpcode { opcode: u8, address: u16 },

    #[error(
        "Load out of bounds, {len} bytes starting at ${address:0>4X} don't fit in a 64 kB address space"
    )]
    LoadOutOfBounds { address: u16, len: usize },

    #[error("Bus error: {details}")]
    BusError {
        details: String,
        #[source]
        source: BusError,
    },

    #[error("ROM error: {details}")]
    RomError {
        details: String,
        #[source]
        source: RomError,
    },
}

/// Bus errors
#[derive(Debug, Error)]
pub enum BusError {
    #[error("Device '{device_id}' claims an invalid address range ${start:0>4X}-${end:0>4X}")]
    InvalidAddressRange {
        device_id: &'static str,
        start: u16,
        end: u16,
    },

    #[error("Bus '{bus_id}' failed while writting to device '{device_id}' on address ${address:0>4X}: {details}")]
    DeviceWriteError {
        bus_id: &'static str,
        device_id: &'static str,
        address: u16,
        details: String,
    },
}

/// Memory-mapped device errors
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("device I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// ROM image errors
#[derive(Debug, Error)]
pub enum RomError {
    #[error("can't read ROM file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<RomError> for VmError {
    fn from(source: RomError) -> Self {
        VmError::RomError {
            details: source.to_string(),
            source,
        }
    }
}

impl From<BusError> for VmError {
    fn from(source: BusError) -> Self {
        VmError::BusError {
            details: source.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_opcode_message() {
        let error = VmError::UnknownOpcode {
            opcode: 0x02,
            address: 0x8000,
        };
        assert_eq!(error.to_string(), "Unknown opcode $02 at address $8000");
    }

    #[test]
    fn test_bus_error_keeps_source() {
        let error: VmError = BusError::InvalidAddressRange {
            device_id: "test",
            start: 0x10,
            end: 0x01,
        }
        .into();

        assert!(matches!(
            error,
            VmError::BusError {
                source: BusError::InvalidAddressRange { .. },
                ..
            }
        ));
        assert!(std::error::Error::source(&error).is_some());
    }
}
