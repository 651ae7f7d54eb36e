use std::path::PathBuf;

use crate::hardware::{DEFAULT_ROM_PATH, PROGRAM_START};

/// VM configuration options
#[derive(Clone, Debug)]
pub struct MachineSettings {
    /// ROM image loaded by the host before starting the machine
    pub rom_path: PathBuf,

    /// Address where the ROM image is copied to
    pub load_address: u16,

    /// Value written into the reset vector. The CPU starts executing from
    /// here after a reset
    pub reset_vector: u16,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            rom_path: PathBuf::from(DEFAULT_ROM_PATH),
            load_address: PROGRAM_START,
            reset_vector: PROGRAM_START,
        }
    }
}
