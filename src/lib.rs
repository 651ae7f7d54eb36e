//! Tiny 6502-like virtual machine

mod errors;
mod hardware;
mod interfaces;
mod machine;
mod output;
mod processor;
mod rom;
mod settings;
mod types;
mod utils;

pub use errors::{BusError, DeviceError, RomError, VmError};
pub use hardware::{CHARACTER_OUTPUT, PROGRAM_START, RESET_VECTOR_HIGH, RESET_VECTOR_LOW};
pub use interfaces::{AddressRange, Bus, Device};
pub use machine::Machine;
pub use output::CharacterOutput;
pub use processor::cpu::CpuState;
pub use processor::internal_cpu::InternalCpu;
pub use processor::status_register::{StatusFlags, StatusRegister};
pub use rom::Rom;
pub use settings::MachineSettings;
pub use types::SharedDevice;
