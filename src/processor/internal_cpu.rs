use crate::processor::status_register::StatusRegister;

/// Processor registers
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InternalCpu {
    pub acc: u8,   // Accumulator
    pub x_reg: u8, // X register
    pub y_reg: u8, // Y register
    pub sp: u8,    // Stack Pointer (no instruction uses it yet)
    pub pc: u16,   // Program Counter
    pub sr: StatusRegister,
}
