use crate::processor::internal_cpu::InternalCpu;

pub type Opcode = u8;

#[derive(Clone, Copy)]
pub struct Instruction {
    pub opcode: Opcode,
    pub name: &'static str,
    pub instruction: InstructionKind,
    pub addressing_mode: AddressingMode,
    pub bytes: u8,
    pub pc_update: PcUpdate,
}

#[derive(Clone, Copy)]
pub enum InstructionKind {
    SingleByte(fn(&mut InternalCpu)),
    InternalExecOnMemoryData(fn(&mut InternalCpu, u8)),
    StoreOp(fn(&InternalCpu) -> u8),
    Misc(MiscInstructionKind),
}

#[derive(Clone, Copy)]
pub enum MiscInstructionKind {
    Jump(fn(&mut InternalCpu, u16)),
    Branch(fn(&mut InternalCpu, u8)),
    Halt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,   // Implied Addressing
    Immediate, // Immediate Addressing
    Absolute,  // Absoulute Addressing
    AbsoluteX, // Absoulute Indexed Addressing (X)
    Relative,  // Relative Addressing (branch operations)
}

/// How an instruction moves the program counter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PcUpdate {
    /// PC moves past the instruction once it has executed
    Increment,
    /// PC moves past the operand before memory is accessed
    SkipOperand,
    /// The instruction sets the PC on its own
    Explicit,
}
