
use log::{debug, info};

use crate::errors::VmError;
use crate::hardware::{RESET_VECTOR_HIGH, RESET_VECTOR_LOW};
use crate::types::SharedBus;
use crate::utils;

use super::instruction::{
    AddressingMode, Instruction, InstructionKind, MiscInstructionKind, PcUpdate,
};
use super::instruction_set;
use super::internal_cpu::InternalCpu;

use AddressingMode::*;
use InstructionKind::*;
use MiscInstructionKind::*;

/// Processor emulator.
///
/// CPU abstraction is connected to a `Bus` to perform read and write
/// operations on it. Each call to `execute` runs a whole instruction.
pub struct Cpu {
    cpu: InternalCpu,
    bus: SharedBus,
    instructions_executed: u64,
}

/// Outcome of executing one instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    Running,
    Halted,
}

impl Cpu {
    /// Create a new CPU connected to `bus`. Registers start zeroed, `reset`
    /// must be called once the reset vector is in place.
    pub fn new(bus: SharedBus) -> Self {
        Self {
            cpu: InternalCpu::default(),
            bus,
            instructions_executed: 0,
        }
    }

    /// Load the program counter from the reset vector. The vector lives in
    /// raw memory, devices mapped over it are ignored
    pub fn reset(&mut self) {
        let (low, high) = {
            let bus = self.bus.borrow();
            (bus.peek(RESET_VECTOR_LOW), bus.peek(RESET_VECTOR_HIGH))
        };
        self.cpu.pc = utils::word(low, high);
        info!("CPU reset, starting at ${:0>4X}", self.cpu.pc);
    }

    /// Fetch the instruction pointed by the program counter from
    /// memory and execute it atomically.
    ///
    /// Unknown opcodes leave the processor untouched.
    pub fn execute(&mut self) -> Result<CpuState, VmError> {
        let address = self.cpu.pc;
        let opcode = self.memory_read(address);
        let instruction =
            instruction_set::decode(opcode).ok_or(VmError::UnknownOpcode { opcode, address })?;

        debug!(
            "CPU ${address:0>4X}: {0} (${1:0>2X}) A:{2:0>2X} X:{3:0>2X} Y:{4:0>2X} SR:{5:0>8b}",
            instruction.name,
            instruction.opcode,
            self.cpu.acc,
            self.cpu.x_reg,
            self.cpu.y_reg,
            u8::from(self.cpu.sr),
        );

        let state = self.exec(instruction)?;
        self.instructions_executed += 1;
        Ok(state)
    }

    pub fn registers(&self) -> &InternalCpu {
        &self.cpu
    }

    pub fn instructions_executed(&self) -> u64 {
        self.instructions_executed
    }

    fn memory_read(&self, address: u16) -> u8 {
        self.bus.borrow().read(address)
    }

    fn memory_write(&self, address: u16, data: u8) -> Result<(), VmError> {
        self.bus.borrow_mut().write(address, data)?;
        Ok(())
    }

    fn exec(&mut self, instruction: Instruction) -> Result<CpuState, VmError> {
        let Instruction {
            instruction,
            addressing_mode,
            bytes,
            pc_update,
            ..
        } = instruction;

        let pc = self.cpu.pc;
        let next = pc.wrapping_add(bytes as u16);

        if pc_update == PcUpdate::SkipOperand {
            self.cpu.pc = next;
        }

        match instruction {
            SingleByte(fun) => {
                fun(&mut self.cpu);
            }
            InternalExecOnMemoryData(fun) => {
                let (_, data) = self.load(pc, addressing_mode);
                fun(&mut self.cpu, data);
            }
            StoreOp(fun) => {
                let address = self.operand_address(pc, addressing_mode);
                let data = fun(&self.cpu);
                self.memory_write(address, data)?;
            }
            Misc(t) => match t {
                Jump(fun) => {
                    let address = self.operand_address(pc, addressing_mode);
                    fun(&mut self.cpu, address);
                }
                Branch(fun) => {
                    let (_, offset) = self.load(pc, addressing_mode);
                    fun(&mut self.cpu, offset);
                }
                Halt => {
                    info!("CPU halted at ${pc:0>4X}");
                    return Ok(CpuState::Halted);
                }
            },
        }

        if pc_update == PcUpdate::Increment {
            self.cpu.pc = next;
        }

        Ok(CpuState::Running)
    }

    /// Resolve the effective address of the operand of the instruction at
    /// `pc`
    fn operand_address(&self, pc: u16, addr_mode: AddressingMode) -> u16 {
        match addr_mode {
            // no operand
            Implied => pc,
            Immediate | Relative => pc.wrapping_add(1),
            Absolute => {
                // Effective address is ADH, ADL
                let adl = self.memory_read(pc.wrapping_add(1));
                let adh = self.memory_read(pc.wrapping_add(2));
                utils::word(adl, adh)
            }
            AbsoluteX => {
                let bal = self.memory_read(pc.wrapping_add(1));
                let bah = self.memory_read(pc.wrapping_add(2));
                utils::word(bal, bah).wrapping_add(self.cpu.x_reg as u16)
            }
        }
    }

    fn load(&self, pc: u16, addr_mode: AddressingMode) -> (u16, u8) {
        let addr = self.operand_address(pc, addr_mode);
        let data = self.memory_read(addr);
        (addr, data)
    }
}
