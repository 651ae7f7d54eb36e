use std::cmp::Ordering;

use crate::processor::instruction::{
    AddressingMode, Instruction, InstructionKind, MiscInstructionKind, Opcode, PcUpdate,
};
use crate::processor::internal_cpu::InternalCpu;
use crate::processor::status_register::{StatusFlags, StatusRegister};

use AddressingMode::*;
use InstructionKind::*;
use MiscInstructionKind::*;
use PcUpdate::*;

macro_rules! instruction {
    ($opcode:expr, $name:expr, $kind:expr, $addr_mode:expr, $bytes:expr, $pc_update:expr) => {
        Instruction {
            opcode: $opcode,
            name: $name,
            instruction: $kind,
            addressing_mode: $addr_mode,
            bytes: $bytes,
            pc_update: $pc_update,
        }
    };
}

/// Look up the instruction for `opcode`. Opcodes outside the table are
/// unknown to the processor.
#[rustfmt::skip]
pub fn decode(opcode: Opcode) -> Option<Instruction> {
    let instruction = match opcode {
        0x00 => instruction!(0x00, "HALT", Misc(Halt), Implied, 1, Explicit),

        // Increments
        0xE8 => instruction!(0xE8, "INX", SingleByte(inx), Implied, 1, Increment),
        0xC8 => instruction!(0xC8, "INY", SingleByte(iny), Implied, 1, Increment),

        // Loads and stores
        0xA9 => instruction!(0xA9, "LDA", InternalExecOnMemoryData(lda), Immediate, 2, Increment),
        0xBD => instruction!(0xBD, "LDA", InternalExecOnMemoryData(lda), AbsoluteX, 3, SkipOperand),
        0xA2 => instruction!(0xA2, "LDX", InternalExecOnMemoryData(ldx), Immediate, 2, Increment),
        0xA0 => instruction!(0xA0, "LDY", InternalExecOnMemoryData(ldy), Immediate, 2, Increment),
        0x8D => instruction!(0x8D, "STA", StoreOp(sta), Absolute, 3, SkipOperand),

        // Comparisons
        0xE0 => instruction!(0xE0, "CPX", InternalExecOnMemoryData(cpx), Immediate, 2, Increment),
        0xC9 => instruction!(0xC9, "CMP", InternalExecOnMemoryData(cmp), Immediate, 2, Increment),

        // Jumps and branches
        0x4C => instruction!(0x4C, "JMP", Misc(Jump(jmp)), Absolute, 3, Explicit),
        0xD0 => instruction!(0xD0, "BNE", Misc(Branch(bne)), Relative, 2, Explicit),
        0xF0 => instruction!(0xF0, "BEQ", Misc(Branch(beq)), Relative, 2, Explicit),

        _ => return None,
    };
    Some(instruction)
}

// Increments

/// INX - Increment Index X by One
///
/// Operation:
/// X + 1 -> X
///
/// Status Register
/// N Z C I D V
/// - - - - - -
pub fn inx(cpu: &mut InternalCpu) {
    cpu.x_reg = cpu.x_reg.wrapping_add(1);
}

/// INY - Increment Index Y by One
///
/// Operation:
/// Y + 1 -> Y
///
/// Status Register
/// N Z C I D V
/// - - - - - -
pub fn iny(cpu: &mut InternalCpu) {
    cpu.y_reg = cpu.y_reg.wrapping_add(1);
}

// Loads and stores

/// LDA - Load Accumulator with Memory
///
/// Operation:
/// M -> A
///
/// Status Register
/// N Z C I D V
/// - - - - - -
pub fn lda(cpu: &mut InternalCpu, operand: u8) {
    cpu.acc = operand;
}

/// LDX - Load Index X with Memory
///
/// Operation:
/// M -> X
pub fn ldx(cpu: &mut InternalCpu, operand: u8) {
    cpu.x_reg = operand;
}

/// LDY - Load Index Y with Memory
///
/// Operation:
/// M -> Y
pub fn ldy(cpu: &mut InternalCpu, operand: u8) {
    cpu.y_reg = operand;
}

/// STA - Store Accumulator in Memory
///
/// Operation:
/// A -> M
pub fn sta(cpu: &InternalCpu) -> u8 {
    cpu.acc
}

// Comparisons

/// CMP - Compare Memory with Accumulator
///
/// Operation:
/// A - M
///
/// Status Register
/// N Z C I D V
/// * + + - - -
///
/// (*) negative is only cleared when A == M
pub fn cmp(cpu: &mut InternalCpu, operand: u8) {
    compare(&mut cpu.sr, cpu.acc, operand);
}

/// CPX - Compare Index X with Memory
///
/// Operation:
/// X - M
///
/// Status Register
/// N Z C I D V
/// * + + - - -
///
/// (*) negative is only cleared when X == M
pub fn cpx(cpu: &mut InternalCpu, operand: u8) {
    compare(&mut cpu.sr, cpu.x_reg, operand);
}

// Negative is left untouched unless both values are equal
fn compare(sr: &mut StatusRegister, register: u8, operand: u8) {
    match register.cmp(&operand) {
        Ordering::Less => {
            sr.clear(StatusFlags::ZERO);
            sr.clear(StatusFlags::CARRY);
        }
        Ordering::Greater => {
            sr.clear(StatusFlags::ZERO);
            sr.set(StatusFlags::CARRY);
        }
        Ordering::Equal => {
            sr.set(StatusFlags::ZERO);
            sr.set(StatusFlags::CARRY);
            sr.clear(StatusFlags::NEGATIVE);
        }
    }
}

// Jumps and branches

/// JMP - Jump to New Location
///
/// Operation:
/// (PC + 1) -> PCL
/// (PC + 2) -> PCH
pub fn jmp(cpu: &mut InternalCpu, address: u16) {
    cpu.pc = address;
}

/// BNE - Branch on Result not Zero
///
/// Operation:
/// branch on Z = 0
pub fn bne(cpu: &mut InternalCpu, offset: u8) {
    let condition = !cpu.sr.get(StatusFlags::ZERO);
    branch(cpu, condition, offset);
}

/// BEQ - Branch on Result Zero
///
/// Operation:
/// branch on Z = 1
pub fn beq(cpu: &mut InternalCpu, offset: u8) {
    let condition = cpu.sr.get(StatusFlags::ZERO);
    branch(cpu, condition, offset);
}

/// Move PC either past the branch instruction or to the relative target.
/// `cpu.pc` must point to the branch opcode.
fn branch(cpu: &mut InternalCpu, condition: bool, offset: u8) {
    let next = cpu.pc.wrapping_add(2);
    cpu.pc = if condition {
        branch_target(next, offset)
    } else {
        next
    };
}

/// Offset is a signed displacement relative to the instruction following the
/// branch
pub fn branch_target(next: u16, offset: u8) -> u16 {
    next.wrapping_add(offset as i8 as u16)
}
