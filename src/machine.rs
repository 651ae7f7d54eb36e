//! Virtual machine abstraction.
//!
//! This module wires the processor to the memory bus. To use it, create a
//! `Machine` with the devices to map, load a ROM image and `run` it (or `step`
//! it one instruction at a time) until the program halts.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::errors::VmError;
use crate::hardware::RESET_VECTOR_LOW;
use crate::processor::bus::MemoryBus;
use crate::processor::cpu::{Cpu, CpuState};
use crate::processor::internal_cpu::InternalCpu;
use crate::rom::Rom;
use crate::settings::MachineSettings;
use crate::types::{SharedDevice, SharedMemoryBus};
use crate::utils;

pub struct Machine {
    cpu: Cpu,
    bus: SharedMemoryBus,
}

impl Machine {
    /// Build a machine and leave it ready to execute from `reset_vector`.
    ///
    /// Devices are mapped first, in the given order, then the reset vector is
    /// written and the CPU reset.
    pub fn new(reset_vector: u16, devices: Vec<SharedDevice>) -> Result<Self, VmError> {
        let bus = Rc::new(RefCell::new(MemoryBus::new("main")));

        for device in devices {
            bus.borrow_mut().attach(device)?;
        }

        let bus_ptr = Rc::clone(&bus);
        let cpu = Cpu::new(bus_ptr);

        let mut machine = Self { cpu, bus };
        machine.set_reset_vector(reset_vector)?;
        machine.cpu.reset();

        info!("Machine ready, reset vector ${reset_vector:0>4X}");
        Ok(machine)
    }

    pub fn from_settings(
        settings: &MachineSettings,
        devices: Vec<SharedDevice>,
    ) -> Result<Self, VmError> {
        Self::new(settings.reset_vector, devices)
    }

    /// Copy `rom` bytes to memory starting on `address`
    pub fn load_rom(&mut self, address: u16, rom: &[u8]) -> Result<(), VmError> {
        self.bus.borrow_mut().load(address, rom)?;
        info!("ROM loaded at ${address:0>4X}, {} bytes", rom.len());
        Ok(())
    }

    pub fn insert_rom(&mut self, address: u16, rom: &Rom) -> Result<(), VmError> {
        info!("ROM inserted: {rom}");
        self.load_rom(address, rom.bytes())
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<CpuState, VmError> {
        self.cpu.execute()
    }

    /// Blocking run until the program halts or fails
    pub fn run(&mut self) -> Result<(), VmError> {
        info!("Machine running");

        loop {
            if self.step()? == CpuState::Halted {
                info!(
                    "Machine halted after {} instructions",
                    self.cpu.instructions_executed()
                );
                return Ok(());
            }
        }
    }

    pub fn cpu(&self) -> &InternalCpu {
        self.cpu.registers()
    }

    pub fn instructions_executed(&self) -> u64 {
        self.cpu.instructions_executed()
    }

    /// Read raw memory, devices don't see it
    pub fn peek(&self, address: u16) -> u8 {
        self.bus.borrow().peek(address)
    }

    fn set_reset_vector(&mut self, address: u16) -> Result<(), VmError> {
        self.bus
            .borrow_mut()
            .load(RESET_VECTOR_LOW, &utils::le_bytes(address))
    }
}
