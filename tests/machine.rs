use std::cell::RefCell;
use std::rc::Rc;

use vmtest::{
    AddressRange, CharacterOutput, CpuState, Device, DeviceError, Machine, SharedDevice,
    StatusFlags, VmError, CHARACTER_OUTPUT, PROGRAM_START,
};

type SharedOutput = Rc<RefCell<CharacterOutput<Vec<u8>>>>;

fn machine_with_output(program: &[u8]) -> (Machine, SharedOutput) {
    let output = Rc::new(RefCell::new(CharacterOutput::new(Vec::new())));
    let device: SharedDevice = output.clone();

    let mut machine = Machine::new(PROGRAM_START, vec![device]).unwrap();
    machine.load_rom(PROGRAM_START, program).unwrap();

    (machine, output)
}

#[test]
fn test_print_single_character() {
    // LDA #'A'; STA $C000; HALT
    let (mut machine, output) =
        machine_with_output(&[0xA9, 0x41, 0x8D, 0x00, 0xC0, 0x00]);

    machine.run().unwrap();

    assert_eq!(output.borrow().writer().as_slice(), &[0x41]);
    assert_eq!(machine.peek(CHARACTER_OUTPUT), 0x41);
    assert_eq!(machine.instructions_executed(), 3);
}

#[test]
fn test_counting_loop_halts_without_output() {
    // LDX #$03
    // loop: INX
    //       CPX #$05
    //       BNE loop
    // HALT
    let (mut machine, output) =
        machine_with_output(&[0xA2, 0x03, 0xE8, 0xE0, 0x05, 0xD0, 0xFB, 0x00]);

    machine.run().unwrap();

    assert_eq!(machine.cpu().x_reg, 0x05);
    assert!(machine.cpu().sr.get(StatusFlags::ZERO));
    assert!(machine.cpu().sr.get(StatusFlags::CARRY));
    assert_eq!(machine.cpu().pc, 0x8007);
    assert!(output.borrow().writer().is_empty());
}

#[test]
fn test_print_string_with_indexed_load() {
    // LDX #$00
    // loop: LDA message,X
    //       CMP #$00
    //       BEQ done
    //       STA $C000
    //       INX
    //       JMP loop
    // done: HALT
    // message: "Hello\n\0"
    let mut program = vec![
        0xA2, 0x00, // $8000 LDX #$00
        0xBD, 0x12, 0x80, // $8002 LDA $8012,X
        0xC9, 0x00, // $8005 CMP #$00
        0xF0, 0x07, // $8007 BEQ $8010
        0x8D, 0x00, 0xC0, // $8009 STA $C000
        0xE8, // $800C INX
        0x4C, 0x02, 0x80, // $800D JMP $8002
        0x00, // $8010 HALT
        0x00, // $8011 padding
    ];
    program.extend_from_slice(b"Hello\n\0");
    let (mut machine, output) = machine_with_output(&program);

    machine.run().unwrap();

    assert_eq!(output.borrow().writer().as_slice(), b"Hello\n");
    assert_eq!(machine.cpu().x_reg, 6);
    assert_eq!(machine.cpu().pc, 0x8010);
}

#[test]
fn test_every_output_write_reaches_device() {
    // LDA #'x'; STA $C000; STA $C000; LDY #'y'; INY; HALT
    let (mut machine, output) = machine_with_output(&[
        0xA9, b'x', 0x8D, 0x00, 0xC0, 0x8D, 0x00, 0xC0, 0xA0, b'y', 0xC8, 0x00,
    ]);

    machine.run().unwrap();

    assert_eq!(output.borrow().writer().as_slice(), b"xx");
    assert_eq!(machine.cpu().y_reg, b'z');
}

#[test]
fn test_first_step_runs_reset_vector_target() {
    let (mut machine, _output) = machine_with_output(&[0xE8]);

    assert_eq!(machine.cpu().pc, 0x8000);
    assert_eq!(machine.step().unwrap(), CpuState::Running);
    assert_eq!(machine.cpu().x_reg, 1);
}

#[test]
fn test_step_after_halt() {
    let (mut machine, _output) = machine_with_output(&[0x00]);

    assert_eq!(machine.step().unwrap(), CpuState::Halted);
    assert_eq!(machine.step().unwrap(), CpuState::Halted);
    assert_eq!(machine.cpu().pc, 0x8000);
}

#[test]
fn test_unknown_opcode_stops_machine() {
    let (mut machine, output) = machine_with_output(&[0xA9, 0x41, 0x8D, 0x00, 0xC0, 0x02]);

    let error = machine.run().unwrap_err();

    assert!(matches!(
        error,
        VmError::UnknownOpcode {
            opcode: 0x02,
            address: 0x8005
        }
    ));
    assert_eq!(output.borrow().writer().as_slice(), b"A");
}

#[test]
fn test_several_machines_are_independent() {
    let (mut halting, _) = machine_with_output(&[0x00]);
    let (mut counting, _) = machine_with_output(&[0xE8, 0xE8, 0x00]);

    halting.run().unwrap();
    counting.run().unwrap();

    assert_eq!(halting.cpu().x_reg, 0);
    assert_eq!(counting.cpu().x_reg, 2);
}

#[test]
fn test_rom_past_end_of_memory() {
    let mut machine = Machine::new(PROGRAM_START, vec![]).unwrap();

    let result = machine.load_rom(0xFF00, &[0xEA; 0x101]);

    assert!(matches!(
        result,
        Err(VmError::LoadOutOfBounds {
            address: 0xFF00,
            len: 0x101
        })
    ));
}

/// Device answering reads with a fixed value
struct ConstantDevice {
    range: AddressRange,
    value: u8,
}

impl Device for ConstantDevice {
    fn name(&self) -> &'static str {
        "Constant"
    }

    fn address_range(&self) -> AddressRange {
        self.range
    }

    fn read(&self, _address: u16) -> Option<u8> {
        Some(self.value)
    }

    fn write(&mut self, _address: u16, _data: u8) -> Result<bool, DeviceError> {
        Ok(true)
    }
}

#[test]
fn test_program_reads_from_device() {
    let first: SharedDevice = Rc::new(RefCell::new(ConstantDevice {
        range: AddressRange::new(0x4000, 0x40FF),
        value: 0x11,
    }));
    let second: SharedDevice = Rc::new(RefCell::new(ConstantDevice {
        range: AddressRange::new(0x4000, 0x4000),
        value: 0x22,
    }));
    let mut machine = Machine::new(PROGRAM_START, vec![first, second]).unwrap();
    // LDX #$00; LDA $4000,X; HALT
    machine
        .load_rom(PROGRAM_START, &[0xA2, 0x00, 0xBD, 0x00, 0x40, 0x00])
        .unwrap();

    machine.run().unwrap();

    // first attached device wins
    assert_eq!(machine.cpu().acc, 0x11);
}

#[test]
fn test_invalid_device_range() {
    let inverted: SharedDevice = Rc::new(RefCell::new(ConstantDevice {
        range: AddressRange::new(0x5000, 0x4000),
        value: 0,
    }));

    let result = Machine::new(PROGRAM_START, vec![inverted]);

    assert!(matches!(result, Err(VmError::BusError { .. })));
}

#[test]
fn test_reset_vector_ignores_devices() {
    let everything: SharedDevice = Rc::new(RefCell::new(ConstantDevice {
        range: AddressRange::new(0x0000, 0xFFFF),
        value: 0xEE,
    }));

    let machine = Machine::new(PROGRAM_START, vec![everything]).unwrap();

    assert_eq!(machine.peek(0xFFFC), 0x00);
    assert_eq!(machine.peek(0xFFFD), 0x80);
    assert_eq!(machine.cpu().pc, PROGRAM_START);
}
