//! VM hardware constants

// Address space
// -------------
//
// Single flat 16-bit address space. RAM backs every address and devices can be
// mapped on top of it.

pub const MEMORY_SIZE: usize = 64 * 1024; // 64 kB RAM

// Reset vector - little endian pointer to the first instruction
pub const RESET_VECTOR_LOW: u16 = 0xFFFC;
pub const RESET_VECTOR_HIGH: u16 = 0xFFFD;

// Programs are loaded and started here by convention
pub const PROGRAM_START: u16 = 0x8000;

// Character output device
pub const CHARACTER_OUTPUT: u16 = 0xC000;

// Default ROM image read by the host
pub const DEFAULT_ROM_PATH: &str = "test.rom";
