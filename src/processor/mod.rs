pub mod bus;
pub mod cpu;
pub mod memory;


pub mod instruction;
pub mod instruction_set;
pub mod internal_cpu;
pub mod status_register;
