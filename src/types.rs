use std::cell::RefCell;
use std::rc::Rc;

use crate::interfaces::{Bus, Device};
use crate::processor::bus::MemoryBus;

pub type SharedBus = Rc<RefCell<dyn Bus>>;
pub type SharedMemoryBus = Rc<RefCell<MemoryBus>>;
pub type SharedDevice = Rc<RefCell<dyn Device>>;
