use bitflags::bitflags;

bitflags! {
    /// Processor status flags. Only carry, zero and negative are touched by
    /// the implemented instructions
    #[derive(Default)]
    pub struct StatusFlags: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL = 1 << 3;
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusRegister {
    sr: StatusFlags,
}

impl StatusRegister {
    pub fn new() -> Self {
        Self {
            sr: StatusFlags::empty(),
        }
    }

    pub fn reset(&mut self) {
        self.sr = StatusFlags::empty();
    }

    pub fn get(&self, flag: StatusFlags) -> bool {
        self.sr.contains(flag)
    }

    pub fn set(&mut self, flag: StatusFlags) {
        self.sr.insert(flag);
    }

    pub fn clear(&mut self, flag: StatusFlags) {
        self.sr.remove(flag);
    }

    pub fn set_value(&mut self, flag: StatusFlags, condition: bool) {
        self.sr.set(flag, condition);
    }

    pub fn flags(&self) -> StatusFlags {
        self.sr
    }
}

impl From<u8> for StatusRegister {
    fn from(value: u8) -> Self {
        Self {
            sr: StatusFlags::from_bits_truncate(value),
        }
    }
}

impl From<StatusRegister> for u8 {
    fn from(value: StatusRegister) -> Self {
        value.sr.bits()
    }
}
