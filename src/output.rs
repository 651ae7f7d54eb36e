use std::io::{self, Stdout, Write};

use crate::errors::DeviceError;
use crate::hardware::CHARACTER_OUTPUT;
use crate::interfaces::{AddressRange, Device};

/// Character output sink mapped on a single address. Every byte written there
/// is forwarded to `W`.
pub struct CharacterOutput<W: Write> {
    writer: W,
}

impl CharacterOutput<Stdout> {
    /// Output device writing to the process standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CharacterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Device for CharacterOutput<W> {
    fn name(&self) -> &'static str {
        "Character output"
    }

    fn address_range(&self) -> AddressRange {
        AddressRange::single(CHARACTER_OUTPUT)
    }

    fn read(&self, _address: u16) -> Option<u8> {
        None
    }

    fn write(&mut self, address: u16, data: u8) -> Result<bool, DeviceError> {
        if address != CHARACTER_OUTPUT {
            return Ok(false);
        }

        self.writer.write_all(&[data])?;
        self.writer.flush()?;
        Ok(true)
    }
}
