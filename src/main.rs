use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use log::error;

use vmtest::{CharacterOutput, Machine, MachineSettings, Rom, SharedDevice};

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        error!("{error:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let settings = MachineSettings::default();

    let output: SharedDevice = Rc::new(RefCell::new(CharacterOutput::stdout()));
    let mut machine =
        Machine::from_settings(&settings, vec![output]).context("machine setup failed")?;

    let rom = Rom::from_file(&settings.rom_path).context("can't load ROM")?;
    machine
        .insert_rom(settings.load_address, &rom)
        .with_context(|| format!("can't insert ROM {rom}"))?;

    machine.run().context("machine stopped")?;
    Ok(())
}
