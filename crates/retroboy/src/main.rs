use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let (rom_path, options) = retroboy::parse_args(std::env::args().skip(1))?;

    log::info!("Playing ROM path: '{}'", rom_path.display());
    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("Failed to read ROM file '{}'", rom_path.display()))?;

    let report = retroboy::run(&rom, &options)?;
    if report.halted {
        println!(
            "Halted after {} instructions at {:#06x}",
            report.executed, report.pc
        );
    } else {
        println!(
            "Emulated {} instructions, stopped at {:#06x}",
            report.executed, report.pc
        );
    }
    Ok(())
}
