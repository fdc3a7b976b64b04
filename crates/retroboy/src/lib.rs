use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use retroboy_8080::{Cpu8080, CpuConfig, StepResult, DEFAULT_PC, DEFAULT_SP};

/// Size of the combined Space Invaders ROM image (invaders.h/g/f/e).
pub const SPACE_INVADERS_ROM_SIZE: usize = 0x2000;

/// Instructions executed when no `--steps` is given.
pub const DEFAULT_STEPS: u64 = 8192;

/// How the driver boots and runs the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub steps: u64,
    pub load_addr: u16,
    pub pc: u16,
    pub sp: u16,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            load_addr: 0x0000,
            pc: DEFAULT_PC,
            sp: DEFAULT_SP,
        }
    }
}

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub executed: u64,
    pub halted: bool,
    pub pc: u16,
}

pub const USAGE: &str = "\
Usage: retroboy <rom-path> [--steps N] [--load-addr ADDR] [--pc ADDR] [--sp ADDR]

Numbers accept decimal or 0x-prefixed hex, for example:
    retroboy assets/roms/space_invaders/invaders.rom --steps 100000";

/// Parse the command line (without the program name).
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<(PathBuf, RunOptions)> {
    let mut args = args.into_iter();
    let mut rom_path = None;
    let mut options = RunOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--steps" => options.steps = flag_value(&mut args, &arg)?,
            "--load-addr" => options.load_addr = address(flag_value(&mut args, &arg)?, &arg)?,
            "--pc" => options.pc = address(flag_value(&mut args, &arg)?, &arg)?,
            "--sp" => options.sp = address(flag_value(&mut args, &arg)?, &arg)?,
            flag if flag.starts_with("--") => bail!("Unknown option '{flag}'\n\n{USAGE}"),
            path => {
                if rom_path.is_some() {
                    bail!("Unexpected extra argument '{path}'\n\n{USAGE}");
                }
                rom_path = Some(PathBuf::from(path));
            }
        }
    }

    let rom_path = rom_path.ok_or_else(|| anyhow!("No ROM path provided.\n\n{USAGE}"))?;
    Ok((rom_path, options))
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<u64> {
    let raw = args
        .next()
        .ok_or_else(|| anyhow!("Missing value for '{flag}'"))?;
    parse_number(&raw).with_context(|| format!("Invalid value for '{flag}'"))
}

fn address(value: u64, flag: &str) -> Result<u16> {
    u16::try_from(value).map_err(|_| anyhow!("'{flag}' must fit in 16 bits, got {value:#x}"))
}

/// Decimal or `0x`-prefixed hexadecimal.
pub fn parse_number(raw: &str) -> Result<u64> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.with_context(|| format!("'{raw}' is not a number"))
}

/// Boot `rom` and step it until HLT or the step budget runs out.
///
/// A fatal CPU error is returned with the register dump attached.
pub fn run(rom: &[u8], options: &RunOptions) -> Result<RunReport> {
    if rom.len() != SPACE_INVADERS_ROM_SIZE {
        log::warn!(
            "ROM size is {} bytes, Space Invaders expects {}",
            rom.len(),
            SPACE_INVADERS_ROM_SIZE
        );
    }

    let config = CpuConfig::builder()
        .initial_pc(options.pc)
        .initial_sp(options.sp)
        .build();
    let mut cpu = Cpu8080::with_config(config);
    cpu.load_program(rom, options.load_addr)
        .context("ROM does not fit in memory")?;

    let summary = cpu.run(options.steps);
    match summary.last {
        StepResult::Failed(err) => {
            log::error!("CPU stopped after {} instructions: {err}", summary.executed);
            Err(anyhow!(err).context(format!(
                "emulation failed after {} instructions\n{cpu}",
                summary.executed
            )))
        }
        StepResult::Halted | StepResult::Continued => {
            log::info!("Executed {} instructions", summary.executed);
            log::debug!("Final state:\n{cpu}");
            Ok(RunReport {
                executed: summary.executed,
                halted: summary.last == StepResult::Halted,
                pc: cpu.pc(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_rom_path_with_defaults() {
        let (path, options) = parse_args(args(&["invaders.rom"])).unwrap();
        assert_eq!(path, PathBuf::from("invaders.rom"));
        assert_eq!(options, RunOptions::default());
        assert_eq!(options.sp, 0x2400);
    }

    #[test]
    fn parses_all_options() {
        let (_, options) = parse_args(args(&[
            "--steps",
            "1000",
            "game.bin",
            "--load-addr",
            "0x100",
            "--pc",
            "0x0100",
            "--sp",
            "0xF000",
        ]))
        .unwrap();
        assert_eq!(
            options,
            RunOptions {
                steps: 1000,
                load_addr: 0x100,
                pc: 0x100,
                sp: 0xf000,
            }
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["a.rom", "b.rom"])).is_err());
        assert!(parse_args(args(&["a.rom", "--frames", "3"])).is_err());
        assert!(parse_args(args(&["a.rom", "--steps"])).is_err());
        assert!(parse_args(args(&["a.rom", "--pc", "0x10000"])).is_err());
        assert!(parse_args(args(&["a.rom", "--sp", "banana"])).is_err());
    }

    #[test]
    fn numbers_accept_decimal_and_hex() {
        assert_eq!(parse_number("8192").unwrap(), 8192);
        assert_eq!(parse_number("0x2400").unwrap(), 0x2400);
        assert_eq!(parse_number("0XFF").unwrap(), 0xff);
        assert!(parse_number("0x").is_err());
    }

    #[test]
    fn run_reports_halt() {
        // MVI A,1 ; HLT
        let report = run(&[0x3e, 0x01, 0x76], &RunOptions::default()).unwrap();
        assert_eq!(
            report,
            RunReport {
                executed: 2,
                halted: true,
                pc: 3,
            }
        );
    }

    #[test]
    fn run_stops_at_step_budget() {
        // JMP 0000
        let options = RunOptions {
            steps: 5,
            ..RunOptions::default()
        };
        let report = run(&[0xc3, 0x00, 0x00], &options).unwrap();
        assert_eq!(report.executed, 5);
        assert!(!report.halted);
    }

    #[test]
    fn run_surfaces_cpu_failures() {
        let err = run(&[0x00, 0x08], &RunOptions::default()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("unimplemented opcode 0x08 at 0x0001"), "{message}");
        assert!(message.contains("SP 2400"), "{message}");
    }
}
