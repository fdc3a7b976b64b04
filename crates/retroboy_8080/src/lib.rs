//! Intel 8080 interpreter core.
//!
//! The CPU owns its registers, flags and a flat memory buffer. A host drives
//! it one instruction at a time with [`Cpu8080::step`] and wires the IN/OUT
//! instructions to its own hardware through callbacks.
//!
//! ```
//! use retroboy_8080::{Cpu8080, CpuConfig, StepResult};
//!
//! // MVI A,0x41 ; OUT 1 ; HLT
//! let program = [0x3e, 0x41, 0xd3, 0x01, 0x76];
//!
//! let mut cpu = Cpu8080::with_config(CpuConfig::default());
//! cpu.load_program(&program, 0x0000).unwrap();
//! cpu.set_out_handler(|port, value| println!("OUT {port}: {value:#04x}"));
//!
//! let summary = cpu.run(100);
//! assert_eq!(summary.last, StepResult::Halted);
//! assert_eq!(summary.executed, 3);
//! assert_eq!(cpu.a(), 0x41);
//! ```

pub mod config;
pub mod cpu;
pub mod error;
pub mod flags;
pub mod io;
pub mod memory;
pub mod regs;

pub use config::{CpuConfig, DEFAULT_PC, DEFAULT_SP};
pub use cpu::{Cpu8080, RunSummary, StepResult};
pub use error::CpuError;
pub use flags::{ConditionFlags, FlagMask};
pub use memory::{Memory, MEMORY_SIZE};
pub use regs::{Reg, RegisterPair, Registers};
