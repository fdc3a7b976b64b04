mod exec;


use std::fmt;

use crate::config::CpuConfig;
use crate::error::CpuError;
use crate::flags::ConditionFlags;
use crate::io::IoHandlers;
use crate::memory::Memory;
use crate::regs::{Reg, RegisterPair, Registers};

/// Outcome of executing a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The instruction completed; the next `step` fetches at PC.
    Continued,
    /// HLT was executed. Further steps stay halted until `reset`.
    Halted,
    /// Execution hit a fatal condition.
    Failed(CpuError),
}

impl StepResult {
    pub fn is_continued(&self) -> bool {
        matches!(self, Self::Continued)
    }

    /// Convert into a `Result`, mapping `Halted` to `Ok(false)`.
    pub fn into_result(self) -> Result<bool, CpuError> {
        match self {
            Self::Continued => Ok(true),
            Self::Halted => Ok(false),
            Self::Failed(err) => Err(err),
        }
    }
}

/// Summary of a bounded [`Cpu8080::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions that completed, including a final HLT.
    pub executed: u64,
    /// Result of the last step taken.
    pub last: StepResult,
}

/// Intel 8080 interpreter state.
///
/// Owns registers, flags, memory and the I/O collaborators. Everything is
/// mutated only through [`Cpu8080::step`] apart from the documented setters
/// used to seed a boot state or drive tests.
pub struct Cpu8080 {
    regs: Registers,
    flags: ConditionFlags,
    memory: Memory,
    io: IoHandlers,
    config: CpuConfig,
    interrupts_enabled: bool,
    halted: bool,
}

impl Cpu8080 {
    /// Create a CPU with every register, flag and memory byte zeroed.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::builder().initial_sp(0).build())
    }

    /// Create a CPU booting with the PC/SP, memory size and I/O policy of `config`.
    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            regs: Registers {
                pc: config.initial_pc,
                sp: config.initial_sp,
                ..Registers::default()
            },
            flags: ConditionFlags::default(),
            memory: Memory::with_size(config.memory_size),
            io: IoHandlers::new(config.strict_io),
            config,
            interrupts_enabled: false,
            halted: false,
        }
    }

    /// Reset registers, flags and latches to their boot values.
    ///
    /// Memory contents and registered I/O handlers are preserved.
    pub fn reset(&mut self) {
        self.regs = Registers {
            pc: self.config.initial_pc,
            sp: self.config.initial_sp,
            ..Registers::default()
        };
        self.flags = ConditionFlags::default();
        self.interrupts_enabled = false;
        self.halted = false;
    }

    /// Copy a program image into memory at `at`.
    pub fn load_program(&mut self, bytes: &[u8], at: u16) -> Result<(), CpuError> {
        self.memory.load(bytes, at)?;
        log::info!("Loaded {} bytes at {:#06x}", bytes.len(), at);
        Ok(())
    }

    /// Register both I/O callbacks.
    pub fn set_io_handlers(
        &mut self,
        out: impl FnMut(u8, u8) + 'static,
        input: impl FnMut(u8) -> u8 + 'static,
    ) {
        self.io.set_out(Box::new(out));
        self.io.set_in(Box::new(input));
    }

    pub fn set_out_handler(&mut self, out: impl FnMut(u8, u8) + 'static) {
        self.io.set_out(Box::new(out));
    }

    pub fn set_in_handler(&mut self, input: impl FnMut(u8) -> u8 + 'static) {
        self.io.set_in(Box::new(input));
    }

    /// Execute exactly one instruction.
    pub fn step(&mut self) -> StepResult {
        if self.halted {
            return StepResult::Halted;
        }
        match self.execute_next() {
            Ok(result) => result,
            Err(err) => StepResult::Failed(err),
        }
    }

    /// Step until HLT, a failure, or `max_steps` instructions.
    pub fn run(&mut self, max_steps: u64) -> RunSummary {
        if self.halted {
            return RunSummary {
                executed: 0,
                last: StepResult::Halted,
            };
        }

        let mut executed = 0;
        let mut last = StepResult::Continued;
        while executed < max_steps {
            last = self.step();
            match last {
                StepResult::Continued => executed += 1,
                StepResult::Halted => {
                    executed += 1;
                    break;
                }
                StepResult::Failed(_) => break,
            }
        }
        RunSummary { executed, last }
    }

    fn execute_next(&mut self) -> Result<StepResult, CpuError> {
        let pc = self.regs.pc;
        let opcode = self.fetch_byte()?;
        log::trace!("{pc:04x}: {opcode:02x}");
        self.exec_opcode(opcode)
    }

    // Memory access helpers.

    #[inline]
    pub fn read_byte(&self, addr: u16) -> Result<u8, CpuError> {
        self.memory.read_byte(addr)
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), CpuError> {
        self.memory.write_byte(addr, value)
    }

    /// Byte at PC, advancing PC by one.
    fn fetch_byte(&mut self) -> Result<u8, CpuError> {
        let b = self.memory.read_byte(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(b)
    }

    /// Little-endian word at PC: the first byte fetched is the low byte.
    fn fetch_word(&mut self) -> Result<u16, CpuError> {
        let lo = self.fetch_byte()?;
        let hi = self.fetch_byte()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    fn read_word(&self, addr: u16) -> Result<u16, CpuError> {
        let lo = self.memory.read_byte(addr)?;
        let hi = self.memory.read_byte(addr.wrapping_add(1))?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    fn write_word(&mut self, addr: u16, value: u16) -> Result<(), CpuError> {
        let [lo, hi] = value.to_le_bytes();
        self.memory.write_byte(addr, lo)?;
        self.memory.write_byte(addr.wrapping_add(1), hi)
    }

    /// Read an 8-bit operand, resolving `M` through HL.
    fn read_reg(&self, reg: Reg) -> Result<u8, CpuError> {
        match self.regs.get(reg) {
            Some(value) => Ok(value),
            None => self.memory.read_byte(self.regs.hl()),
        }
    }

    fn write_reg(&mut self, reg: Reg, value: u8) -> Result<(), CpuError> {
        match reg {
            Reg::M => self.memory.write_byte(self.regs.hl(), value),
            _ => {
                self.regs.set(reg, value);
                Ok(())
            }
        }
    }

    // Stack helpers. The high byte goes to the higher address.

    fn push(&mut self, value: u16) -> Result<(), CpuError> {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write_byte(self.regs.sp, hi)?;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write_byte(self.regs.sp, lo)
    }

    fn pop(&mut self) -> Result<u16, CpuError> {
        let lo = self.memory.read_byte(self.regs.sp)?;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.memory.read_byte(self.regs.sp)?;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        Ok(u16::from_le_bytes([lo, hi]))
    }

    // Inspection.

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Direct register access for test harnesses and debugging shells.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn flags(&self) -> ConditionFlags {
        self.flags
    }

    /// Direct flag access for test harnesses and debugging shells.
    pub fn flags_mut(&mut self) -> &mut ConditionFlags {
        &mut self.flags
    }

    pub fn a(&self) -> u8 {
        self.regs.a
    }

    pub fn b(&self) -> u8 {
        self.regs.b
    }

    pub fn c(&self) -> u8 {
        self.regs.c
    }

    pub fn d(&self) -> u8 {
        self.regs.d
    }

    pub fn e(&self) -> u8 {
        self.regs.e
    }

    pub fn h(&self) -> u8 {
        self.regs.h
    }

    pub fn l(&self) -> u8 {
        self.regs.l
    }

    pub fn pair(&self, rp: RegisterPair) -> u16 {
        self.regs.pair(rp)
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    /// Seed the program counter, e.g. before the first step.
    pub fn set_pc(&mut self, pc: u16) {
        self.regs.pc = pc;
    }

    /// Seed the stack pointer, e.g. before the first step.
    pub fn set_sp(&mut self, sp: u16) {
        self.regs.sp = sp;
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }
}

impl Default for Cpu8080 {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-line register dump used in diagnostics.
impl fmt::Display for Cpu8080 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = self.flags;
        writeln!(
            f,
            "C={},P={},S={},Z={},AC={}",
            u8::from(flags.cy),
            u8::from(flags.p),
            u8::from(flags.s),
            u8::from(flags.z),
            u8::from(flags.ac),
        )?;
        let r = &self.regs;
        write!(
            f,
            "A ${:02x} B ${:02x} C ${:02x} D ${:02x} E ${:02x} H ${:02x} L ${:02x} SP {:04x} PC {:04x}",
            r.a, r.b, r.c, r.d, r.e, r.h, r.l, r.sp, r.pc
        )
    }
}

impl fmt::Debug for Cpu8080 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu8080")
            .field("regs", &self.regs)
            .field("flags", &self.flags)
            .field("interrupts_enabled", &self.interrupts_enabled)
            .field("halted", &self.halted)
            .field("io", &self.io)
            .finish()
    }
}
