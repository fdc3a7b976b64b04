use crate::cpu::Cpu8080;
use crate::error::CpuError;
use crate::flags::ConditionFlags;

/// Branch condition encoded in bits 3-5 of Jcc/Ccc/Rcc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Condition {
    NotZero,
    Zero,
    NoCarry,
    Carry,
    ParityOdd,
    ParityEven,
    Plus,
    Minus,
}

impl Condition {
    fn from_opcode(opcode: u8) -> Self {
        match (opcode >> 3) & 0x07 {
            0 => Self::NotZero,
            1 => Self::Zero,
            2 => Self::NoCarry,
            3 => Self::Carry,
            4 => Self::ParityOdd,
            5 => Self::ParityEven,
            6 => Self::Plus,
            _ => Self::Minus,
        }
    }

    fn holds(self, flags: &ConditionFlags) -> bool {
        match self {
            Self::NotZero => !flags.z,
            Self::Zero => flags.z,
            Self::NoCarry => !flags.cy,
            Self::Carry => flags.cy,
            Self::ParityOdd => !flags.p,
            Self::ParityEven => flags.p,
            Self::Plus => !flags.s,
            Self::Minus => flags.s,
        }
    }
}

impl Cpu8080 {
    pub(super) fn exec_jmp(&mut self) -> Result<(), CpuError> {
        self.regs.pc = self.fetch_word()?;
        Ok(())
    }

    /// The address is always consumed, so a not-taken jump falls through to
    /// the next instruction.
    pub(super) fn exec_jmp_cc(&mut self, opcode: u8) -> Result<(), CpuError> {
        let addr = self.fetch_word()?;
        if Condition::from_opcode(opcode).holds(&self.flags) {
            self.regs.pc = addr;
        }
        Ok(())
    }

    /// Pushes the address of the instruction after the CALL.
    pub(super) fn exec_call(&mut self) -> Result<(), CpuError> {
        let addr = self.fetch_word()?;
        self.call(addr)
    }

    pub(super) fn exec_call_cc(&mut self, opcode: u8) -> Result<(), CpuError> {
        let addr = self.fetch_word()?;
        if Condition::from_opcode(opcode).holds(&self.flags) {
            self.call(addr)?;
        }
        Ok(())
    }

    pub(super) fn exec_ret(&mut self) -> Result<(), CpuError> {
        self.regs.pc = self.pop()?;
        Ok(())
    }

    pub(super) fn exec_ret_cc(&mut self, opcode: u8) -> Result<(), CpuError> {
        if Condition::from_opcode(opcode).holds(&self.flags) {
            self.regs.pc = self.pop()?;
        }
        Ok(())
    }

    /// RST n: call to 8 * n.
    pub(super) fn exec_rst(&mut self, opcode: u8) -> Result<(), CpuError> {
        self.call((opcode & 0x38) as u16)
    }

    pub(super) fn exec_pchl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    fn call(&mut self, addr: u16) -> Result<(), CpuError> {
        self.push(self.regs.pc)?;
        self.regs.pc = addr;
        Ok(())
    }
}
