//! Data transfer group. None of these touch the flags.

use crate::cpu::Cpu8080;
use crate::error::CpuError;
use crate::regs::{Reg, RegisterPair};

impl Cpu8080 {
    pub(super) fn exec_mov(&mut self, opcode: u8) -> Result<(), CpuError> {
        debug_assert!((0x40..=0x7f).contains(&opcode) && opcode != 0x76);

        let value = self.read_reg(Reg::src(opcode))?;
        self.write_reg(Reg::dst(opcode), value)
    }

    pub(super) fn exec_mvi(&mut self, opcode: u8) -> Result<(), CpuError> {
        let value = self.fetch_byte()?;
        self.write_reg(Reg::dst(opcode), value)
    }

    pub(super) fn exec_lxi(&mut self, opcode: u8) -> Result<(), CpuError> {
        let value = self.fetch_word()?;
        self.regs.set_pair(RegisterPair::from_opcode(opcode), value);
        Ok(())
    }

    /// STAX B / STAX D
    pub(super) fn exec_stax(&mut self, opcode: u8) -> Result<(), CpuError> {
        debug_assert!(matches!(opcode, 0x02 | 0x12));

        let addr = self.regs.pair(RegisterPair::from_opcode(opcode));
        self.memory.write_byte(addr, self.regs.a)
    }

    /// LDAX B / LDAX D
    pub(super) fn exec_ldax(&mut self, opcode: u8) -> Result<(), CpuError> {
        debug_assert!(matches!(opcode, 0x0a | 0x1a));

        let addr = self.regs.pair(RegisterPair::from_opcode(opcode));
        self.regs.a = self.memory.read_byte(addr)?;
        Ok(())
    }

    pub(super) fn exec_sta(&mut self) -> Result<(), CpuError> {
        let addr = self.fetch_word()?;
        self.memory.write_byte(addr, self.regs.a)
    }

    /// LDA loads one byte, not a word.
    pub(super) fn exec_lda(&mut self) -> Result<(), CpuError> {
        let addr = self.fetch_word()?;
        self.regs.a = self.memory.read_byte(addr)?;
        Ok(())
    }

    /// SHLD: L to addr, H to addr+1.
    pub(super) fn exec_shld(&mut self) -> Result<(), CpuError> {
        let addr = self.fetch_word()?;
        self.write_word(addr, self.regs.hl())
    }

    /// LHLD: L from addr, H from addr+1.
    pub(super) fn exec_lhld(&mut self) -> Result<(), CpuError> {
        let addr = self.fetch_word()?;
        let value = self.read_word(addr)?;
        self.regs.set_hl(value);
        Ok(())
    }

    pub(super) fn exec_xchg(&mut self) {
        core::mem::swap(&mut self.regs.d, &mut self.regs.h);
        core::mem::swap(&mut self.regs.e, &mut self.regs.l);
    }
}
