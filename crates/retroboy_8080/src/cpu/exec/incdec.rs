use crate::cpu::Cpu8080;
use crate::error::CpuError;
use crate::flags::{self, FlagMask};
use crate::regs::{Reg, RegisterPair};

impl Cpu8080 {
    /// INR r / INR M. Carry is not affected.
    pub(super) fn exec_inr(&mut self, opcode: u8) -> Result<(), CpuError> {
        let reg = Reg::dst(opcode);
        let value = self.read_reg(reg)?;
        let res = value.wrapping_add(1);
        self.flags.ac = flags::aux_carry_add(value, 1, false);
        flags::apply_flags(&mut self.flags, res as u16, FlagMask::INCREMENT, false);
        self.write_reg(reg, res)
    }

    /// DCR r / DCR M. Carry is not affected.
    pub(super) fn exec_dcr(&mut self, opcode: u8) -> Result<(), CpuError> {
        let reg = Reg::dst(opcode);
        let value = self.read_reg(reg)?;
        let res = value.wrapping_sub(1);
        self.flags.ac = flags::aux_carry_sub(value, 1, false);
        flags::apply_flags(&mut self.flags, res as u16, FlagMask::INCREMENT, true);
        self.write_reg(reg, res)
    }

    pub(super) fn exec_inx(&mut self, opcode: u8) {
        let rp = RegisterPair::from_opcode(opcode);
        let value = self.regs.pair(rp).wrapping_add(1);
        self.regs.set_pair(rp, value);
    }

    pub(super) fn exec_dcx(&mut self, opcode: u8) {
        let rp = RegisterPair::from_opcode(opcode);
        let value = self.regs.pair(rp).wrapping_sub(1);
        self.regs.set_pair(rp, value);
    }

    /// DAD rp: HL += rp, only CY is affected.
    pub(super) fn exec_dad(&mut self, opcode: u8) {
        let rp = RegisterPair::from_opcode(opcode);
        let res = self.regs.hl() as u32 + self.regs.pair(rp) as u32;
        self.flags.cy = res > 0xffff;
        self.regs.set_hl(res as u16);
    }
}
