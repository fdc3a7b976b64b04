//! Rotates and single-flag operations on the accumulator.

use crate::cpu::Cpu8080;

impl Cpu8080 {
    /// RLC: bit 7 goes to CY and wraps into bit 0.
    pub(super) fn exec_rlc(&mut self) {
        let a = self.regs.a;
        self.flags.cy = a & 0x80 != 0;
        self.regs.a = a.rotate_left(1);
    }

    /// RRC: bit 0 goes to CY and wraps into bit 7.
    pub(super) fn exec_rrc(&mut self) {
        let a = self.regs.a;
        self.flags.cy = a & 0x01 != 0;
        self.regs.a = a.rotate_right(1);
    }

    /// RAL: old CY shifts into bit 0, bit 7 becomes the new CY.
    pub(super) fn exec_ral(&mut self) {
        let a = self.regs.a;
        let carry_in = u8::from(self.flags.cy);
        self.flags.cy = a & 0x80 != 0;
        self.regs.a = (a << 1) | carry_in;
    }

    /// RAR: old CY shifts into bit 7, bit 0 becomes the new CY.
    pub(super) fn exec_rar(&mut self) {
        let a = self.regs.a;
        let carry_in = if self.flags.cy { 0x80 } else { 0 };
        self.flags.cy = a & 0x01 != 0;
        self.regs.a = (a >> 1) | carry_in;
    }

    pub(super) fn exec_cma(&mut self) {
        self.regs.a = !self.regs.a;
    }

    pub(super) fn exec_stc(&mut self) {
        self.flags.cy = true;
    }

    pub(super) fn exec_cmc(&mut self) {
        self.flags.cy = !self.flags.cy;
    }
}
