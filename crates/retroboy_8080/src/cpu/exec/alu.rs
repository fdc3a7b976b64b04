use crate::cpu::Cpu8080;
use crate::error::CpuError;
use crate::flags::{self, FlagMask};
use crate::regs::Reg;

/// Accumulator operation selected by bits 3-5 of the 80-BF and Cx/Dx/Ex/Fx
/// immediate opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AluOp {
    Add,
    Adc,
    Sub,
    Sbb,
    Ana,
    Xra,
    Ora,
    Cmp,
}

impl AluOp {
    fn from_opcode(opcode: u8) -> Self {
        match (opcode >> 3) & 0x07 {
            0 => Self::Add,
            1 => Self::Adc,
            2 => Self::Sub,
            3 => Self::Sbb,
            4 => Self::Ana,
            5 => Self::Xra,
            6 => Self::Ora,
            _ => Self::Cmp,
        }
    }
}

impl Cpu8080 {
    pub(super) fn exec_alu_reg(&mut self, opcode: u8) -> Result<(), CpuError> {
        debug_assert!((0x80..=0xbf).contains(&opcode));

        let value = self.read_reg(Reg::src(opcode))?;
        self.alu(AluOp::from_opcode(opcode), value);
        Ok(())
    }

    pub(super) fn exec_alu_imm(&mut self, opcode: u8) -> Result<(), CpuError> {
        debug_assert!(matches!(
            opcode,
            0xc6 | 0xce | 0xd6 | 0xde | 0xe6 | 0xee | 0xf6 | 0xfe
        ));

        let value = self.fetch_byte()?;
        self.alu(AluOp::from_opcode(opcode), value);
        Ok(())
    }

    fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, self.flags.cy),
            AluOp::Sub => self.alu_sub(value, false, true),
            AluOp::Sbb => self.alu_sub(value, self.flags.cy, true),
            AluOp::Ana => {
                let res = self.regs.a & value;
                self.alu_logical(res);
            }
            AluOp::Xra => {
                let res = self.regs.a ^ value;
                self.alu_logical(res);
            }
            AluOp::Ora => {
                let res = self.regs.a | value;
                self.alu_logical(res);
            }
            // CMP is SUB without the write-back.
            AluOp::Cmp => self.alu_sub(value, false, false),
        }
    }

    /// ADD/ADC. `carry_in` is the incoming CY for ADC, false for ADD.
    fn alu_add(&mut self, value: u8, carry_in: bool) {
        let a = self.regs.a;
        let res = a as u16 + value as u16 + u16::from(carry_in);
        self.flags.ac = flags::aux_carry_add(a, value, carry_in);
        flags::apply_flags(&mut self.flags, res, FlagMask::ARITHMETIC, false);
        self.regs.a = res as u8;
    }

    /// SUB/SBB/CMP. CY reports a borrow.
    fn alu_sub(&mut self, value: u8, borrow_in: bool, store: bool) {
        let a = self.regs.a;
        let res = (a as u16)
            .wrapping_sub(value as u16)
            .wrapping_sub(u16::from(borrow_in));
        self.flags.ac = flags::aux_carry_sub(a, value, borrow_in);
        flags::apply_flags(&mut self.flags, res, FlagMask::ARITHMETIC, true);
        if store {
            self.regs.a = res as u8;
        }
    }

    fn alu_logical(&mut self, res: u8) {
        flags::apply_flags(&mut self.flags, res as u16, FlagMask::LOGICAL, false);
        self.regs.a = res;
    }

    /// DAA: decimal adjust A after a BCD addition.
    pub(super) fn exec_daa(&mut self) {
        let a = self.regs.a;
        let low = a & 0x0f;
        let high = a >> 4;
        let mut adjust = 0u8;
        let mut carry = self.flags.cy;

        if low > 9 || self.flags.ac {
            adjust |= 0x06;
        }
        if high > 9 || carry || (high >= 9 && low > 9) {
            adjust |= 0x60;
            carry = true;
        }

        self.alu_add(adjust, false);
        // DAA never clears a carry that was already set.
        self.flags.cy = carry;
    }
}

#[cfg(test)]
mod tests {
    use super::AluOp;

    #[test]
    fn op_field_matches_mnemonic_blocks() {
        assert_eq!(AluOp::from_opcode(0x80), AluOp::Add);
        assert_eq!(AluOp::from_opcode(0x8f), AluOp::Adc);
        assert_eq!(AluOp::from_opcode(0x96), AluOp::Sub);
        assert_eq!(AluOp::from_opcode(0xde), AluOp::Sbb);
        assert_eq!(AluOp::from_opcode(0xe6), AluOp::Ana);
        assert_eq!(AluOp::from_opcode(0xae), AluOp::Xra);
        assert_eq!(AluOp::from_opcode(0xf6), AluOp::Ora);
        assert_eq!(AluOp::from_opcode(0xfe), AluOp::Cmp);
    }
}
