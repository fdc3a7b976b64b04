use crate::cpu::Cpu8080;
use crate::error::CpuError;
use crate::flags::ConditionFlags;

impl Cpu8080 {
    /// PUSH B/D/H/PSW. PSW pushes A as the high byte and the packed flags low.
    pub(super) fn exec_push(&mut self, opcode: u8) -> Result<(), CpuError> {
        debug_assert!(matches!(opcode, 0xc5 | 0xd5 | 0xe5 | 0xf5));

        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => u16::from_be_bytes([self.regs.a, self.flags.to_psw()]),
        };
        self.push(value)
    }

    pub(super) fn exec_pop(&mut self, opcode: u8) -> Result<(), CpuError> {
        debug_assert!(matches!(opcode, 0xc1 | 0xd1 | 0xe1 | 0xf1));

        let value = self.pop()?;
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => {
                let [a, psw] = value.to_be_bytes();
                self.regs.a = a;
                self.flags = ConditionFlags::from_psw(psw);
            }
        }
        Ok(())
    }

    /// XTHL: swap HL with the word on top of the stack. SP is unchanged.
    pub(super) fn exec_xthl(&mut self) -> Result<(), CpuError> {
        let sp = self.regs.sp;
        let top = self.read_word(sp)?;
        self.write_word(sp, self.regs.hl())?;
        self.regs.set_hl(top);
        Ok(())
    }

    pub(super) fn exec_sphl(&mut self) {
        self.regs.sp = self.regs.hl();
    }
}
