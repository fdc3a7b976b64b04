use crate::cpu::{Cpu8080, StepResult};
use crate::error::CpuError;

impl Cpu8080 {
    pub(super) fn exec_out(&mut self) -> Result<(), CpuError> {
        let port = self.fetch_byte()?;
        self.io.write(port, self.regs.a)
    }

    pub(super) fn exec_in(&mut self) -> Result<(), CpuError> {
        let port = self.fetch_byte()?;
        self.regs.a = self.io.read(port)?;
        Ok(())
    }

    // Interrupt delivery is not modelled; EI/DI only latch the enable bit.

    pub(super) fn exec_ei(&mut self) {
        self.interrupts_enabled = true;
    }

    pub(super) fn exec_di(&mut self) {
        self.interrupts_enabled = false;
    }

    pub(super) fn exec_hlt(&mut self) -> StepResult {
        log::debug!("HLT at {:04x}", self.regs.pc.wrapping_sub(1));
        self.halted = true;
        StepResult::Halted
    }
}
