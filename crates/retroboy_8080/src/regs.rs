/// General purpose registers of the 8080.
///
/// BC, DE and HL are not stored separately; they are views over the byte
/// registers with the first-named register as the high byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

/// 16-bit register operand, in opcode encoding order (bits 4-5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterPair {
    BC,
    DE,
    HL,
    SP,
}

impl RegisterPair {
    /// Decode the `rp` field used by LXI/INX/DCX/DAD.
    #[inline]
    pub fn from_opcode(opcode: u8) -> Self {
        match (opcode >> 4) & 0x03 {
            0 => Self::BC,
            1 => Self::DE,
            2 => Self::HL,
            _ => Self::SP,
        }
    }
}

/// 8-bit register operand, in opcode encoding order.
///
/// `M` is the byte in memory addressed by HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    M,
    A,
}

impl Reg {
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Self::B,
            1 => Self::C,
            2 => Self::D,
            3 => Self::E,
            4 => Self::H,
            5 => Self::L,
            6 => Self::M,
            _ => Self::A,
        }
    }

    /// Source operand in bits 0-2.
    #[inline]
    pub fn src(opcode: u8) -> Self {
        Self::from_index(opcode)
    }

    /// Destination operand in bits 3-5.
    #[inline]
    pub fn dst(opcode: u8) -> Self {
        Self::from_index(opcode >> 3)
    }
}

impl Registers {
    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        [self.b, self.c] = value.to_be_bytes();
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        [self.d, self.e] = value.to_be_bytes();
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        [self.h, self.l] = value.to_be_bytes();
    }

    pub fn pair(&self, rp: RegisterPair) -> u16 {
        match rp {
            RegisterPair::BC => self.bc(),
            RegisterPair::DE => self.de(),
            RegisterPair::HL => self.hl(),
            RegisterPair::SP => self.sp,
        }
    }

    pub fn set_pair(&mut self, rp: RegisterPair, value: u16) {
        match rp {
            RegisterPair::BC => self.set_bc(value),
            RegisterPair::DE => self.set_de(value),
            RegisterPair::HL => self.set_hl(value),
            RegisterPair::SP => self.sp = value,
        }
    }

    /// Read a byte register. `M` has no register backing and reads as `None`.
    pub fn get(&self, reg: Reg) -> Option<u8> {
        match reg {
            Reg::B => Some(self.b),
            Reg::C => Some(self.c),
            Reg::D => Some(self.d),
            Reg::E => Some(self.e),
            Reg::H => Some(self.h),
            Reg::L => Some(self.l),
            Reg::M => None,
            Reg::A => Some(self.a),
        }
    }

    /// Write a byte register. Writes to `M` are ignored; memory goes through the CPU.
    pub fn set(&mut self, reg: Reg, value: u8) {
        match reg {
            Reg::B => self.b = value,
            Reg::C => self.c = value,
            Reg::D => self.d = value,
            Reg::E => self.e = value,
            Reg::H => self.h = value,
            Reg::L => self.l = value,
            Reg::M => {}
            Reg::A => self.a = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_keep_first_register_high() {
        let mut regs = Registers::default();
        regs.set_pair(RegisterPair::BC, 0x1234);
        assert_eq!((regs.b, regs.c), (0x12, 0x34));
        assert_eq!(regs.pair(RegisterPair::BC), 0x1234);

        regs.set_pair(RegisterPair::DE, 0xbeef);
        assert_eq!((regs.d, regs.e), (0xbe, 0xef));

        regs.set_pair(RegisterPair::HL, 0x00ff);
        assert_eq!((regs.h, regs.l), (0x00, 0xff));
        assert_eq!(regs.hl(), 0x00ff);

        regs.set_pair(RegisterPair::SP, 0x2400);
        assert_eq!(regs.sp, 0x2400);
    }

    #[test]
    fn opcode_fields_decode_in_encoding_order() {
        assert_eq!(RegisterPair::from_opcode(0x01), RegisterPair::BC);
        assert_eq!(RegisterPair::from_opcode(0x11), RegisterPair::DE);
        assert_eq!(RegisterPair::from_opcode(0x21), RegisterPair::HL);
        assert_eq!(RegisterPair::from_opcode(0x31), RegisterPair::SP);

        // MOV D,M
        assert_eq!(Reg::dst(0x56), Reg::D);
        assert_eq!(Reg::src(0x56), Reg::M);
        // MOV A,B
        assert_eq!(Reg::dst(0x78), Reg::A);
        assert_eq!(Reg::src(0x78), Reg::B);
    }
}
