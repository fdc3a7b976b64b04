//! Condition flags and the pure functions that derive them from ALU results.
//!
//! Results are passed as the 16-bit intermediate before truncation so that the
//! carry/borrow bit is still visible.

use bitflags::bitflags;

/// PSW bit positions for the packed flags byte: `S Z 0 AC 0 P 1 CY`.
const PSW_SIGN: u8 = 0x80;
const PSW_ZERO: u8 = 0x40;
const PSW_AUX_CARRY: u8 = 0x10;
const PSW_PARITY: u8 = 0x04;
const PSW_ALWAYS_ONE: u8 = 0x02;
const PSW_CARRY: u8 = 0x01;

/// Condition flags for Intel 8080.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConditionFlags {
    pub z: bool,  // zero
    pub s: bool,  // sign
    pub p: bool,  // parity
    pub cy: bool, // carry
    pub ac: bool, // auxiliary carry
}

bitflags! {
    /// Selects which flags `apply_flags` recomputes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FlagMask: u8 {
        const ZERO = 1 << 0;
        const SIGN = 1 << 1;
        const PARITY = 1 << 2;
        const CARRY = 1 << 3;
        /// Forces CY and AC low before the other bits are applied.
        const CLEAR_CARRY = 1 << 4;

        /// INR/DCR: carry is never touched.
        const INCREMENT = Self::ZERO.bits() | Self::SIGN.bits() | Self::PARITY.bits();
        /// ADD/ADC/SUB/SBB/CMP and immediate forms.
        const ARITHMETIC = Self::INCREMENT.bits() | Self::CARRY.bits();
        /// ANA/XRA/ORA and immediate forms.
        const LOGICAL = Self::INCREMENT.bits() | Self::CLEAR_CARRY.bits();
    }
}

impl ConditionFlags {
    /// Pack into the PSW byte pushed by `PUSH PSW`.
    pub fn to_psw(self) -> u8 {
        let mut f = PSW_ALWAYS_ONE;
        if self.s {
            f |= PSW_SIGN;
        }
        if self.z {
            f |= PSW_ZERO;
        }
        if self.ac {
            f |= PSW_AUX_CARRY;
        }
        if self.p {
            f |= PSW_PARITY;
        }
        if self.cy {
            f |= PSW_CARRY;
        }
        f
    }

    /// Unpack a PSW byte popped by `POP PSW`. Reserved bits are ignored.
    pub fn from_psw(v: u8) -> Self {
        Self {
            s: v & PSW_SIGN != 0,
            z: v & PSW_ZERO != 0,
            ac: v & PSW_AUX_CARRY != 0,
            p: v & PSW_PARITY != 0,
            cy: v & PSW_CARRY != 0,
        }
    }
}

#[inline]
pub fn zero(result: u16) -> bool {
    result & 0xff == 0
}

#[inline]
pub fn sign(result: u16) -> bool {
    result & 0x80 != 0
}

/// Even parity over the low byte.
#[inline]
pub fn parity(result: u16) -> bool {
    (result as u8).count_ones() % 2 == 0
}

/// Carry out of bit 7 for additions, borrow for subtractions.
///
/// Subtractions must pass the wrapped 16-bit difference, which lands above
/// 0xff exactly when the subtrahend was larger than the minuend.
#[inline]
pub fn carry(result: u16, is_subtraction: bool) -> bool {
    if is_subtraction {
        result > 0xff
    } else {
        result & 0x100 != 0
    }
}

/// Carry out of bit 3 for `a + b + carry_in`.
#[inline]
pub fn aux_carry_add(a: u8, b: u8, carry_in: bool) -> bool {
    (a & 0x0f) + (b & 0x0f) + u8::from(carry_in) > 0x0f
}

/// Auxiliary carry for `a - b - borrow_in`.
///
/// The 8080 subtracts by adding the two's complement, so AC reports a carry
/// out of bit 3 of that addition, i.e. the low nibble did *not* borrow.
#[inline]
pub fn aux_carry_sub(a: u8, b: u8, borrow_in: bool) -> bool {
    (a & 0x0f) as i16 - (b & 0x0f) as i16 - i16::from(borrow_in) >= 0
}

/// Recompute exactly the flags named in `mask`, leaving the rest untouched.
pub fn apply_flags(flags: &mut ConditionFlags, result: u16, mask: FlagMask, is_subtraction: bool) {
    if mask.contains(FlagMask::CLEAR_CARRY) {
        flags.cy = false;
        flags.ac = false;
    }
    if mask.contains(FlagMask::ZERO) {
        flags.z = zero(result);
    }
    if mask.contains(FlagMask::SIGN) {
        flags.s = sign(result);
    }
    if mask.contains(FlagMask::PARITY) {
        flags.p = parity(result);
    }
    if mask.contains(FlagMask::CARRY) {
        flags.cy = carry(result, is_subtraction);
    }
}
