use typed_builder::TypedBuilder;

use crate::memory::MEMORY_SIZE;

/// PC the Space Invaders ROM boots from.
pub const DEFAULT_PC: u16 = 0x0000;
/// SP the Space Invaders ROM expects at boot (top of work RAM).
pub const DEFAULT_SP: u16 = 0x2400;

/// Boot-time configuration for a [`Cpu8080`](crate::Cpu8080).
///
/// The defaults describe the Space Invaders board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default = MEMORY_SIZE)]
    pub memory_size: usize,
    #[builder(default = DEFAULT_PC)]
    pub initial_pc: u16,
    #[builder(default = DEFAULT_SP)]
    pub initial_sp: u16,
    /// Fail IN/OUT on ports with no handler instead of stubbing them.
    #[builder(default = false)]
    pub strict_io: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
