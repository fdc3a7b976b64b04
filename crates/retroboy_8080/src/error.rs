use thiserror::Error;

/// Fatal conditions raised while executing 8080 code.
///
/// None of these are recoverable from inside the interpreter; the caller
/// driving the step loop decides whether to abort or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// A memory access fell outside the configured memory buffer.
    ///
    /// With the default 64 KiB memory every 16-bit address is valid, so this
    /// only fires for smaller memory configurations or oversized program loads.
    #[error("memory access out of bounds at 0x{addr:04X}")]
    OutOfBoundsAccess { addr: usize },

    /// The opcode is one of the undefined 8080 encodings.
    #[error("unimplemented opcode 0x{opcode:02X} at 0x{pc:04X}")]
    UnimplementedOpcode { opcode: u8, pc: u16 },

    /// IN/OUT hit a port with no registered handler while strict I/O is on.
    #[error("no I/O handler registered for port 0x{port:02X}")]
    IoHandlerMissing { port: u8 },
}
