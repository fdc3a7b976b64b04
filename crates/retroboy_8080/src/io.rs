use crate::error::CpuError;

/// Callback invoked by `OUT port`, receiving the port and the accumulator.
pub type OutHandler = Box<dyn FnMut(u8, u8)>;
/// Callback invoked by `IN port`; its return value lands in the accumulator.
pub type InHandler = Box<dyn FnMut(u8) -> u8>;

/// The two I/O collaborators the CPU talks to.
///
/// The CPU knows nothing about the machine behind the ports; a missing
/// handler either behaves like an unconnected bus (IN reads 0, OUT is
/// dropped) or fails, depending on `strict`.
#[derive(Default)]
pub struct IoHandlers {
    out: Option<OutHandler>,
    input: Option<InHandler>,
    strict: bool,
}

impl IoHandlers {
    pub fn new(strict: bool) -> Self {
        Self {
            out: None,
            input: None,
            strict,
        }
    }

    pub fn set_out(&mut self, handler: OutHandler) {
        self.out = Some(handler);
    }

    pub fn set_in(&mut self, handler: InHandler) {
        self.input = Some(handler);
    }

    pub fn clear(&mut self) {
        self.out = None;
        self.input = None;
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub(crate) fn read(&mut self, port: u8) -> Result<u8, CpuError> {
        match self.input.as_mut() {
            Some(handler) => Ok(handler(port)),
            None if self.strict => {
                log::warn!("IN from port {port:#04x} with no handler registered");
                Err(CpuError::IoHandlerMissing { port })
            }
            None => Ok(0),
        }
    }

    pub(crate) fn write(&mut self, port: u8, value: u8) -> Result<(), CpuError> {
        match self.out.as_mut() {
            Some(handler) => {
                handler(port, value);
                Ok(())
            }
            None if self.strict => {
                log::warn!("OUT to port {port:#04x} with no handler registered");
                Err(CpuError::IoHandlerMissing { port })
            }
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for IoHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoHandlers")
            .field("out", &self.out.is_some())
            .field("input", &self.input.is_some())
            .field("strict", &self.strict)
            .finish()
    }
}
