//! Simulator runtime error types.

use simproc_asm::Fault;

use std::io;
use thiserror::Error;

/// A fatal fault bound to the text address it was raised at.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{fault} 0x{addr:04x}")]
pub struct FaultEvent {
    /// What went wrong.
    pub fault: Fault,
    /// Address of the faulting instruction, or the out-of-range program
    /// counter for a fetch fault.
    pub addr: u32,
}

impl FaultEvent {
    /// Bind a fault to an address.
    pub const fn new(fault: Fault, addr: u32) -> Self {
        Self { fault, addr }
    }
}

/// Simulator runtime error variants.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// The machine raised a fatal fault; execution cannot resume.
    #[error(transparent)]
    Fault(#[from] FaultEvent),
    /// I/O and OS related errors.
    #[error("Unrecoverable error: {0}")]
    Io(#[from] io::Error),
}

impl SimulatorError {
    /// The fault behind this error, if applicable.
    pub const fn fault(&self) -> Option<Fault> {
        match self {
            Self::Fault(event) => Some(event.fault),
            _ => None,
        }
    }

    /// The fault event behind this error, if applicable.
    pub const fn fault_event(&self) -> Option<&FaultEvent> {
        match self {
            Self::Fault(event) => Some(event),
            _ => None,
        }
    }
}
