//! Simulator for the simproc fixed-width processor.
//!
//! The machine owns its text and data segments for its whole lifetime and
//! executes strictly in program order: fetch at `pc`, advance `pc`, execute,
//! repeat until `HALT` or a fatal fault. Programs are loaded from the flat
//! binary image format of [`image::ProgramImage`] or assembled directly with
//! the `simproc-asm` constructors.

pub mod consts;
pub mod debug;
pub mod error;
pub mod image;
pub mod machine;
pub mod state;

pub mod prelude {
    //! Common imports for driving a simulation.

    pub use simproc_asm::{
        op, AddrMode, CondCode, Condition, Fault, Instruction, Opcode, RawInstruction, Word,
    };

    pub use crate::consts::NREGISTERS;
    pub use crate::debug::{DebugHook, DebugSession};
    pub use crate::error::{FaultEvent, SimulatorError};
    pub use crate::image::ProgramImage;
    pub use crate::machine::Machine;
    pub use crate::state::ExecuteState;
}
