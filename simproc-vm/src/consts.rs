//! Machine parameters.

/// Number of general registers in the bank.
///
/// The 4-bit `rindex` field of the indexed addressing mode is sized for
/// exactly this bank.
pub const NREGISTERS: usize = 16;

/// File written by a memory dump.
pub const DUMP_FILE: &str = "dump.bin";
