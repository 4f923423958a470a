/// Register value and data memory cell.
///
/// Arithmetic over words is two's-complement and wraps silently.
pub type Word = i32;

/// Raw 32-bit encoding of an instruction.
pub type RawInstruction = u32;

/// Index into the general register bank.
pub type RegisterId = u8;
