use core::fmt;

/// Operation code representation.
///
/// The discriminants are the values carried in the 6-bit `cop` field of an
/// encoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Opcode {
    /// Reserved operation; executing it always faults.
    Illop = 0x00,
    /// No operation.
    Nop = 0x01,
    /// Load a register from memory or from an immediate.
    Load = 0x02,
    /// Store a register into the initialized data region.
    Store = 0x03,
    /// Add an operand to a register.
    Add = 0x04,
    /// Subtract an operand from a register.
    Sub = 0x05,
    /// Conditional jump inside the text segment.
    Branch = 0x06,
    /// Conditional subroutine call through the stack.
    Call = 0x07,
    /// Return to the address on top of the stack.
    Ret = 0x08,
    /// Push an operand onto the stack.
    Push = 0x09,
    /// Pop the stack top into the initialized data region.
    Pop = 0x0a,
    /// Stop the machine.
    Halt = 0x0b,
}

/// The `cop` field does not name a defined operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOpcode;

impl fmt::Display for InvalidOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid opcode")
    }
}

impl std::error::Error for InvalidOpcode {}

impl Opcode {
    /// Mnemonic used by the disassembler.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Illop => "ILLOP",
            Self::Nop => "NOP",
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Branch => "BRANCH",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Halt => "HALT",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = InvalidOpcode;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        use Opcode::*;

        match b {
            0x00 => Ok(Illop),
            0x01 => Ok(Nop),
            0x02 => Ok(Load),
            0x03 => Ok(Store),
            0x04 => Ok(Add),
            0x05 => Ok(Sub),
            0x06 => Ok(Branch),
            0x07 => Ok(Call),
            0x08 => Ok(Ret),
            0x09 => Ok(Push),
            0x0a => Ok(Pop),
            0x0b => Ok(Halt),
            _ => Err(InvalidOpcode),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> u8 {
        op as u8
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
