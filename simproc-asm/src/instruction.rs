use crate::{Condition, Opcode, RawInstruction, RegisterId, Word};

use core::fmt;

bitflags::bitflags! {
    /// Addressing-mode bits of an instruction word.
    pub struct ModeFlags: u8 {
        /// `I`: the payload is an inline literal.
        const IMMEDIATE = 0b10;
        /// `X`: the payload is an index register plus a signed offset.
        const INDEXED = 0b01;
    }
}

/// A single 32-bit instruction word.
///
/// The raw encoding is kept as-is; typed views of the payload are built on
/// demand through [`Instruction::mode`], so construction is total and every
/// accessor is pure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction(RawInstruction);

impl Instruction {
    /// Size of an encoded instruction in bytes.
    pub const LEN: usize = 4;

    const COP_SHIFT: u32 = 26;
    const IMMEDIATE_BIT: RawInstruction = 1 << 25;
    const INDEXED_BIT: RawInstruction = 1 << 24;
    const REGCOND_SHIFT: u32 = 16;
    const REGCOND_MASK: RawInstruction = 0xff;
    const PAYLOAD_MASK: RawInstruction = 0xffff;
    const RINDEX_SHIFT: u32 = 12;
    const OFFSET_PAD: u32 = 4;

    /// Wraps a raw instruction word.
    pub const fn new(raw: RawInstruction) -> Self {
        Self(raw)
    }

    /// Raw 32-bit encoding.
    pub const fn raw(self) -> RawInstruction {
        self.0
    }

    /// Raw 6-bit opcode field.
    pub const fn opcode(self) -> u8 {
        (self.0 >> Self::COP_SHIFT) as u8
    }

    /// Register number or condition selector field.
    pub const fn regcond(self) -> u8 {
        ((self.0 >> Self::REGCOND_SHIFT) & Self::REGCOND_MASK) as u8
    }

    /// Whether the `I` bit is set.
    pub const fn is_immediate(self) -> bool {
        self.0 & Self::IMMEDIATE_BIT != 0
    }

    /// Whether the `X` bit is set.
    pub const fn is_indexed(self) -> bool {
        self.0 & Self::INDEXED_BIT != 0
    }

    /// Addressing-mode bits.
    pub fn flags(self) -> ModeFlags {
        let mut flags = ModeFlags::empty();
        if self.is_immediate() {
            flags |= ModeFlags::IMMEDIATE;
        }
        if self.is_indexed() {
            flags |= ModeFlags::INDEXED;
        }
        flags
    }

    /// Raw 16-bit payload.
    pub const fn payload(self) -> u16 {
        (self.0 & Self::PAYLOAD_MASK) as u16
    }

    /// Absolute address carried in the payload.
    pub const fn absolute_address(self) -> u16 {
        self.payload()
    }

    /// Immediate literal, sign-extended to a full word.
    pub const fn immediate_word(self) -> Word {
        self.payload() as i16 as Word
    }

    /// Index register and offset, the offset sign-extended from 12 bits.
    pub const fn indexed(self) -> (RegisterId, i16) {
        let payload = self.payload();
        let rindex = (payload >> Self::RINDEX_SHIFT) as RegisterId;
        let offset = ((payload << Self::OFFSET_PAD) as i16) >> Self::OFFSET_PAD;
        (rindex, offset)
    }

    /// Typed view of the payload under the `(I, X)` flags.
    pub const fn mode(self) -> AddrMode {
        match (self.is_immediate(), self.is_indexed()) {
            (false, false) => AddrMode::Absolute(self.absolute_address()),
            (true, false) => AddrMode::Immediate(self.payload()),
            (false, true) => {
                let (rindex, offset) = self.indexed();
                AddrMode::Indexed { rindex, offset }
            }
            (true, true) => AddrMode::Reserved,
        }
    }

    /// Little-endian byte encoding, as stored in a program image.
    pub const fn to_bytes(self) -> [u8; Self::LEN] {
        self.0.to_le_bytes()
    }

    /// Decode from the image byte order.
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }
}

/// Payload interpretation selected by the `I` and `X` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrMode {
    /// Unsigned address into the data segment, or into the text segment for
    /// control transfers.
    Absolute(u16),
    /// Inline 16-bit literal.
    Immediate(u16),
    /// Effective address `R[rindex] + offset`.
    Indexed {
        /// Index register number.
        rindex: RegisterId,
        /// Signed displacement added to the index register.
        offset: i16,
    },
    /// `(I=1, X=1)`; never valid to execute.
    Reserved,
}

impl From<RawInstruction> for Instruction {
    fn from(raw: RawInstruction) -> Self {
        Self::new(raw)
    }
}

impl From<Instruction> for RawInstruction {
    fn from(instr: Instruction) -> RawInstruction {
        instr.raw()
    }
}

impl From<[u8; Instruction::LEN]> for Instruction {
    fn from(bytes: [u8; Instruction::LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Operand column of the disassembly.
struct Operand(Instruction);

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.mode() {
            AddrMode::Absolute(addr) => write!(f, "@0x{addr:04x}"),
            AddrMode::Immediate(value) => write!(f, "#{value}"),
            AddrMode::Indexed { rindex, offset } => write!(f, "{offset}[R{rindex:02}]"),
            AddrMode::Reserved => Ok(()),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand = Operand(*self);

        let op = match Opcode::try_from(self.opcode()) {
            Ok(op) => op,
            Err(_) => return f.write_str("???"),
        };

        match op {
            Opcode::Illop | Opcode::Nop | Opcode::Ret | Opcode::Halt => write!(f, "{op}"),
            Opcode::Load | Opcode::Store | Opcode::Add | Opcode::Sub => {
                write!(f, "{op} R{:02}, {operand}", self.regcond())
            }
            Opcode::Push | Opcode::Pop => write!(f, "{op} {operand}"),
            Opcode::Branch | Opcode::Call => match Condition::try_from(self.regcond()) {
                Ok(cond) => write!(f, "{op} {cond}, {operand}"),
                Err(_) => write!(f, "{op} {}, {operand}", self.regcond()),
            },
        }
    }
}
