use core::fmt;

/// Fatal fault raised by the decode/execute unit or the fetch loop.
///
/// Every fault terminates the simulation. The display form is the
/// diagnostic label printed on the error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Fault {
    /// The `cop` field is outside the defined opcode set.
    Unknown = 0x01,
    /// A defined opcode carries an invalid operand combination, such as an
    /// out-of-range register or the reserved addressing mode.
    Illegal = 0x02,
    /// The condition selector is outside the defined set.
    Condition = 0x03,
    /// Immediate mode on an opcode that forbids it.
    Immediate = 0x04,
    /// The program counter or a jump target left the text segment.
    SegText = 0x05,
    /// A data access left the data segment, or a write targeted the stack
    /// region.
    SegData = 0x06,
    /// The stack pointer left the stack region.
    SegStack = 0x07,
}

impl Fault {
    /// Diagnostic label, as printed by the simulator.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Instruction inconnue",
            Self::Illegal => "Instruction illégale",
            Self::Condition => "Condition illégale",
            Self::Immediate => "Valeur immédiate interdite",
            Self::SegText => "Violation de taille du segment de texte",
            Self::SegData => "Violation de taille du segment de données",
            Self::SegStack => "Violation de taille du segment de pile",
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<_> = Fault::iter().map(Fault::label).collect();
        let unique: std::collections::HashSet<_> = labels.iter().copied().collect();
        assert_eq!(unique.len(), labels.len());
        assert!(labels.iter().all(|label| !label.is_empty()));
    }
}
