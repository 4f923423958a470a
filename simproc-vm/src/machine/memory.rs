use super::Machine;
use crate::consts::NREGISTERS;

use simproc_asm::{AddrMode, Fault, Instruction, Word};

impl Machine {
    /// `Rd` of a register-operand instruction, checked against the bank.
    pub(super) fn destination_register(&self, instr: Instruction) -> Result<usize, Fault> {
        let rd = instr.regcond() as usize;
        if rd >= NREGISTERS {
            return Err(Fault::Illegal);
        }
        Ok(rd)
    }

    /// Value of a readable operand: an immediate literal or a data cell.
    pub(super) fn operand_value(&self, instr: Instruction) -> Result<Word, Fault> {
        match instr.mode() {
            AddrMode::Immediate(_) => Ok(instr.immediate_word()),
            AddrMode::Reserved => Err(Fault::Illegal),
            AddrMode::Absolute(_) | AddrMode::Indexed { .. } => {
                let addr = self.data_address(instr)?;
                Ok(self.data[addr])
            }
        }
    }

    /// Reject the immediate and reserved modes for address-only opcodes.
    pub(super) fn require_addressable(&self, instr: Instruction) -> Result<(), Fault> {
        match instr.mode() {
            AddrMode::Reserved => Err(Fault::Illegal),
            AddrMode::Immediate(_) => Err(Fault::Immediate),
            AddrMode::Absolute(_) | AddrMode::Indexed { .. } => Ok(()),
        }
    }

    /// Effective address under the absolute or indexed mode.
    ///
    /// Indexed sums are computed in 64 bits so a negative effective address
    /// reaches the segment guards instead of wrapping.
    pub(super) fn effective_address(&self, instr: Instruction) -> Result<i64, Fault> {
        match instr.mode() {
            AddrMode::Absolute(addr) => Ok(addr as i64),
            AddrMode::Indexed { rindex, offset } => {
                let rindex = rindex as usize;
                if rindex >= NREGISTERS {
                    return Err(Fault::Illegal);
                }
                Ok(self.registers[rindex] as i64 + offset as i64)
            }
            AddrMode::Immediate(_) | AddrMode::Reserved => Err(Fault::Illegal),
        }
    }

    /// Effective address checked against the data segment bounds.
    pub(super) fn data_address(&self, instr: Instruction) -> Result<usize, Fault> {
        let addr = self.effective_address(instr)?;
        if addr < 0 || addr >= self.datasize() {
            return Err(Fault::SegData);
        }
        Ok(addr as usize)
    }

    /// The stack slot `sp` points at, provided it lies inside the stack
    /// region `[dataend, datasize)`.
    fn stack_slot(&self, sp: i64) -> Result<usize, Fault> {
        if sp < self.dataend as i64 || sp >= self.datasize() {
            return Err(Fault::SegStack);
        }
        Ok(sp as usize)
    }

    /// Push one word; the stack grows downward.
    pub(super) fn push_word(&mut self, value: Word) -> Result<(), Fault> {
        let slot = self.stack_slot(self.sp)?;
        self.data[slot] = value;
        self.sp -= 1;
        Ok(())
    }

    /// Pop one word.
    pub(super) fn pop_word(&mut self) -> Result<Word, Fault> {
        let slot = self.stack_slot(self.sp + 1)?;
        self.sp += 1;
        Ok(self.data[slot])
    }

    pub(super) fn push(&mut self, instr: Instruction) -> Result<(), Fault> {
        self.stack_slot(self.sp)?;
        let value = self.operand_value(instr)?;
        self.push_word(value)
    }

    pub(super) fn pop(&mut self, instr: Instruction) -> Result<(), Fault> {
        self.require_addressable(instr)?;

        let addr = self.data_address(instr)?;
        let value = self.pop_word()?;

        // The destination must lie in initialized data, never in the stack.
        if addr >= self.dataend {
            return Err(Fault::SegData);
        }
        self.data[addr] = value;

        Ok(())
    }

    pub(super) fn store(&mut self, instr: Instruction) -> Result<(), Fault> {
        self.require_addressable(instr)?;

        let rd = self.destination_register(instr)?;
        let addr = self.data_address(instr)?;
        if addr >= self.dataend {
            return Err(Fault::SegData);
        }
        self.data[addr] = self.registers[rd];

        Ok(())
    }
}
