use super::Machine;

use simproc_asm::{Condition, Fault, Instruction, Word};

impl Machine {
    /// Condition selector of a `BRANCH`/`CALL`, decoded from `regcond`.
    fn condition(&self, instr: Instruction) -> Result<Condition, Fault> {
        Condition::try_from(instr.regcond()).map_err(|_| Fault::Condition)
    }

    /// Jump target checked against the text segment.
    fn jump_target(&self, instr: Instruction) -> Result<u32, Fault> {
        let target = self.effective_address(instr)?;
        if target < 0 || target >= self.text.len() as i64 {
            return Err(Fault::SegText);
        }
        Ok(target as u32)
    }

    pub(super) fn branch(&mut self, instr: Instruction) -> Result<(), Fault> {
        self.require_addressable(instr)?;

        if self.condition(instr)?.evaluate(self.cc) {
            self.pc = self.jump_target(instr)?;
        }

        Ok(())
    }

    pub(super) fn call(&mut self, instr: Instruction) -> Result<(), Fault> {
        self.require_addressable(instr)?;

        if self.condition(instr)?.evaluate(self.cc) {
            let target = self.jump_target(instr)?;
            // The advanced pc already names the instruction after the call;
            // that is the return address.
            self.push_word(self.pc as Word)?;
            self.pc = target;
        }

        Ok(())
    }

    pub(super) fn ret(&mut self) -> Result<(), Fault> {
        // The restored pc is not validated here; an out-of-text value is
        // caught by the next fetch.
        let addr = self.pop_word()?;
        self.pc = addr as u32;
        Ok(())
    }
}
