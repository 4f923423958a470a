use super::Machine;

use simproc_asm::{CondCode, Fault, Instruction, Word};

impl Machine {
    pub(super) fn alu_load(&mut self, instr: Instruction) -> Result<(), Fault> {
        let rd = self.destination_register(instr)?;
        let value = self.operand_value(instr)?;

        self.registers[rd] = value;
        self.set_cc(value);

        Ok(())
    }

    pub(super) fn alu_add(&mut self, instr: Instruction) -> Result<(), Fault> {
        self.arithmetic(instr, Word::wrapping_add)
    }

    pub(super) fn alu_sub(&mut self, instr: Instruction) -> Result<(), Fault> {
        self.arithmetic(instr, Word::wrapping_sub)
    }

    fn arithmetic<F>(&mut self, instr: Instruction, f: F) -> Result<(), Fault>
    where
        F: FnOnce(Word, Word) -> Word,
    {
        let rd = self.destination_register(instr)?;
        let operand = self.operand_value(instr)?;
        let result = f(self.registers[rd], operand);

        self.registers[rd] = result;
        self.set_cc(result);

        Ok(())
    }

    /// Overflow wraps silently; only the sign of the result reaches `cc`.
    pub(super) fn set_cc(&mut self, value: Word) {
        self.cc = CondCode::of(value);
    }
}
