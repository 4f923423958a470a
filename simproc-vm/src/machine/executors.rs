use super::Machine;
use crate::debug::DebugHook;
use crate::error::{FaultEvent, SimulatorError};
use crate::state::ExecuteState;

use simproc_asm::{Fault, Instruction, Opcode};

use std::io::Write;

impl Machine {
    /// Fetch the instruction at `pc` and advance past it.
    ///
    /// Faults with `SegText` at the out-of-range `pc` when the counter has
    /// run off the end of the text segment.
    pub fn fetch(&mut self) -> Result<Instruction, FaultEvent> {
        if self.pc as usize >= self.text.len() {
            return Err(FaultEvent::new(Fault::SegText, self.pc));
        }

        self.pc += 1;
        Ok(self.text[(self.pc - 1) as usize])
    }

    /// Decode and execute one fetched instruction.
    ///
    /// Faults are bound to the address of the instruction itself, one slot
    /// behind the already-advanced `pc`.
    pub fn execute(&mut self, instr: Instruction) -> Result<ExecuteState, FaultEvent> {
        self.instruction(instr)
            .map_err(|fault| FaultEvent::new(fault, self.current_address()))
    }

    /// Fetch and execute a single instruction, without tracing.
    pub fn step(&mut self) -> Result<ExecuteState, FaultEvent> {
        let instr = self.fetch()?;
        self.execute(instr)
    }

    fn instruction(&mut self, instr: Instruction) -> Result<ExecuteState, Fault> {
        tracing::trace!(pc = self.current_address(), %instr, "executing");

        let op = Opcode::try_from(instr.opcode()).map_err(|_| Fault::Unknown)?;

        match op {
            Opcode::Illop => return Err(Fault::Illegal),
            Opcode::Nop => (),
            Opcode::Load => self.alu_load(instr)?,
            Opcode::Store => self.store(instr)?,
            Opcode::Add => self.alu_add(instr)?,
            Opcode::Sub => self.alu_sub(instr)?,
            Opcode::Branch => self.branch(instr)?,
            Opcode::Call => self.call(instr)?,
            Opcode::Ret => self.ret()?,
            Opcode::Push => self.push(instr)?,
            Opcode::Pop => self.pop(instr)?,
            Opcode::Halt => return Ok(ExecuteState::Halted),
        }

        Ok(ExecuteState::Proceed)
    }

    /// Run to completion, writing the execution trace to `out`.
    ///
    /// Returns `Ok(())` after a `HALT`; any fault aborts the run.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), SimulatorError> {
        self.run_hooked(out, None)
    }

    /// Run with the interactive debug hook enabled.
    ///
    /// The hook is consulted after every executed instruction, including
    /// the final `HALT`; once it returns `false` the run continues without
    /// further prompts.
    pub fn run_with_debug<W, D>(&mut self, out: &mut W, hook: &mut D) -> Result<(), SimulatorError>
    where
        W: Write,
        D: DebugHook,
    {
        self.run_hooked(out, Some(hook))
    }

    fn run_hooked(
        &mut self,
        out: &mut dyn Write,
        mut hook: Option<&mut dyn DebugHook>,
    ) -> Result<(), SimulatorError> {
        loop {
            let instr = self.fetch()?;
            writeln!(
                out,
                "TRACE: Executing: 0x{:04x}: {}",
                self.current_address(),
                instr
            )?;

            let state = self.execute(instr)?;
            if !state.should_continue() {
                writeln!(
                    out,
                    "WARNING: HALT reached at address 0x{:04x}",
                    self.current_address()
                )?;
            }

            let leave_debug = match hook.as_mut() {
                Some(session) => !session.after_instruction(self)?,
                None => false,
            };
            if leave_debug {
                hook = None;
            }

            if !state.should_continue() {
                return Ok(());
            }
        }
    }
}
