//! Interactive single-step debugging.
//!
//! The fetch loop owns no terminal; it drives a [`DebugHook`] after every
//! executed instruction and drops the hook once it asks to leave. The
//! line-oriented [`DebugSession`] is the standard implementation, usable
//! over any input and output channels.

use crate::machine::Machine;

use std::io::{self, BufRead, Write};

/// Hook invoked by the fetch loop after every executed instruction.
pub trait DebugHook {
    /// Inspect the machine; return `false` to leave debug mode for the
    /// rest of the run.
    fn after_instruction(&mut self, machine: &Machine) -> io::Result<bool>;
}

/// Line-oriented debug prompt.
///
/// Reads one command per prompt; every command steps to the next
/// instruction except `c`, which returns control to the free-running loop.
#[derive(Debug)]
pub struct DebugSession<R, W> {
    input: R,
    output: W,
}

impl DebugSession<io::StdinLock<'static>, io::Stdout> {
    /// Interactive session on the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> DebugSession<R, W> {
    /// Build a session over explicit channels.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, machine: &Machine) -> io::Result<bool> {
        write!(self.output, "DEBUG? ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // End of input behaves like `c`: run free.
            return Ok(false);
        }

        let command = line.split_whitespace().next().unwrap_or("");
        tracing::debug!(command, "debug command");

        match command {
            "h" => self.help()?,
            "c" => return Ok(false),
            "r" => machine.print_cpu(&mut self.output)?,
            "d" => machine.print_data(&mut self.output)?,
            "t" | "p" => machine.print_program(&mut self.output)?,
            "m" => {
                machine.print_cpu(&mut self.output)?;
                machine.print_data(&mut self.output)?;
            }
            // `s`, a bare return, or anything unrecognized single-steps.
            _ => {}
        }

        Ok(true)
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.output, "h\thelp")?;
        writeln!(self.output, "c\tcontinue(exit interactive debug mode)")?;
        writeln!(self.output, "s\tstep by step(next instruction)")?;
        writeln!(self.output, "RET\tstep by step(next instruction)")?;
        writeln!(self.output, "r\tprint registers")?;
        writeln!(self.output, "d\tprint data memory")?;
        writeln!(self.output, "t\tprint text(program) memory")?;
        writeln!(self.output, "p\tprint text(program) memory")?;
        writeln!(self.output, "m\tprint registers and data memory")
    }
}

impl<R: BufRead, W: Write> DebugHook for DebugSession<R, W> {
    fn after_instruction(&mut self, machine: &Machine) -> io::Result<bool> {
        self.prompt(machine)
    }
}
