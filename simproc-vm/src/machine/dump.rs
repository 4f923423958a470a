use super::Machine;
use crate::consts::DUMP_FILE;

use itertools::Itertools;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Cells per line in the CPU and data grids.
const GRID_COLUMNS: usize = 3;
/// Words per line in the source-style memory rendering.
const IMAGE_COLUMNS: usize = 4;

impl Machine {
    /// CPU dump: program counter, condition code and the register grid.
    pub fn print_cpu<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n*** CPU ***")?;
        writeln!(out, "PC: 0x{:08x}\tCC: {}\n", self.pc, self.cc)?;

        for (i, word) in self.registers.iter().enumerate() {
            let sep = if (i + 1) % GRID_COLUMNS == 0 { '\n' } else { '\t' };
            write!(out, "R{i:02}: 0x{word:08x} {word}{sep}")?;
        }
        writeln!(out)
    }

    /// Data segment dump, stack region included.
    pub fn print_data<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "\n*** DATA (size: {}, end = 0x{:08x} ({})) ***",
            self.data.len(),
            self.dataend,
            self.dataend
        )?;

        for (addr, word) in self.data.iter().enumerate() {
            let sep = if (addr + 1) % GRID_COLUMNS == 0 { '\n' } else { '\t' };
            write!(out, "0x{addr:04x}: 0x{word:08x} {word}{sep}")?;
        }
        writeln!(out)
    }

    /// Disassembled text segment.
    pub fn print_program<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n*** PROGRAM (size: {}) ***", self.text.len())?;

        for (addr, instr) in self.text.iter().enumerate() {
            writeln!(out, "0x{addr:04x}: 0x{:08x}\t{instr}", instr.raw())?;
        }

        Ok(())
    }

    /// Write `dump.bin` in the image format and print a source-style
    /// rendering of both segments.
    pub fn dump_memory<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.dump_memory_at(DUMP_FILE, out)
    }

    /// As [`Machine::dump_memory`], with an explicit image path.
    pub fn dump_memory_at<P: AsRef<Path>, W: Write>(&self, path: P, out: &mut W) -> io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        self.to_image().to_writer(&mut file)?;
        file.flush()?;

        writeln!(out, "Instruction text[] = {{")?;
        for chunk in &self.text.iter().chunks(IMAGE_COLUMNS) {
            let line = chunk.map(|instr| format!("0x{:08x}", instr.raw())).join(", ");
            writeln!(out, "\t{line},")?;
        }
        writeln!(out, "}};")?;
        writeln!(out, "unsigned textsize = {};", self.text.len())?;

        writeln!(out, "\nWord data[] = {{")?;
        for chunk in &self.data.iter().chunks(IMAGE_COLUMNS) {
            let line = chunk.map(|word| format!("0x{word:08x}")).join(", ");
            writeln!(out, "\t{line},")?;
        }
        writeln!(out, "}};")?;
        writeln!(out, "unsigned datasize = {};", self.data.len())?;
        writeln!(out, "unsigned dataend = {};", self.dataend)
    }
}
