//! On-disk binary program image.
//!
//! A flat little-endian layout, all header fields 32-bit unsigned:
//! `textsize`, `datasize`, `dataend`, then `textsize` instruction words,
//! then `dataend` data words. Cells beyond `dataend` belong to the stack
//! region and are not stored; the loader zeroes them.

use simproc_asm::{Instruction, Word};

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// In-memory form of a program image.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProgramImage {
    /// Text segment.
    pub text: Vec<Instruction>,
    /// Total data segment size in words, stack region included.
    pub datasize: u32,
    /// Initialized data; its length is the `dataend` boundary.
    pub data: Vec<Word>,
}

impl ProgramImage {
    /// Boundary between initialized data and the stack region.
    pub fn dataend(&self) -> u32 {
        self.data.len() as u32
    }

    /// Parse an image from a reader.
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] on a truncated image and
    /// with [`io::ErrorKind::InvalidData`] when the declared initialized
    /// region exceeds the data segment. Bytes past the declared payload are
    /// ignored.
    pub fn from_reader<R: Read>(reader: &mut R) -> io::Result<Self> {
        let textsize = read_u32(reader)?;
        let datasize = read_u32(reader)?;
        let dataend = read_u32(reader)?;

        if dataend > datasize {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "initialized data exceeds the declared data segment",
            ));
        }

        let mut text = Vec::new();
        for _ in 0..textsize {
            text.push(Instruction::new(read_u32(reader)?));
        }

        let mut data = Vec::new();
        for _ in 0..dataend {
            data.push(read_u32(reader)? as Word);
        }

        Ok(Self {
            text,
            datasize,
            data,
        })
    }

    /// Serialize in the exact on-disk layout.
    pub fn to_writer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_u32(writer, self.text.len() as u32)?;
        write_u32(writer, self.datasize)?;
        write_u32(writer, self.dataend())?;

        for instruction in &self.text {
            writer.write_all(&instruction.to_bytes())?;
        }
        for word in &self.data {
            write_u32(writer, *word as u32)?;
        }

        Ok(())
    }

    /// Read an image file.
    pub fn read<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        let image = Self::from_reader(&mut reader)?;

        tracing::debug!(
            textsize = image.text.len(),
            datasize = image.datasize,
            dataend = image.dataend(),
            "loaded program image"
        );

        Ok(image)
    }

    /// Write an image file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()
    }
}

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn write_u32<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}
