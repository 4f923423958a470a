use super::Machine;
use crate::consts::NREGISTERS;
use crate::image::ProgramImage;

use simproc_asm::{CondCode, Instruction, Word};

impl Machine {
    /// Build a machine in its boot state.
    ///
    /// `data_init` fills the first cells of the data segment and fixes the
    /// `dataend` boundary; the remaining cells, the stack region included,
    /// start zeroed. Registers are zeroed, `pc` is 0, the condition code is
    /// unset and `sp` points at the last data cell.
    ///
    /// # Panics
    ///
    /// If `data_init` does not fit in `datasize` cells.
    pub fn load(text: Vec<Instruction>, datasize: usize, data_init: &[Word]) -> Self {
        assert!(
            data_init.len() <= datasize,
            "initialized data exceeds the data segment"
        );

        let mut data = vec![0; datasize];
        data[..data_init.len()].copy_from_slice(data_init);

        Self {
            text,
            data,
            dataend: data_init.len(),
            registers: [0; NREGISTERS],
            pc: 0,
            cc: CondCode::Unset,
            sp: datasize as i64 - 1,
        }
    }

    /// Build a machine from a loaded program image.
    pub fn from_image(image: ProgramImage) -> Self {
        let ProgramImage {
            text,
            datasize,
            data,
        } = image;

        Self::load(text, datasize as usize, &data)
    }

    /// Snapshot the machine into an image.
    ///
    /// Stack-region cells are not stored; reloading the image yields the
    /// same machine with the stack region zeroed.
    pub fn to_image(&self) -> ProgramImage {
        ProgramImage {
            text: self.text.clone(),
            datasize: self.data.len() as u32,
            data: self.data[..self.dataend].to_vec(),
        }
    }
}
