use simproc_vm::prelude::*;

use std::io::{self, Cursor};

fn sample_image() -> ProgramImage {
    ProgramImage {
        text: vec![op::load_imm(0, 1), op::halt()],
        datasize: 8,
        data: vec![3, -4],
    }
}

#[test]
fn writer_reader_round_trip() {
    let image = sample_image();

    let mut bytes = Vec::new();
    image.to_writer(&mut bytes).unwrap();
    let reloaded = ProgramImage::from_reader(&mut Cursor::new(&bytes)).unwrap();

    assert_eq!(reloaded, image);
}

#[test]
fn loader_zeroes_the_uninitialized_region() {
    let machine = Machine::from_image(sample_image());

    assert_eq!(&machine.data()[..2], &[3, -4]);
    assert_eq!(&machine.data()[2..], &[0; 6]);
    assert_eq!(machine.dataend(), 2);
    assert_eq!(machine.sp(), 7);
    assert_eq!(machine.pc(), 0);
    assert_eq!(machine.cc(), CondCode::Unset);
}

#[test]
fn image_fields_are_little_endian() {
    let mut bytes = Vec::new();
    for field in [1u32, 2, 1] {
        bytes.extend_from_slice(&field.to_le_bytes());
    }
    bytes.extend_from_slice(&op::halt().raw().to_le_bytes());
    bytes.extend_from_slice(&0x0102_0304u32.to_le_bytes());

    let image = ProgramImage::from_reader(&mut Cursor::new(&bytes)).unwrap();

    assert_eq!(image.text, vec![op::halt()]);
    assert_eq!(image.datasize, 2);
    assert_eq!(image.data, vec![0x0102_0304]);
}

#[test]
fn truncated_images_are_rejected() {
    let mut bytes = Vec::new();
    sample_image().to_writer(&mut bytes).unwrap();
    bytes.truncate(bytes.len() - 1);

    let err = ProgramImage::from_reader(&mut Cursor::new(&bytes)).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn oversized_dataend_is_rejected() {
    let mut bytes = Vec::new();
    for field in [0u32, 1, 2] {
        bytes.extend_from_slice(&field.to_le_bytes());
    }

    let err = ProgramImage::from_reader(&mut Cursor::new(&bytes)).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut bytes = Vec::new();
    sample_image().to_writer(&mut bytes).unwrap();
    bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

    let reloaded = ProgramImage::from_reader(&mut Cursor::new(&bytes)).unwrap();

    assert_eq!(reloaded, sample_image());
}

#[test]
fn dump_then_reload_zeroes_the_stack_region() {
    let text = vec![op::push_imm(9), op::halt()];
    let mut machine = Machine::load(text, 4, &[1, 2]);
    machine.run(&mut io::sink()).unwrap();
    assert_eq!(machine.data()[3], 9);

    let mut bytes = Vec::new();
    machine.to_image().to_writer(&mut bytes).unwrap();
    let reloaded = Machine::from_image(ProgramImage::from_reader(&mut Cursor::new(&bytes)).unwrap());

    assert_eq!(reloaded.text(), machine.text());
    assert_eq!(&reloaded.data()[..2], &machine.data()[..2]);
    assert_eq!(&reloaded.data()[2..], &[0, 0]);
    assert_eq!(reloaded.dataend(), machine.dataend());
}

#[test]
fn dump_memory_writes_a_loadable_image() {
    let path = std::env::temp_dir().join("simproc-dump-test.bin");

    let machine = Machine::load(vec![op::load_imm(0, 1), op::halt()], 4, &[5, 6]);
    let mut rendering = Vec::new();
    machine.dump_memory_at(&path, &mut rendering).unwrap();

    let reloaded = Machine::from_image(ProgramImage::read(&path).unwrap());
    std::fs::remove_file(&path).ok();

    assert_eq!(reloaded, machine);

    let rendering = String::from_utf8(rendering).unwrap();
    assert!(rendering.contains("Instruction text[] = {"));
    assert!(rendering.contains("Word data[] = {"));
    assert!(rendering.contains("unsigned textsize = 2;"));
    assert!(rendering.contains("unsigned datasize = 4;"));
    assert!(rendering.contains("unsigned dataend = 2;"));
}
