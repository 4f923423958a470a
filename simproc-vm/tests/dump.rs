use simproc_vm::prelude::*;

use std::io;

fn halted_machine() -> Machine {
    let text = vec![op::load_imm(0, 5), op::halt()];
    let mut machine = Machine::load(text, 3, &[1, -2]);
    machine.run(&mut io::sink()).unwrap();
    machine
}

fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
{
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn cpu_dump_layout() {
    let machine = halted_machine();
    let text = render(|out| machine.print_cpu(out));

    assert!(text.contains("*** CPU ***"));
    assert!(text.contains("PC: 0x00000002\tCC: P"));
    assert!(text.contains("R00: 0x00000005 5"));
    assert!(text.contains("R15: 0x00000000 0"));
}

#[test]
fn data_dump_layout() {
    let machine = halted_machine();
    let text = render(|out| machine.print_data(out));

    assert!(text.contains("*** DATA (size: 3, end = 0x00000002 (2)) ***"));
    assert!(text.contains("0x0000: 0x00000001 1"));
    assert!(text.contains("0x0001: 0xfffffffe -2"));
    assert!(text.contains("0x0002: 0x00000000 0"));
}

#[test]
fn program_dump_disassembles_each_instruction() {
    let machine = halted_machine();
    let text = render(|out| machine.print_program(out));

    assert!(text.contains("*** PROGRAM (size: 2) ***"));
    let expected = format!("0x0000: 0x{:08x}\tLOAD R00, #5", op::load_imm(0, 5).raw());
    assert!(text.contains(&expected));
    let expected = format!("0x0001: 0x{:08x}\tHALT", op::halt().raw());
    assert!(text.contains(&expected));
}

#[test]
fn registers_print_three_per_line() {
    let machine = halted_machine();
    let text = render(|out| machine.print_cpu(out));

    let grid_line = text
        .lines()
        .find(|line| line.starts_with("R00:"))
        .expect("register grid");
    assert_eq!(grid_line.matches("R").count(), 3);
}
