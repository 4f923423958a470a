use proptest::prelude::*;
use simproc_asm::{op, AddrMode, Condition, Instruction, ModeFlags, Opcode};

proptest! {
    #[test]
    fn raw_round_trip(raw in any::<u32>()) {
        let instr = Instruction::new(raw);

        prop_assert_eq!(instr.raw(), raw);
        prop_assert_eq!(Instruction::from_bytes(instr.to_bytes()), instr);
        prop_assert_eq!(instr.opcode(), (raw >> 26) as u8);
        prop_assert_eq!(instr.regcond(), ((raw >> 16) & 0xff) as u8);
        prop_assert_eq!(instr.payload(), (raw & 0xffff) as u16);
    }

    #[test]
    fn mode_partitions_every_word(raw in any::<u32>()) {
        let instr = Instruction::new(raw);

        let expected = match (instr.is_immediate(), instr.is_indexed()) {
            (false, false) => AddrMode::Absolute(instr.absolute_address()),
            (true, false) => AddrMode::Immediate(instr.payload()),
            (false, true) => {
                let (rindex, offset) = instr.indexed();
                AddrMode::Indexed { rindex, offset }
            }
            (true, true) => AddrMode::Reserved,
        };

        prop_assert_eq!(instr.mode(), expected);
    }
}

#[test]
fn bytes_are_little_endian() {
    let instr = Instruction::new(0x0807_0605);
    assert_eq!(instr.to_bytes(), [0x05, 0x06, 0x07, 0x08]);
}

#[test]
fn constructors_decode_to_their_fields() {
    let instr = op::load(3, 0x20);
    assert_eq!(instr.opcode(), Opcode::Load as u8);
    assert_eq!(instr.regcond(), 3);
    assert_eq!(instr.mode(), AddrMode::Absolute(0x20));
    assert_eq!(instr.flags(), ModeFlags::empty());

    let instr = op::load_imm(5, 0xffff);
    assert_eq!(instr.mode(), AddrMode::Immediate(0xffff));
    assert_eq!(instr.immediate_word(), -1);
    assert_eq!(instr.flags(), ModeFlags::IMMEDIATE);

    let instr = op::add_idx(3, 7, -12);
    assert_eq!(instr.opcode(), Opcode::Add as u8);
    assert_eq!(instr.regcond(), 3);
    assert_eq!(
        instr.mode(),
        AddrMode::Indexed {
            rindex: 7,
            offset: -12
        }
    );
    assert_eq!(instr.flags(), ModeFlags::INDEXED);

    let instr = op::branch(Condition::Ge, 0x1234);
    assert_eq!(instr.opcode(), Opcode::Branch as u8);
    assert_eq!(instr.regcond(), Condition::Ge as u8);
    assert_eq!(instr.mode(), AddrMode::Absolute(0x1234));

    let instr = op::ret();
    assert_eq!(instr.opcode(), Opcode::Ret as u8);
    assert_eq!(instr.payload(), 0);
}

#[test]
fn offset_sign_extension() {
    assert_eq!(op::load_idx(0, 1, -1).indexed(), (1, -1));
    assert_eq!(op::load_idx(0, 15, 2047).indexed(), (15, 2047));
    assert_eq!(op::load_idx(0, 0, -2048).indexed(), (0, -2048));
    assert_eq!(op::load_idx(0, 9, 0).indexed(), (9, 0));
}

#[test]
fn reserved_mode_is_exposed_as_such() {
    let instr = Instruction::new(op::load_imm(0, 7).raw() | 1 << 24);
    assert_eq!(instr.mode(), AddrMode::Reserved);
    assert_eq!(instr.flags(), ModeFlags::IMMEDIATE | ModeFlags::INDEXED);
}

#[test]
fn immediate_words_sign_extend_from_sixteen_bits() {
    assert_eq!(op::load_imm(0, 5).immediate_word(), 5);
    assert_eq!(op::load_imm(0, 0x7fff).immediate_word(), 32767);
    assert_eq!(op::load_imm(0, 0x8000).immediate_word(), -32768);
}
