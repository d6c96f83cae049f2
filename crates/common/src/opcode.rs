//! Opcode definitions for the ELIN instruction set.

/// Identifies the operation a bytecode line performs.
///
/// The discriminants are the decimal tags used in the text encoding:
/// the first integer token of an instruction line.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Push a constant onto the evaluation stack.
    Push = 1,
    /// Push a variable's value onto the evaluation stack.
    Load = 2,
    /// Pop the top of the stack into a variable slot.
    Store = 3,
    /// Pop two values, push their sum.
    Add = 4,
    /// Pop two values, push (second_popped - first_popped).
    Sub = 5,
    /// Pop two values, push their product.
    Mul = 6,
    /// Pop two values, push the truncating quotient.
    Div = 7,
    /// Report a variable's value.
    Print = 8,
    /// Stop execution, ignoring the rest of the program.
    Halt = 9,
}

/// All valid opcodes, in tag order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 9] = [
    Opcode::Push,
    Opcode::Load,
    Opcode::Store,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Print,
    Opcode::Halt,
];

impl Opcode {
    /// Look up an opcode by its text-encoding tag.
    ///
    /// Returns `None` for any tag outside 1..=9; the decoder turns those
    /// into [`Instr::Unknown`](crate::Instr::Unknown) rather than an error
    /// so the interpreter can report them and keep going.
    pub fn from_tag(tag: i64) -> Option<Self> {
        match tag {
            1 => Some(Opcode::Push),
            2 => Some(Opcode::Load),
            3 => Some(Opcode::Store),
            4 => Some(Opcode::Add),
            5 => Some(Opcode::Sub),
            6 => Some(Opcode::Mul),
            7 => Some(Opcode::Div),
            8 => Some(Opcode::Print),
            9 => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Returns the mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Push => "PUSH",
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Print => "PRINT",
            Opcode::Halt => "HALT",
        }
    }

    /// The number of operand tokens this opcode's line layout carries.
    pub fn operand_count(&self) -> usize {
        match self {
            Opcode::Push => 4,
            Opcode::Load | Opcode::Store | Opcode::Print => 1,
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div | Opcode::Halt => 0,
        }
    }
}
