//! Instruction model and line decoder for the ELIN bytecode format.
//!
//! Bytecode is line-oriented text: one instruction per line, encoded as
//! whitespace-separated decimal integers. The first integer is the opcode
//! tag, the rest are operands. Lines that are blank or start with `#` are
//! comments and decode to [`DecodedLine::NoOp`].
//!
//! A line is decoded exactly once into an [`Instr`] variant carrying its
//! operands as typed fields; the interpreter never indexes into raw tokens.

use crate::error::DecodeError;
use crate::opcode::Opcode;

/// A decoded instruction, one variant per opcode.
///
/// `Unknown` preserves an unrecognized opcode tag so the interpreter can
/// report it and continue with the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    /// Push a constant. The line layout is `1 <any> <any> <any> <value>`;
    /// the three filler operands are discarded at decode time.
    Push { value: i64 },
    /// Push the value of the variable slot at `index`.
    Load { index: u32 },
    /// Pop the top of the stack into the variable slot at `index`.
    Store { index: u32 },
    /// Pop b, pop a, push a + b.
    Add,
    /// Pop b, pop a, push a - b.
    Sub,
    /// Pop b, pop a, push a * b.
    Mul,
    /// Pop b, pop a, push a / b (truncating), unless b is zero.
    Div,
    /// Report the value of the variable slot at `index`.
    Print { index: u32 },
    /// Stop execution.
    Halt,
    /// An opcode tag outside the instruction set.
    Unknown { tag: i64 },
}

/// The result of decoding one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedLine {
    /// A comment, blank, or whitespace-only line. Contributes nothing.
    NoOp,
    /// An executable instruction.
    Instr(Instr),
}

impl DecodedLine {
    /// Decode a single source line.
    ///
    /// `line_num` is the 1-based line number, used only for error reporting.
    ///
    /// Operand shape is validated here: missing operands, trailing extra
    /// tokens, non-integer tokens, and out-of-range variable indices are
    /// all [`DecodeError`]s. An unrecognized opcode tag is not an error;
    /// it decodes to [`Instr::Unknown`] with any operands ignored.
    pub fn decode(line: &str, line_num: usize) -> Result<Self, DecodeError> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(DecodedLine::NoOp);
        }

        let mut tokens = Vec::new();
        for word in line.split_whitespace() {
            let value: i64 = word.parse().map_err(|_| DecodeError::InvalidToken {
                line: line_num,
                token: word.to_string(),
            })?;
            tokens.push(value);
        }

        let Some((&tag, operands)) = tokens.split_first() else {
            return Ok(DecodedLine::NoOp);
        };

        let Some(opcode) = Opcode::from_tag(tag) else {
            return Ok(DecodedLine::Instr(Instr::Unknown { tag }));
        };

        let instr = match opcode {
            Opcode::Push => {
                // Filler operands 0..3 carry no meaning; the value is last.
                let value = expect_operand(operands, 3, line_num, opcode)?;
                expect_end(&operands[4..], line_num)?;
                Instr::Push { value }
            }
            Opcode::Load => {
                let index = expect_index(operands, 0, line_num, opcode)?;
                expect_end(&operands[1..], line_num)?;
                Instr::Load { index }
            }
            Opcode::Store => {
                let index = expect_index(operands, 0, line_num, opcode)?;
                expect_end(&operands[1..], line_num)?;
                Instr::Store { index }
            }
            Opcode::Print => {
                let index = expect_index(operands, 0, line_num, opcode)?;
                expect_end(&operands[1..], line_num)?;
                Instr::Print { index }
            }
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div | Opcode::Halt => {
                expect_end(operands, line_num)?;
                match opcode {
                    Opcode::Add => Instr::Add,
                    Opcode::Sub => Instr::Sub,
                    Opcode::Mul => Instr::Mul,
                    Opcode::Div => Instr::Div,
                    _ => Instr::Halt,
                }
            }
        };

        Ok(DecodedLine::Instr(instr))
    }
}

impl Instr {
    /// Encode this instruction as a canonical bytecode text line.
    ///
    /// PUSH fills its three discarded operands with zeros, matching the
    /// format the compiler emits.
    pub fn encode(&self) -> String {
        match self {
            Instr::Push { value } => format!("1 0 0 0 {value}"),
            Instr::Load { index } => format!("2 {index}"),
            Instr::Store { index } => format!("3 {index}"),
            Instr::Add => "4".to_string(),
            Instr::Sub => "5".to_string(),
            Instr::Mul => "6".to_string(),
            Instr::Div => "7".to_string(),
            Instr::Print { index } => format!("8 {index}"),
            Instr::Halt => "9".to_string(),
            Instr::Unknown { tag } => tag.to_string(),
        }
    }
}

/// Extract the operand at position `idx`, requiring positions 0..=idx to exist.
fn expect_operand(
    operands: &[i64],
    idx: usize,
    line: usize,
    opcode: Opcode,
) -> Result<i64, DecodeError> {
    operands
        .get(idx)
        .copied()
        .ok_or(DecodeError::MissingOperand {
            line,
            opcode: opcode.mnemonic(),
            expected: opcode.operand_count(),
        })
}

/// Extract a variable index operand, validating that it fits the index type.
fn expect_index(
    operands: &[i64],
    idx: usize,
    line: usize,
    opcode: Opcode,
) -> Result<u32, DecodeError> {
    let raw = expect_operand(operands, idx, line, opcode)?;
    u32::try_from(raw).map_err(|_| DecodeError::InvalidIndex { line, index: raw })
}

/// Check that no tokens remain past an opcode's layout.
fn expect_end(remaining: &[i64], line: usize) -> Result<(), DecodeError> {
    if let Some(extra) = remaining.first() {
        return Err(DecodeError::UnexpectedToken {
            line,
            token: extra.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(line: &str) -> Result<DecodedLine, DecodeError> {
        DecodedLine::decode(line, 1)
    }

    // --- No-op classification ---

    #[test]
    fn empty_line_is_noop() {
        assert_eq!(decode("").unwrap(), DecodedLine::NoOp);
    }

    #[test]
    fn whitespace_only_line_is_noop() {
        assert_eq!(decode("   \t  ").unwrap(), DecodedLine::NoOp);
    }

    #[test]
    fn comment_line_is_noop() {
        assert_eq!(decode("# Package: demo").unwrap(), DecodedLine::NoOp);
    }

    #[test]
    fn indented_comment_is_noop() {
        assert_eq!(decode("   # note").unwrap(), DecodedLine::NoOp);
    }

    // --- Instruction decoding ---

    #[test]
    fn decode_push() {
        assert_eq!(
            decode("1 0 0 0 42").unwrap(),
            DecodedLine::Instr(Instr::Push { value: 42 })
        );
    }

    #[test]
    fn decode_push_ignores_filler_values() {
        assert_eq!(
            decode("1 7 8 9 42").unwrap(),
            DecodedLine::Instr(Instr::Push { value: 42 })
        );
    }

    #[test]
    fn decode_push_negative_value() {
        assert_eq!(
            decode("1 0 0 0 -13").unwrap(),
            DecodedLine::Instr(Instr::Push { value: -13 })
        );
    }

    #[test]
    fn decode_load() {
        assert_eq!(
            decode("2 3").unwrap(),
            DecodedLine::Instr(Instr::Load { index: 3 })
        );
    }

    #[test]
    fn decode_store() {
        assert_eq!(
            decode("3 0").unwrap(),
            DecodedLine::Instr(Instr::Store { index: 0 })
        );
    }

    #[test]
    fn decode_bare_opcodes() {
        assert_eq!(decode("4").unwrap(), DecodedLine::Instr(Instr::Add));
        assert_eq!(decode("5").unwrap(), DecodedLine::Instr(Instr::Sub));
        assert_eq!(decode("6").unwrap(), DecodedLine::Instr(Instr::Mul));
        assert_eq!(decode("7").unwrap(), DecodedLine::Instr(Instr::Div));
        assert_eq!(decode("9").unwrap(), DecodedLine::Instr(Instr::Halt));
    }

    #[test]
    fn decode_print() {
        assert_eq!(
            decode("8 1").unwrap(),
            DecodedLine::Instr(Instr::Print { index: 1 })
        );
    }

    #[test]
    fn decode_with_leading_whitespace() {
        assert_eq!(
            decode("  2 0").unwrap(),
            DecodedLine::Instr(Instr::Load { index: 0 })
        );
    }

    #[test]
    fn decode_unknown_opcode() {
        assert_eq!(
            decode("42").unwrap(),
            DecodedLine::Instr(Instr::Unknown { tag: 42 })
        );
    }

    #[test]
    fn decode_unknown_opcode_keeps_operands_out_of_the_way() {
        // Operands of an unknown opcode are ignored, not validated.
        assert_eq!(
            decode("16 5").unwrap(),
            DecodedLine::Instr(Instr::Unknown { tag: 16 })
        );
    }

    // --- Decode errors ---

    #[test]
    fn short_push_is_rejected() {
        let err = decode("1 0 0").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingOperand {
                line: 1,
                opcode: "PUSH",
                expected: 4,
            }
        );
    }

    #[test]
    fn load_without_index_is_rejected() {
        let err = decode("2").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingOperand {
                line: 1,
                opcode: "LOAD",
                expected: 1,
            }
        );
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = decode("9 1").unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnexpectedToken {
                line: 1,
                token: "1".to_string(),
            }
        );
    }

    #[test]
    fn non_integer_token_is_rejected() {
        let err = decode("2 abc").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidToken {
                line: 1,
                token: "abc".to_string(),
            }
        );
    }

    #[test]
    fn negative_index_is_rejected() {
        let err = decode("3 -1").unwrap_err();
        assert_eq!(err, DecodeError::InvalidIndex { line: 1, index: -1 });
    }

    #[test]
    fn oversized_index_is_rejected() {
        let err = decode("2 4294967296").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidIndex {
                line: 1,
                index: 4_294_967_296,
            }
        );
    }

    #[test]
    fn error_reports_given_line_number() {
        let err = DecodedLine::decode("2", 17).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingOperand {
                line: 17,
                opcode: "LOAD",
                expected: 1,
            }
        );
    }

    // --- Encode ---

    #[test]
    fn encode_push_uses_zero_filler() {
        assert_eq!(Instr::Push { value: 42 }.encode(), "1 0 0 0 42");
    }

    #[test]
    fn encode_indexed_opcodes() {
        assert_eq!(Instr::Load { index: 2 }.encode(), "2 2");
        assert_eq!(Instr::Store { index: 0 }.encode(), "3 0");
        assert_eq!(Instr::Print { index: 7 }.encode(), "8 7");
    }

    #[test]
    fn encode_bare_opcodes() {
        assert_eq!(Instr::Add.encode(), "4");
        assert_eq!(Instr::Sub.encode(), "5");
        assert_eq!(Instr::Mul.encode(), "6");
        assert_eq!(Instr::Div.encode(), "7");
        assert_eq!(Instr::Halt.encode(), "9");
    }

    #[test]
    fn encode_decode_roundtrip() {
        let instrs = [
            Instr::Push { value: -7 },
            Instr::Load { index: 1 },
            Instr::Store { index: 9 },
            Instr::Add,
            Instr::Div,
            Instr::Print { index: 0 },
            Instr::Halt,
        ];
        for instr in instrs {
            let decoded = DecodedLine::decode(&instr.encode(), 1).unwrap();
            assert_eq!(decoded, DecodedLine::Instr(instr), "roundtrip for {instr:?}");
        }
    }
}
