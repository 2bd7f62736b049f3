//! Value model for the operand stack
//!
//! The stack stores tagged values: plain machine words, or handles into
//! the machine-owned string table. Handles are opaque; the only producer
//! is the string-literal loading instruction, so a live handle always
//! indexes the table.

use crate::instruction::Instruction;
use thiserror::Error;

/// Machine word: the uniform numeric value type
///
/// Arithmetic wraps on overflow. Booleans are encoded as words 0/1; any
/// non-zero word counts as true for the logical instructions.
pub type Word = u64;

/// Handle into a machine's string table
///
/// Opaque outside the crate: generated programs receive handles from
/// [`Machine::push_str`](crate::machine::Machine::push_str) and cannot
/// forge them from raw words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrId(pub(crate) u32);

/// A value slot on the operand stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Numeric machine word
    Word(Word),
    /// Reference to an interned string
    Str(StrId),
}

impl Value {
    /// Kind name for fault reports and tests
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Word(_) => "word",
            Value::Str(_) => "string",
        }
    }

    /// The word payload, if this is a numeric value
    pub fn as_word(&self) -> Option<Word> {
        match self {
            Value::Word(w) => Some(*w),
            Value::Str(_) => None,
        }
    }
}

impl From<Word> for Value {
    fn from(w: Word) -> Self {
        Value::Word(w)
    }
}

/// Fatal execution fault
///
/// Every variant carries the instruction that triggered it. Faults abort
/// execution: they propagate to the entry layer, are reported once, and
/// are never caught or retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Push attempted with the stack at capacity
    #[error("Stack overflow")]
    StackOverflow { instruction: Instruction },
    /// Pop or peek attempted on an empty stack
    #[error("Stack underflow")]
    StackUnderflow { instruction: Instruction },
    /// Division or remainder with a zero right-hand operand
    #[error("Division by zero")]
    DivisionByZero { instruction: Instruction },
    /// Operand kind mismatch at the word/handle boundary
    #[error("Invalid reference")]
    InvalidReference { instruction: Instruction },
}

impl Fault {
    /// The instruction that triggered this fault
    pub fn instruction(&self) -> Instruction {
        match self {
            Fault::StackOverflow { instruction } => *instruction,
            Fault::StackUnderflow { instruction } => *instruction,
            Fault::DivisionByZero { instruction } => *instruction,
            Fault::InvalidReference { instruction } => *instruction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Word(7).type_name(), "word");
        assert_eq!(Value::Str(StrId(0)).type_name(), "string");
    }

    #[test]
    fn test_as_word() {
        assert_eq!(Value::Word(7).as_word(), Some(7));
        assert_eq!(Value::Str(StrId(0)).as_word(), None);
    }

    #[test]
    fn test_fault_carries_instruction() {
        let fault = Fault::DivisionByZero {
            instruction: Instruction::Div,
        };
        assert_eq!(fault.instruction(), Instruction::Div);
        assert_eq!(fault.to_string(), "Division by zero");
    }
}
