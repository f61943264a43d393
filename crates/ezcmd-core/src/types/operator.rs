//! Operators for primitive values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operators a primitive can be asked to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveOperator {
    // Arithmetic operators
    /// Addition / concatenation
    Plus,
    /// Subtraction / removal / truncation
    Minus,
    /// Multiplication / cross product
    Multiply,
    /// Division
    Divide,
    /// Remainder / vector rejection
    Mod,

    // Unary operators
    /// Logical or arithmetic negation
    Not,

    // Ordering
    /// Three-way comparison
    Compare,

    // Vector-only operators
    /// Orthogonal projection onto the operand
    Project,
    /// Scalar dot product
    DotProduct,
}

impl PrimitiveOperator {
    /// Returns true if this operator takes no operand
    pub fn is_unary(&self) -> bool {
        matches!(self, PrimitiveOperator::Not)
    }

    /// Returns true if this is one of the arithmetic operators
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            PrimitiveOperator::Plus
                | PrimitiveOperator::Minus
                | PrimitiveOperator::Multiply
                | PrimitiveOperator::Divide
                | PrimitiveOperator::Mod
        )
    }

    /// Returns true if only vectors accept this operator
    pub fn is_vector_only(&self) -> bool {
        matches!(self, PrimitiveOperator::Project | PrimitiveOperator::DotProduct)
    }
}

impl fmt::Display for PrimitiveOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveOperator::Plus => "plus",
            PrimitiveOperator::Minus => "minus",
            PrimitiveOperator::Multiply => "multiply",
            PrimitiveOperator::Divide => "divide",
            PrimitiveOperator::Mod => "mod",
            PrimitiveOperator::Not => "not",
            PrimitiveOperator::Compare => "compare",
            PrimitiveOperator::Project => "project",
            PrimitiveOperator::DotProduct => "dot",
        };
        f.write_str(name)
    }
}
