//! Primitive runtime values
//!
//! A `Primitive` is the scalar or vector value a script computes with. Every
//! binary operator first coerces its operand to the receiver's kind using the
//! `cast_*` functions below; a failed coercion aborts the operation.

use super::operator::PrimitiveOperator;
use super::vector::{format_vector, parse_vector};
use crate::error::{CoreError, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The kind of a primitive value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Boolean,
    Number,
    String,
    Vector,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Number => "number",
            PrimitiveType::String => "string",
            PrimitiveType::Vector => "vector",
        };
        f.write_str(name)
    }
}

/// Runtime primitive value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Boolean(bool),
    Number(f32),
    String(String),
    Vector(DVec3),
}

/// Coerce a primitive to a boolean
///
/// Numbers are true when strictly positive; strings must spell `true` or
/// `false` (case-insensitive).
pub fn cast_boolean(p: &Primitive) -> Result<bool> {
    match p {
        Primitive::Boolean(b) => Ok(*b),
        Primitive::Number(n) => Ok(*n > 0.0),
        Primitive::String(s) => parse_boolean(s).ok_or(CoreError::UnsupportedCoercion {
            from: PrimitiveType::String,
            to: PrimitiveType::Boolean,
        }),
        Primitive::Vector(_) => Err(CoreError::UnsupportedCoercion {
            from: PrimitiveType::Vector,
            to: PrimitiveType::Boolean,
        }),
    }
}

/// Coerce a primitive to a number
///
/// Vectors coerce to their magnitude.
pub fn cast_number(p: &Primitive) -> Result<f32> {
    match p {
        Primitive::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Primitive::Number(n) => Ok(*n),
        Primitive::String(s) => s
            .trim()
            .parse::<f32>()
            .map_err(|_| CoreError::MalformedNumber(s.clone())),
        Primitive::Vector(v) => Ok(v.length() as f32),
    }
}

/// Render a primitive in its canonical text form
pub fn cast_string(p: &Primitive) -> String {
    match p {
        Primitive::Boolean(b) => b.to_string(),
        Primitive::Number(n) => n.to_string(),
        Primitive::String(s) => s.clone(),
        Primitive::Vector(v) => format_vector(*v),
    }
}

/// Coerce a primitive to a vector
pub fn cast_vector(p: &Primitive) -> Result<DVec3> {
    match p {
        Primitive::Vector(v) => Ok(*v),
        Primitive::String(s) => parse_vector(s).ok_or(CoreError::UnsupportedCoercion {
            from: PrimitiveType::String,
            to: PrimitiveType::Vector,
        }),
        other => Err(CoreError::UnsupportedCoercion {
            from: other.primitive_type(),
            to: PrimitiveType::Vector,
        }),
    }
}

fn parse_boolean(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// NaN orders below every other value
fn compare_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()).reverse())
}

impl Primitive {
    /// Get the kind of this value
    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            Primitive::Boolean(_) => PrimitiveType::Boolean,
            Primitive::Number(_) => PrimitiveType::Number,
            Primitive::String(_) => PrimitiveType::String,
            Primitive::Vector(_) => PrimitiveType::Vector,
        }
    }

    fn unsupported(&self, operator: PrimitiveOperator) -> CoreError {
        CoreError::UnsupportedOperator {
            operator,
            kind: self.primitive_type(),
        }
    }

    fn unsupported_operand(&self, operator: PrimitiveOperator, operand: &Primitive) -> CoreError {
        CoreError::UnsupportedOperand {
            operator,
            kind: self.primitive_type(),
            operand: operand.primitive_type(),
        }
    }

    /// Whether this kind of value accepts `operator` at all
    pub fn supports(&self, operator: PrimitiveOperator) -> bool {
        match self {
            Primitive::Boolean(_) => operator.is_unary() || operator == PrimitiveOperator::Compare,
            Primitive::Number(_) => {
                operator.is_arithmetic()
                    || operator.is_unary()
                    || operator == PrimitiveOperator::Compare
            }
            Primitive::String(_) => {
                matches!(operator, PrimitiveOperator::Plus | PrimitiveOperator::Minus)
                    || operator == PrimitiveOperator::Compare
            }
            Primitive::Vector(_) => true,
        }
    }

    /// Apply `operator` with `operand`
    ///
    /// `Not` ignores the operand. `Compare` yields -1, 0 or 1 as a number.
    pub fn apply(&self, operator: PrimitiveOperator, operand: &Primitive) -> Result<Primitive> {
        if !self.supports(operator) {
            return Err(self.unsupported(operator));
        }

        match operator {
            PrimitiveOperator::Plus => self.plus(operand),
            PrimitiveOperator::Minus => self.minus(operand),
            PrimitiveOperator::Multiply => self.multiply(operand),
            PrimitiveOperator::Divide => self.divide(operand),
            PrimitiveOperator::Mod => self.modulo(operand),
            PrimitiveOperator::Not => self.negate(),
            PrimitiveOperator::Compare => {
                let ordering = self.compare(operand)?;
                Ok(Primitive::Number(ordering as i8 as f32))
            }
            PrimitiveOperator::Project => self.project(operand),
            PrimitiveOperator::DotProduct => self.dot_product(operand),
        }
    }

    pub fn plus(&self, p: &Primitive) -> Result<Primitive> {
        match self {
            Primitive::Number(n) => Ok(Primitive::Number(n + cast_number(p)?)),
            Primitive::String(s) => Ok(Primitive::String(format!("{}{}", s, cast_string(p)))),
            Primitive::Vector(v) => Ok(Primitive::Vector(*v + cast_vector(p)?)),
            Primitive::Boolean(_) => Err(self.unsupported(PrimitiveOperator::Plus)),
        }
    }

    /// Subtract `p`
    ///
    /// On strings, a string operand removes its first occurrence and a
    /// number operand keeps that many leading characters (empty unless the
    /// count is shorter than the string).
    pub fn minus(&self, p: &Primitive) -> Result<Primitive> {
        match self {
            Primitive::Number(n) => Ok(Primitive::Number(n - cast_number(p)?)),
            Primitive::String(s) => match p {
                Primitive::String(removed) => Ok(Primitive::String(s.replacen(removed.as_str(), "", 1))),
                Primitive::Number(count) => {
                    let length = s.chars().count();
                    let truncated = if *count < 0.0 || *count as usize >= length {
                        String::new()
                    } else {
                        s.chars().take(*count as usize).collect()
                    };
                    Ok(Primitive::String(truncated))
                }
                other => Err(self.unsupported_operand(PrimitiveOperator::Minus, other)),
            },
            Primitive::Vector(v) => Ok(Primitive::Vector(*v - cast_vector(p)?)),
            Primitive::Boolean(_) => Err(self.unsupported(PrimitiveOperator::Minus)),
        }
    }

    /// Multiply by `p`
    ///
    /// Vector × vector is the cross product; vector × number scales.
    pub fn multiply(&self, p: &Primitive) -> Result<Primitive> {
        match self {
            Primitive::Number(n) => Ok(Primitive::Number(n * cast_number(p)?)),
            Primitive::Vector(v) => match p {
                Primitive::Vector(other) => Ok(Primitive::Vector(v.cross(*other))),
                Primitive::Number(scale) => Ok(Primitive::Vector(*v * f64::from(*scale))),
                other => Err(self.unsupported_operand(PrimitiveOperator::Multiply, other)),
            },
            Primitive::Boolean(_) | Primitive::String(_) => {
                Err(self.unsupported(PrimitiveOperator::Multiply))
            }
        }
    }

    /// Divide by `p`; vectors divide by the operand's magnitude
    pub fn divide(&self, p: &Primitive) -> Result<Primitive> {
        match self {
            Primitive::Number(n) => Ok(Primitive::Number(n / cast_number(p)?)),
            Primitive::Vector(v) => Ok(Primitive::Vector(*v / f64::from(cast_number(p)?))),
            Primitive::Boolean(_) | Primitive::String(_) => {
                Err(self.unsupported(PrimitiveOperator::Divide))
            }
        }
    }

    /// Floating-point remainder on numbers; on vectors, the rejection of
    /// this vector from the operand (the component orthogonal to it)
    pub fn modulo(&self, p: &Primitive) -> Result<Primitive> {
        match self {
            Primitive::Number(n) => Ok(Primitive::Number(n % cast_number(p)?)),
            Primitive::Vector(v) => Ok(Primitive::Vector(v.reject_from(cast_vector(p)?))),
            Primitive::Boolean(_) | Primitive::String(_) => {
                Err(self.unsupported(PrimitiveOperator::Mod))
            }
        }
    }

    /// Logical negation for booleans, sign flip for numbers and vectors
    pub fn negate(&self) -> Result<Primitive> {
        match self {
            Primitive::Boolean(b) => Ok(Primitive::Boolean(!b)),
            Primitive::Number(n) => Ok(Primitive::Number(-n)),
            Primitive::Vector(v) => Ok(Primitive::Vector(-*v)),
            Primitive::String(_) => Err(self.unsupported(PrimitiveOperator::Not)),
        }
    }

    /// Order this value against `p`
    ///
    /// Vectors compare by magnitude against another vector or a number.
    pub fn compare(&self, p: &Primitive) -> Result<Ordering> {
        match self {
            Primitive::Boolean(b) => Ok(b.cmp(&cast_boolean(p)?)),
            Primitive::Number(n) => Ok(compare_floats(f64::from(*n), f64::from(cast_number(p)?))),
            Primitive::String(s) => Ok(s.as_str().cmp(cast_string(p).as_str())),
            Primitive::Vector(v) => match p {
                Primitive::Vector(other) => Ok(compare_floats(v.length(), other.length())),
                Primitive::Number(n) => Ok(compare_floats(
                    f64::from(v.length() as f32),
                    f64::from(*n),
                )),
                other => Err(self.unsupported_operand(PrimitiveOperator::Compare, other)),
            },
        }
    }

    /// Orthogonal projection of this vector onto `p`
    pub fn project(&self, p: &Primitive) -> Result<Primitive> {
        match self {
            Primitive::Vector(v) => Ok(Primitive::Vector(v.project_onto(cast_vector(p)?))),
            _ => Err(self.unsupported(PrimitiveOperator::Project)),
        }
    }

    /// Scalar dot product of this vector with `p`
    pub fn dot_product(&self, p: &Primitive) -> Result<Primitive> {
        match self {
            Primitive::Vector(v) => Ok(Primitive::Number(v.dot(cast_vector(p)?) as f32)),
            _ => Err(self.unsupported(PrimitiveOperator::DotProduct)),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cast_string(self))
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Boolean(value)
    }
}

impl From<f32> for Primitive {
    fn from(value: f32) -> Self {
        Primitive::Number(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::String(value)
    }
}

impl From<DVec3> for Primitive {
    fn from(value: DVec3) -> Self {
        Primitive::Vector(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_boolean() {
        assert_eq!(cast_boolean(&Primitive::Number(0.5)), Ok(true));
        assert_eq!(cast_boolean(&Primitive::Number(0.0)), Ok(false));
        assert_eq!(cast_boolean(&Primitive::Number(-3.0)), Ok(false));
        assert_eq!(cast_boolean(&"True".into()), Ok(true));
        assert_eq!(cast_boolean(&" false ".into()), Ok(false));
        assert_eq!(
            cast_boolean(&"maybe".into()),
            Err(CoreError::UnsupportedCoercion {
                from: PrimitiveType::String,
                to: PrimitiveType::Boolean,
            })
        );
        assert!(cast_boolean(&Primitive::Vector(DVec3::ONE)).is_err());
    }

    #[test]
    fn test_cast_number() {
        assert_eq!(cast_number(&Primitive::Boolean(true)), Ok(1.0));
        assert_eq!(cast_number(&Primitive::Boolean(false)), Ok(0.0));
        assert_eq!(cast_number(&"2.5".into()), Ok(2.5));
        assert_eq!(
            cast_number(&"two".into()),
            Err(CoreError::MalformedNumber("two".to_string()))
        );
        assert_eq!(cast_number(&Primitive::Vector(DVec3::new(3.0, 4.0, 0.0))), Ok(5.0));
    }

    #[test]
    fn test_cast_string() {
        assert_eq!(cast_string(&Primitive::Boolean(true)), "true");
        assert_eq!(cast_string(&Primitive::Number(5.0)), "5");
        assert_eq!(cast_string(&Primitive::Number(1.5)), "1.5");
        assert_eq!(cast_string(&Primitive::Vector(DVec3::new(1.0, -2.0, 3.5))), "1:-2:3.5");
    }

    #[test]
    fn test_cast_vector() {
        assert_eq!(cast_vector(&"1:2:3".into()), Ok(DVec3::new(1.0, 2.0, 3.0)));
        assert_eq!(
            cast_vector(&Primitive::Number(1.0)),
            Err(CoreError::UnsupportedCoercion {
                from: PrimitiveType::Number,
                to: PrimitiveType::Vector,
            })
        );
        assert!(cast_vector(&"not a vector".into()).is_err());
    }

    #[test]
    fn test_boolean_operators() {
        let t = Primitive::Boolean(true);
        assert_eq!(t.negate(), Ok(Primitive::Boolean(false)));
        assert_eq!(t.compare(&Primitive::Boolean(false)), Ok(Ordering::Greater));
        assert_eq!(t.compare(&Primitive::Number(1.0)), Ok(Ordering::Equal));

        for op in [
            PrimitiveOperator::Plus,
            PrimitiveOperator::Minus,
            PrimitiveOperator::Multiply,
            PrimitiveOperator::Divide,
            PrimitiveOperator::Mod,
        ] {
            assert_eq!(
                t.apply(op, &Primitive::Boolean(true)),
                Err(CoreError::UnsupportedOperator {
                    operator: op,
                    kind: PrimitiveType::Boolean,
                })
            );
        }
    }

    #[test]
    fn test_number_operators() {
        let n = Primitive::Number(5.5);
        assert_eq!(n.plus(&Primitive::Number(1.0)), Ok(Primitive::Number(6.5)));
        assert_eq!(n.minus(&"0.5".into()), Ok(Primitive::Number(5.0)));
        assert_eq!(n.multiply(&Primitive::Boolean(true)), Ok(Primitive::Number(5.5)));
        assert_eq!(n.divide(&Primitive::Number(2.0)), Ok(Primitive::Number(2.75)));
        assert_eq!(n.modulo(&Primitive::Number(2.0)), Ok(Primitive::Number(1.5)));
        assert_eq!(n.negate(), Ok(Primitive::Number(-5.5)));
        assert_eq!(n.compare(&Primitive::Number(6.0)), Ok(Ordering::Less));
        assert_eq!(
            n.plus(&"abc".into()),
            Err(CoreError::MalformedNumber("abc".to_string()))
        );
    }

    #[test]
    fn test_number_compare_nan() {
        let nan = Primitive::Number(f32::NAN);
        assert_eq!(nan.compare(&Primitive::Number(0.0)), Ok(Ordering::Less));
        assert_eq!(Primitive::Number(0.0).compare(&nan), Ok(Ordering::Greater));
    }

    #[test]
    fn test_string_plus() {
        let s = Primitive::from("pos ");
        assert_eq!(s.plus(&Primitive::Number(3.0)), Ok("pos 3".into()));
        assert_eq!(
            s.plus(&Primitive::Vector(DVec3::new(1.0, 2.0, 3.0))),
            Ok("pos 1:2:3".into())
        );
    }

    #[test]
    fn test_string_minus() {
        let s = Primitive::from("abcabc");
        assert_eq!(s.minus(&"bc".into()), Ok("aabc".into()));
        assert_eq!(s.minus(&Primitive::Number(2.0)), Ok("ab".into()));
        assert_eq!(s.minus(&Primitive::Number(5.0)), Ok("abcab".into()));
        assert_eq!(s.minus(&Primitive::Number(6.0)), Ok("".into()));
        assert_eq!(s.minus(&Primitive::Number(-1.0)), Ok("".into()));
        assert_eq!(s.minus(&Primitive::Number(7.0)), Ok("".into()));
        assert_eq!(
            s.minus(&Primitive::Boolean(true)),
            Err(CoreError::UnsupportedOperand {
                operator: PrimitiveOperator::Minus,
                kind: PrimitiveType::String,
                operand: PrimitiveType::Boolean,
            })
        );
    }

    #[test]
    fn test_string_unsupported() {
        let s = Primitive::from("text");
        assert!(s.multiply(&Primitive::Number(2.0)).is_err());
        assert!(s.divide(&Primitive::Number(2.0)).is_err());
        assert!(s.modulo(&Primitive::Number(2.0)).is_err());
        assert_eq!(
            s.negate(),
            Err(CoreError::UnsupportedOperator {
                operator: PrimitiveOperator::Not,
                kind: PrimitiveType::String,
            })
        );
    }

    #[test]
    fn test_vector_arithmetic() {
        let v = Primitive::Vector(DVec3::new(1.0, 0.0, 0.0));
        let w = Primitive::Vector(DVec3::new(0.0, 1.0, 0.0));

        assert_eq!(v.plus(&w), Ok(Primitive::Vector(DVec3::new(1.0, 1.0, 0.0))));
        assert_eq!(v.minus(&"1:1:1".into()), Ok(Primitive::Vector(DVec3::new(0.0, -1.0, -1.0))));
        assert_eq!(v.multiply(&w), Ok(Primitive::Vector(DVec3::new(0.0, 0.0, 1.0))));
        assert_eq!(
            v.multiply(&Primitive::Number(3.0)),
            Ok(Primitive::Vector(DVec3::new(3.0, 0.0, 0.0)))
        );
        assert_eq!(v.negate(), Ok(Primitive::Vector(DVec3::new(-1.0, 0.0, 0.0))));
        assert!(v.multiply(&"2".into()).is_err());
    }

    #[test]
    fn test_vector_divide_by_magnitude() {
        let v = Primitive::Vector(DVec3::new(6.0, 0.0, 0.0));
        assert_eq!(
            v.divide(&Primitive::Number(2.0)),
            Ok(Primitive::Vector(DVec3::new(3.0, 0.0, 0.0)))
        );
        assert_eq!(
            v.divide(&Primitive::Vector(DVec3::new(0.0, 3.0, 4.0))),
            Ok(Primitive::Vector(DVec3::new(1.2, 0.0, 0.0)))
        );
    }

    #[test]
    fn test_vector_rejection_and_projection() {
        let v = Primitive::Vector(DVec3::new(3.0, 4.0, 0.0));
        let axis = Primitive::Vector(DVec3::new(2.0, 0.0, 0.0));

        assert_eq!(v.modulo(&axis), Ok(Primitive::Vector(DVec3::new(0.0, 4.0, 0.0))));
        assert_eq!(v.project(&axis), Ok(Primitive::Vector(DVec3::new(3.0, 0.0, 0.0))));
        assert_eq!(v.dot_product(&axis), Ok(Primitive::Number(6.0)));
        assert!(Primitive::Number(1.0).project(&axis).is_err());
        assert!(Primitive::from("1:2:3").dot_product(&axis).is_err());
    }

    #[test]
    fn test_vector_compare() {
        let v = Primitive::Vector(DVec3::new(3.0, 4.0, 0.0));
        assert_eq!(v.compare(&Primitive::Number(5.0)), Ok(Ordering::Equal));
        assert_eq!(v.compare(&Primitive::Vector(DVec3::new(0.0, 0.0, 6.0))), Ok(Ordering::Less));
        assert!(v.compare(&Primitive::Boolean(true)).is_err());
    }

    #[test]
    fn test_apply_compare_as_number() {
        let n = Primitive::Number(2.0);
        assert_eq!(
            n.apply(PrimitiveOperator::Compare, &Primitive::Number(1.0)),
            Ok(Primitive::Number(1.0))
        );
        assert_eq!(
            n.apply(PrimitiveOperator::Compare, &Primitive::Number(3.0)),
            Ok(Primitive::Number(-1.0))
        );
        assert_eq!(
            n.apply(PrimitiveOperator::Not, &Primitive::Boolean(false)),
            Ok(Primitive::Number(-2.0))
        );
    }

    #[test]
    fn test_supports_by_kind() {
        let boolean = Primitive::Boolean(true);
        assert!(boolean.supports(PrimitiveOperator::Not));
        assert!(boolean.supports(PrimitiveOperator::Compare));
        assert!(!boolean.supports(PrimitiveOperator::Plus));

        let number = Primitive::Number(1.0);
        assert!(number.supports(PrimitiveOperator::Mod));
        assert!(number.supports(PrimitiveOperator::Not));
        assert!(!number.supports(PrimitiveOperator::DotProduct));

        let string = Primitive::from("abc");
        assert!(string.supports(PrimitiveOperator::Minus));
        assert!(!string.supports(PrimitiveOperator::Not));
        assert!(!string.supports(PrimitiveOperator::Project));

        assert!(Primitive::Vector(DVec3::X).supports(PrimitiveOperator::Project));
    }

    #[test]
    fn test_apply_rejects_unsupported_operator() {
        assert_eq!(
            Primitive::Number(2.0).apply(PrimitiveOperator::Project, &Primitive::Number(1.0)),
            Err(CoreError::UnsupportedOperator {
                operator: PrimitiveOperator::Project,
                kind: PrimitiveType::Number,
            })
        );
        assert_eq!(
            Primitive::from("x").apply(PrimitiveOperator::Divide, &Primitive::Number(1.0)),
            Err(CoreError::UnsupportedOperator {
                operator: PrimitiveOperator::Divide,
                kind: PrimitiveType::String,
            })
        );
    }

    #[test]
    fn test_display_uses_canonical_form() {
        assert_eq!(Primitive::Vector(DVec3::new(1.0, 2.0, 3.0)).to_string(), "1:2:3");
        assert_eq!(Primitive::Boolean(false).to_string(), "false");
    }
}
