use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use crate::node::BinOp;

/// Numeric payload of a `Number` leaf.
///
/// Integers stay integers under `+`, `-`, `*` and non-negative integer powers.
/// Division always produces a float, and so does any integer overflow.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub const ZERO: Number = Number::Float(0.0);
    pub const ONE: Number = Number::Float(1.0);

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        self.as_f64() == 0.0
    }

    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Combine two numbers with the given operator.
    pub fn apply(self, op: BinOp, rhs: Number) -> Number {
        use Number::{Float, Int};

        match (op, self, rhs) {
            (BinOp::Add, Int(a), Int(b)) => a.checked_add(b).map_or(Float(a as f64 + b as f64), Int),
            (BinOp::Sub, Int(a), Int(b)) => a.checked_sub(b).map_or(Float(a as f64 - b as f64), Int),
            (BinOp::Mul, Int(a), Int(b)) => a.checked_mul(b).map_or(Float(a as f64 * b as f64), Int),
            (BinOp::Pow, Int(a), Int(b)) => u32::try_from(b)
                .ok()
                .and_then(|e| a.checked_pow(e))
                .map_or(Float((a as f64).powf(b as f64)), Int),
            (op, a, b) => {
                let (a, b) = (a.as_f64(), b.as_f64());
                Float(match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => a / b,
                    BinOp::Pow => a.powf(b),
                })
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // `Debug` keeps the fractional part: `1.0`, not `1`.
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        self.apply(BinOp::Add, rhs)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Self::Output {
        self.apply(BinOp::Sub, rhs)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Self::Output {
        self.apply(BinOp::Mul, rhs)
    }
}

impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Self) -> Self::Output {
        self.apply(BinOp::Div, rhs)
    }
}
