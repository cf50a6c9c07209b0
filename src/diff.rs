//! Symbolic differentiation as a reduction.
//!
//! Each node kind has one rule, applied bottom-up by [`Exprs::reduce`], so the derivative of a
//! shared subexpression is computed once. Rules see the original operands `a`, `b` and their
//! derivatives `da`, `db`:
//!
//! ```text
//! d(c)     = 0
//! d(v)     = 1 if v is the variable, else 0
//! d(a + b) = da + db
//! d(a * b) = da * b + db * a
//! d(a / b) = (da * b - a * db) / b ^ 2
//! d(a ^ b) = da * b * a ^ (b - 1)        (b treated as constant)
//! ```
//!
//! There is no rule for `a - b`; differentiating it is an [`Error::Dispatch`].
//!
//! Derivatives are [`Value`]s: bare numbers combine numerically, so `d(3 + 5)` is the number
//! `0.0` and not an expression.

use log::debug;

use crate::error::{Error, Result};
use crate::exprs::Exprs;
use crate::node::{BinOp, Node, Value};
use crate::number::Number;
use crate::reference::ExprId;

impl Exprs {
    /// Differentiate `expr` with respect to the symbol named `var`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symdiff_rs::exprs::Exprs;
    ///
    /// let exprs = Exprs::default();
    /// let x = exprs.var("x");
    /// let e = exprs.mul(x, x);
    /// let d = exprs.differentiate(e, "x").unwrap();
    /// assert_eq!(exprs.render_value(d), "1.0 * x + 1.0 * x");
    /// ```
    pub fn differentiate(&self, expr: ExprId, var: &str) -> Result<Value> {
        debug!("differentiate(expr = {}, var = {:?})", expr, var);
        self.reduce(expr, |e, ds, var| self.derivative_step(e, ds, var), var)
    }

    fn derivative_step(&self, e: ExprId, ds: &[Value], var: &str) -> Result<Value> {
        let node = self.node(e);
        let value = match node {
            Node::Number(_) => Value::Number(Number::ZERO),
            Node::Symbol(ref name) => {
                if name == var {
                    Value::Number(Number::ONE)
                } else {
                    Value::Number(Number::ZERO)
                }
            }
            Node::Add(..) => {
                let (da, db) = (ds[0], ds[1]);
                self.apply(BinOp::Add, da, db)
            }
            Node::Mul(a, b) => {
                let (da, db) = (ds[0], ds[1]);
                let left = self.apply(BinOp::Mul, da, b);
                let right = self.apply(BinOp::Mul, db, a);
                self.apply(BinOp::Add, left, right)
            }
            Node::Div(a, b) => {
                let (da, db) = (ds[0], ds[1]);
                let left = self.apply(BinOp::Mul, da, b);
                let right = self.apply(BinOp::Mul, a, db);
                let numerator = self.apply(BinOp::Sub, left, right);
                let denominator = self.apply(BinOp::Pow, b, 2);
                self.apply(BinOp::Div, numerator, denominator)
            }
            Node::Pow(a, b) => {
                let da = ds[0];
                let scaled = self.apply(BinOp::Mul, da, b);
                let exponent = self.apply(BinOp::Sub, b, 1);
                let power = self.apply(BinOp::Pow, a, exponent);
                self.apply(BinOp::Mul, scaled, power)
            }
            Node::Sub(..) => {
                debug!("differentiate: no rule for {} at {}", node.kind(), e);
                return Err(Error::Dispatch { kind: node.kind() });
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::node::NodeKind;

    #[test]
    fn test_constant() {
        let exprs = Exprs::default();
        for n in [exprs.num(0), exprs.num(7), exprs.num(-2.5)] {
            assert_eq!(exprs.differentiate(n, "x").unwrap(), Value::Number(Number::Float(0.0)));
        }
    }

    #[test]
    fn test_symbol() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let y = exprs.var("y");
        assert_eq!(exprs.differentiate(x, "x").unwrap(), Value::Number(Number::ONE));
        assert_eq!(exprs.differentiate(y, "x").unwrap(), Value::Number(Number::ZERO));
        assert_eq!(exprs.differentiate(y, "y").unwrap(), Value::Number(Number::ONE));
    }

    #[test]
    fn test_sum_of_constants_folds() {
        let exprs = Exprs::default();
        let e = exprs.add(exprs.num(3), exprs.num(5));
        let before = exprs.len();
        assert_eq!(exprs.differentiate(e, "x").unwrap(), Value::Number(Number::ZERO));
        assert_eq!(exprs.len(), before);
    }

    #[test]
    fn test_sum_folds_symbol_derivatives() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let e = exprs.add(x, x);
        let d = exprs.differentiate(e, "x").unwrap();
        assert_eq!(d, Value::Number(Number::Float(2.0)));
    }

    #[test]
    fn test_product() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let e = exprs.mul(x, x);
        let d = exprs.differentiate(e, "x").unwrap();
        assert_eq!(exprs.render_value(d), "1.0 * x + 1.0 * x");
    }

    #[test]
    fn test_product_uses_original_operands() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let y = exprs.var("y");
        let e = exprs.mul(x, y);
        let d = exprs.differentiate(e, "x").unwrap();
        let Node::Add(l, r) = exprs.node(d.as_expr().unwrap()) else {
            panic!("expected Add");
        };
        assert_eq!(exprs.operands(l)[1], y);
        assert_eq!(exprs.operands(r)[1], x);
        assert_eq!(exprs.render_value(d), "1.0 * y + 0.0 * x");
    }

    #[test]
    fn test_quotient() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let y = exprs.var("y");
        let e = exprs.div(x, y);
        let d = exprs.differentiate(e, "x").unwrap();
        assert_eq!(exprs.render_value(d), "(1.0 * y - x * 0.0) / y ^ 2");
    }

    #[test]
    fn test_power_constant_exponent() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let e = exprs.pow(x, 3);
        let d = exprs.differentiate(e, "x").unwrap();
        assert_eq!(exprs.render_value(d), "1.0 * 3 * x ^ (3 - 1)");
    }

    #[test]
    fn test_power_ignores_exponent_derivative() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let e = exprs.pow(2, x);
        let d = exprs.differentiate(e, "x").unwrap();
        assert_eq!(exprs.render_value(d), "0.0 * x * 2 ^ (x - 1)");
    }

    #[test]
    fn test_sub_has_no_rule() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let e = exprs.sub(x, 1);
        assert_eq!(
            exprs.differentiate(e, "x"),
            Err(Error::Dispatch { kind: NodeKind::Sub })
        );
    }

    #[test]
    fn test_nested_sub_fails() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let e = exprs.mul(exprs.sub(x, 1), x);
        assert!(matches!(
            exprs.differentiate(e, "x"),
            Err(Error::Dispatch { kind: NodeKind::Sub })
        ));
    }

    #[test]
    fn test_shared_subexpression_differentiated_once() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let mut e = x;
        for _ in 0..40 {
            e = exprs.mul(e, e);
        }
        let before = exprs.len();
        let d = exprs.differentiate(e, "x").unwrap();
        assert!(d.as_expr().is_some());
        // Three new nodes per level (two products and a sum), plus the two lifted literals
        // of the innermost level.
        assert_eq!(exprs.len() - before, 40 * 3 + 2);
    }
}
