//! Infix and constructor-shaped string forms of expressions.
//!
//! Both forms are built with [`Exprs::reduce`], so rendering a deep expression does not
//! recurse on the native stack.

use std::convert::Infallible;

use crate::exprs::Exprs;
use crate::node::{Node, Value, TERMINAL_PRECEDENCE};
use crate::reference::ExprId;

impl Exprs {
    /// Render `expr` in infix form with minimal parentheses.
    ///
    /// An operand is parenthesized iff its precedence is strictly lower than its parent's.
    /// Operands of equal precedence are never wrapped, so `a - (b - c)` and `(a - b) - c`
    /// both render as `a - b - c`.
    ///
    /// ```
    /// use symdiff_rs::exprs::Exprs;
    ///
    /// let exprs = Exprs::default();
    /// let (x, y, z) = (exprs.var("x"), exprs.var("y"), exprs.var("z"));
    /// let e = exprs.mul(exprs.add(x, y), z);
    /// assert_eq!(exprs.render(e), "(x + y) * z");
    /// ```
    pub fn render(&self, expr: ExprId) -> String {
        let result: Result<(String, u8), Infallible> = self.reduce(
            expr,
            |e, operands: &[(String, u8)], _| {
                let node = self.node(e);
                let Some((op, _, _)) = node.as_binary() else {
                    return Ok((node.to_string(), TERMINAL_PRECEDENCE));
                };
                let precedence = op.precedence();
                let wrap = |(s, p): &(String, u8)| {
                    if *p < precedence {
                        format!("({})", s)
                    } else {
                        s.clone()
                    }
                };
                let text = format!("{} {} {}", wrap(&operands[0]), op.symbol(), wrap(&operands[1]));
                Ok((text, precedence))
            },
            &(),
        );
        match result {
            Ok((text, _)) => text,
            Err(never) => match never {},
        }
    }

    /// Render a reduction result: numbers as numbers, expressions via [`render`][Exprs::render].
    pub fn render_value(&self, value: Value) -> String {
        match value {
            Value::Expr(id) => self.render(id),
            Value::Number(n) => n.to_string(),
        }
    }

    /// Constructor-shaped form for diagnostics, e.g. `Mul(Add('x', 1), 'y')`.
    pub fn debug_form(&self, expr: ExprId) -> String {
        let result: Result<String, Infallible> = self.reduce(
            expr,
            |e, operands: &[String], _| {
                let node = self.node(e);
                Ok(match node {
                    Node::Number(n) => n.to_string(),
                    Node::Symbol(ref name) => format!("'{}'", name.escape_default()),
                    _ => format!("{}({}, {})", node.kind(), operands[0], operands[1]),
                })
            },
            &(),
        );
        match result {
            Ok(text) => text,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_terminals() {
        let exprs = Exprs::default();
        assert_eq!(exprs.render(exprs.num(3)), "3");
        assert_eq!(exprs.render(exprs.num(1.0)), "1.0");
        assert_eq!(exprs.render(exprs.var("alpha")), "alpha");
    }

    #[test]
    fn test_lower_precedence_child_is_wrapped() {
        let exprs = Exprs::default();
        let (x, y, z) = (exprs.var("x"), exprs.var("y"), exprs.var("z"));
        assert_eq!(exprs.render(exprs.mul(exprs.add(x, y), z)), "(x + y) * z");
        assert_eq!(exprs.render(exprs.pow(exprs.mul(x, y), z)), "(x * y) ^ z");
        assert_eq!(exprs.render(exprs.div(x, exprs.sub(y, z))), "x / (y - z)");
    }

    #[test]
    fn test_higher_precedence_child_is_bare() {
        let exprs = Exprs::default();
        let (x, y, z) = (exprs.var("x"), exprs.var("y"), exprs.var("z"));
        assert_eq!(exprs.render(exprs.add(exprs.mul(x, y), z)), "x * y + z");
        assert_eq!(exprs.render(exprs.mul(x, exprs.pow(y, 2))), "x * y ^ 2");
    }

    #[test]
    fn test_equal_precedence_is_never_wrapped() {
        let exprs = Exprs::default();
        let (x, y, z) = (exprs.var("x"), exprs.var("y"), exprs.var("z"));
        assert_eq!(exprs.render(exprs.sub(x, exprs.sub(y, z))), "x - y - z");
        assert_eq!(exprs.render(exprs.div(x, exprs.mul(y, z))), "x / y * z");
        assert_eq!(exprs.render(exprs.pow(x, exprs.pow(y, z))), "x ^ y ^ z");
    }

    #[test]
    fn test_shared_operand() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let s = exprs.add(x, 1);
        assert_eq!(exprs.render(exprs.mul(s, s)), "(x + 1) * (x + 1)");
    }

    #[test]
    fn test_render_value() {
        let exprs = Exprs::default();
        assert_eq!(exprs.render_value(Value::from(0.0)), "0.0");
        assert_eq!(exprs.render_value(Value::from(2)), "2");
        let x = exprs.var("x");
        assert_eq!(exprs.render_value(Value::from(x)), "x");
    }

    #[test]
    fn test_debug_form() {
        let exprs = Exprs::default();
        let x = exprs.var("x");
        let y = exprs.var("y");
        let e = exprs.mul(exprs.add(x, 1), y);
        assert_eq!(exprs.debug_form(e), "Mul(Add('x', 1), 'y')");
        assert_eq!(exprs.debug_form(exprs.pow(x, 2.0)), "Pow('x', 2.0)");
    }

    #[test]
    fn test_debug_form_escapes_quotes() {
        let exprs = Exprs::default();
        let q = exprs.var("it's");
        assert_eq!(exprs.debug_form(q), "'it\\'s'");
    }

    #[test]
    fn test_render_deep_chain() {
        let exprs = Exprs::default();
        let mut e = exprs.var("x");
        for _ in 0..10_000 {
            e = exprs.add(e, 1);
        }
        let text = exprs.render(e);
        assert!(text.starts_with("x + 1 + 1"));
        assert_eq!(text.matches('+').count(), 10_000);
    }
}
