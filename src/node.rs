use std::fmt::{Display, Formatter};

use crate::number::Number;
use crate::reference::ExprId;

/// Precedence of terminals: they never need parentheses.
pub const TERMINAL_PRECEDENCE: u8 = 3;

/// Binary operator of an internal node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub const ALL: [BinOp; 5] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div, BinOp::Pow];

    /// Binding strength, used only for rendering.
    pub const fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 0,
            BinOp::Mul | BinOp::Div => 1,
            BinOp::Pow => 2,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        }
    }

    pub const fn kind(self) -> NodeKind {
        match self {
            BinOp::Add => NodeKind::Add,
            BinOp::Sub => NodeKind::Sub,
            BinOp::Mul => NodeKind::Mul,
            BinOp::Div => NodeKind::Div,
            BinOp::Pow => NodeKind::Pow,
        }
    }
}

/// Tag of a node variant, without its payload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Number,
    Symbol,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl NodeKind {
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Number => "Number",
            NodeKind::Symbol => "Symbol",
            NodeKind::Add => "Add",
            NodeKind::Sub => "Sub",
            NodeKind::Mul => "Mul",
            NodeKind::Div => "Div",
            NodeKind::Pow => "Pow",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, NodeKind::Number | NodeKind::Symbol)
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the expression DAG.
///
/// Operands are handles into the same arena, so one node may be the child of many parents.
/// Nodes are never mutated once allocated.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(Number),
    Symbol(String),
    Add(ExprId, ExprId),
    Sub(ExprId, ExprId),
    Mul(ExprId, ExprId),
    Div(ExprId, ExprId),
    Pow(ExprId, ExprId),
}

impl Node {
    pub fn binary(op: BinOp, left: ExprId, right: ExprId) -> Self {
        match op {
            BinOp::Add => Node::Add(left, right),
            BinOp::Sub => Node::Sub(left, right),
            BinOp::Mul => Node::Mul(left, right),
            BinOp::Div => Node::Div(left, right),
            BinOp::Pow => Node::Pow(left, right),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Number(_) => NodeKind::Number,
            Node::Symbol(_) => NodeKind::Symbol,
            Node::Add(..) => NodeKind::Add,
            Node::Sub(..) => NodeKind::Sub,
            Node::Mul(..) => NodeKind::Mul,
            Node::Div(..) => NodeKind::Div,
            Node::Pow(..) => NodeKind::Pow,
        }
    }

    /// Split an operator node into its operator and ordered operands.
    pub fn as_binary(&self) -> Option<(BinOp, ExprId, ExprId)> {
        match *self {
            Node::Number(_) | Node::Symbol(_) => None,
            Node::Add(a, b) => Some((BinOp::Add, a, b)),
            Node::Sub(a, b) => Some((BinOp::Sub, a, b)),
            Node::Mul(a, b) => Some((BinOp::Mul, a, b)),
            Node::Div(a, b) => Some((BinOp::Div, a, b)),
            Node::Pow(a, b) => Some((BinOp::Pow, a, b)),
        }
    }

    /// Children in order: empty for terminals, `[left, right]` for operators.
    pub fn operands(&self) -> Vec<ExprId> {
        match self.as_binary() {
            Some((_, a, b)) => vec![a, b],
            None => Vec::new(),
        }
    }

    pub fn precedence(&self) -> u8 {
        match self.as_binary() {
            Some((op, _, _)) => op.precedence(),
            None => TERMINAL_PRECEDENCE,
        }
    }
}

impl Display for Node {
    /// Terminals print their value; operators print their operand handles.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self, self.as_binary()) {
            (Node::Number(n), _) => write!(f, "{}", n),
            (Node::Symbol(name), _) => f.write_str(name),
            (_, Some((op, a, b))) => write!(f, "{}({}, {})", op.kind(), a, b),
            (_, None) => Ok(()),
        }
    }
}

/// Either an expression node or a bare number.
///
/// This is what the combinators accept on each side, and what reductions such as
/// differentiation may return for a terminal input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Expr(ExprId),
    Number(Number),
}

impl Value {
    pub fn as_expr(self) -> Option<ExprId> {
        match self {
            Value::Expr(id) => Some(id),
            Value::Number(_) => None,
        }
    }

    pub fn as_number(self) -> Option<Number> {
        match self {
            Value::Expr(_) => None,
            Value::Number(n) => Some(n),
        }
    }
}

impl From<ExprId> for Value {
    fn from(id: ExprId) -> Self {
        Value::Expr(id)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value.into())
    }
}

/// Loosely typed input to the terminal constructors.
///
/// [`Exprs::number`][crate::exprs::Exprs::number] and [`Exprs::symbol`][crate::exprs::Exprs::symbol]
/// check the kind of the literal at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Literal {
    /// Human-readable kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => "integer",
            Literal::Float(_) => "float",
            Literal::Str(_) => "string",
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value as i64)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl From<Number> for Literal {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Literal::Int(i),
            Number::Float(x) => Literal::Float(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_levels() {
        assert_eq!(BinOp::Add.precedence(), 0);
        assert_eq!(BinOp::Sub.precedence(), 0);
        assert_eq!(BinOp::Mul.precedence(), 1);
        assert_eq!(BinOp::Div.precedence(), 1);
        assert_eq!(BinOp::Pow.precedence(), 2);
        assert_eq!(Node::Symbol("x".into()).precedence(), TERMINAL_PRECEDENCE);
    }

    #[test]
    fn test_symbols() {
        let symbols: Vec<_> = BinOp::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, ["+", "-", "*", "/", "^"]);
    }

    #[test]
    fn test_binary_roundtrip() {
        let (a, b) = (ExprId::new(1), ExprId::new(2));
        for op in BinOp::ALL {
            let node = Node::binary(op, a, b);
            assert_eq!(node.as_binary(), Some((op, a, b)));
            assert_eq!(node.kind(), op.kind());
            assert_eq!(node.operands(), vec![a, b]);
        }
    }

    #[test]
    fn test_terminals_have_no_operands() {
        assert!(Node::Number(Number::Int(5)).operands().is_empty());
        assert!(Node::Symbol("y".into()).operands().is_empty());
        assert!(NodeKind::Number.is_terminal());
        assert!(!NodeKind::Pow.is_terminal());
    }

    #[test]
    fn test_node_display() {
        assert_eq!(Node::Number(Number::Int(3)).to_string(), "3");
        assert_eq!(Node::Symbol("x".into()).to_string(), "x");
        assert_eq!(Node::Add(ExprId::new(1), ExprId::new(2)).to_string(), "Add(@1, @2)");
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::from("abc").to_string(), "\"abc\"");
        assert_eq!(Literal::from(42).to_string(), "42");
        assert_eq!(Literal::from(2.0).to_string(), "2.0");
    }
}
