use std::cell::RefCell;
use std::fmt::Debug;

use log::debug;

use crate::error::{Error, Result};
use crate::node::{BinOp, Literal, Node, NodeKind, Value};
use crate::number::Number;
use crate::reference::ExprId;

/// Expression manager.
///
/// Owns the arena in which every node lives. All construction goes through the manager,
/// and nodes are addressed by [`ExprId`] handles.
///
/// Unlike a hash-consing table, every constructor call allocates a *fresh* node:
/// two separately built `Number(5)` leaves are distinct, while one handle reused twice
/// is one shared node.
pub struct Exprs {
    nodes: RefCell<Vec<Node>>,
}

impl Exprs {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a manager with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }
}

impl Default for Exprs {
    fn default() -> Self {
        Exprs::new()
    }
}

impl Debug for Exprs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let nodes = self.nodes.borrow();
        f.debug_struct("Exprs")
            .field("capacity", &nodes.capacity())
            .field("size", &nodes.len())
            .finish()
    }
}

impl Exprs {
    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Get a copy of the node behind the handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this manager.
    pub fn node(&self, id: ExprId) -> Node {
        let nodes = self.nodes.borrow();
        assert!(id.index() < nodes.len(), "{} does not belong to this manager", id);
        nodes[id.index()].clone()
    }

    pub fn kind(&self, id: ExprId) -> NodeKind {
        self.nodes.borrow()[id.index()].kind()
    }

    pub fn operands(&self, id: ExprId) -> Vec<ExprId> {
        self.nodes.borrow()[id.index()].operands()
    }

    pub fn precedence(&self, id: ExprId) -> u8 {
        self.nodes.borrow()[id.index()].precedence()
    }

    pub fn is_terminal(&self, id: ExprId) -> bool {
        self.kind(id).is_terminal()
    }

    fn mk_node(&self, node: Node) -> ExprId {
        let mut nodes = self.nodes.borrow_mut();
        let index = nodes.len();
        assert!(index < u32::MAX as usize, "Arena capacity exceeded");

        let id = ExprId::new(index as u32);
        debug!("mk({:?}) = {}", node, id);
        nodes.push(node);
        id
    }
}

// Terminals.
impl Exprs {
    /// Create a `Number` leaf, rejecting non-numeric literals.
    ///
    /// ```
    /// use symdiff_rs::exprs::Exprs;
    ///
    /// let exprs = Exprs::default();
    /// assert!(exprs.number(3).is_ok());
    /// assert!(exprs.number("three").is_err());
    /// ```
    pub fn number(&self, value: impl Into<Literal>) -> Result<ExprId> {
        match value.into() {
            Literal::Int(i) => Ok(self.num(i)),
            Literal::Float(x) => Ok(self.num(x)),
            found @ Literal::Str(_) => {
                debug!("number: rejected {} literal {}", found.kind_name(), found);
                Err(Error::ValueKind {
                    kind: NodeKind::Number,
                    found,
                })
            }
        }
    }

    /// Create a `Symbol` leaf, rejecting non-string literals.
    pub fn symbol(&self, name: impl Into<Literal>) -> Result<ExprId> {
        match name.into() {
            Literal::Str(name) => Ok(self.mk_node(Node::Symbol(name))),
            found => {
                debug!("symbol: rejected {} literal {}", found.kind_name(), found);
                Err(Error::ValueKind {
                    kind: NodeKind::Symbol,
                    found,
                })
            }
        }
    }

    /// Create a `Number` leaf from an already-typed number.
    pub fn num(&self, value: impl Into<Number>) -> ExprId {
        self.mk_node(Node::Number(value.into()))
    }

    /// Create a `Symbol` leaf from an already-typed name.
    pub fn var(&self, name: &str) -> ExprId {
        self.mk_node(Node::Symbol(name.to_string()))
    }

    /// Turn a value into a node, allocating a `Number` leaf for a bare number.
    pub fn lift(&self, value: impl Into<Value>) -> ExprId {
        match value.into() {
            Value::Expr(id) => id,
            Value::Number(n) => self.num(n),
        }
    }
}

// Operators.
impl Exprs {
    /// Build `lhs op rhs`, lifting bare numbers on either side.
    ///
    /// Operand order is kept as given: `3 + e` is `Add(3, e)`, never `Add(e, 3)`.
    pub fn binary(&self, op: BinOp, lhs: impl Into<Value>, rhs: impl Into<Value>) -> ExprId {
        let left = self.lift(lhs);
        let right = self.lift(rhs);
        self.mk_node(Node::binary(op, left, right))
    }

    pub fn add(&self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> ExprId {
        self.binary(BinOp::Add, lhs, rhs)
    }

    pub fn sub(&self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> ExprId {
        self.binary(BinOp::Sub, lhs, rhs)
    }

    pub fn mul(&self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> ExprId {
        self.binary(BinOp::Mul, lhs, rhs)
    }

    pub fn div(&self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> ExprId {
        self.binary(BinOp::Div, lhs, rhs)
    }

    pub fn pow(&self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> ExprId {
        self.binary(BinOp::Pow, lhs, rhs)
    }

    /// Arithmetic on values.
    ///
    /// Two bare numbers combine numerically. As soon as one side is an expression,
    /// the result is a new operator node.
    pub fn apply(&self, op: BinOp, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Value {
        match (lhs.into(), rhs.into()) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a.apply(op, b)),
            (lhs, rhs) => Value::Expr(self.binary(op, lhs, rhs)),
        }
    }
}
