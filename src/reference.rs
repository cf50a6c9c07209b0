use std::fmt::{Display, Formatter};

/// Handle to a node stored in an [`Exprs`][crate::exprs::Exprs] arena.
///
/// Two handles are equal iff they address the same node *instance*.
/// Structurally identical nodes built separately get distinct handles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ExprId(u32);

impl ExprId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the arena index of the node.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the internal representation of the handle.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for ExprId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}
