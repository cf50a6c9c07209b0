use thiserror::Error;

use crate::node::{Literal, NodeKind};

/// Errors raised while building or reducing expressions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A terminal constructor received a value of the wrong kind.
    #[error("value passed to {kind} should be a {expected}, found {found}", expected = expected_for(.kind))]
    ValueKind { kind: NodeKind, found: Literal },

    /// A rule-based reduction met a node variant it has no rule for.
    #[error("cannot differentiate {kind}")]
    Dispatch { kind: NodeKind },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn expected_for(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Symbol => "string",
        _ => "number",
    }
}
