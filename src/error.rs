use crate::syntax::{Binop, Env, Node, Ty, Value};

/// Why a run of one of the semantics stopped before reaching a result.
///
/// None of these are recovered from: the run that raised it is over, and the
/// error carries the node or environment needed to reproduce it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<'core> {
    #[error("unbound variable `{name}` in environment {env}")]
    UnboundVariable { name: &'core str, env: Env<'core> },

    #[error("type mismatch in `{node}`: expected {expected}, found `{found}`")]
    TypeMismatch {
        node: Node<'core>,
        expected: Ty,
        found: Value,
    },

    /// Numbers are 64-bit; a `+` or `*` whose result does not fit is an error
    /// rather than a wrapped value.
    #[error("arithmetic overflow in `{node}`: `{lhs} {op} {rhs}` does not fit in 64 bits")]
    Overflow {
        node: Node<'core>,
        op: Binop,
        lhs: i64,
        rhs: i64,
    },

    /// `reduce` was called on a node that is already in normal form.
    #[error("cannot reduce `{node}`: it is already irreducible")]
    InvalidReduction { node: Node<'core> },
}

impl<'core> Error<'core> {
    pub(crate) fn invalid_reduction(node: impl Into<Node<'core>>) -> Self {
        Self::InvalidReduction { node: node.into() }
    }

    pub(crate) fn overflow(node: impl Into<Node<'core>>, op: Binop, lhs: i64, rhs: i64) -> Self {
        Self::Overflow {
            node: node.into(),
            op,
            lhs,
            rhs,
        }
    }

    pub(crate) fn type_mismatch(node: impl Into<Node<'core>>, expected: Ty, found: Value) -> Self {
        Self::TypeMismatch {
            node: node.into(),
            expected,
            found,
        }
    }
}
