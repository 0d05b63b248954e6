//! The three semantics of SIMPLE, and the helpers they share.
//!
//! - [`small_step`]: a single-step rewrite relation on nodes, driven by a
//!   [`Machine`](small_step::Machine).
//! - [`big_step`]: direct structural recursion to a value or environment.
//! - [`denote`]: translation of nodes into composable Rust closures.
//!
//! All three agree: for any node and environment, they either produce the
//! same result or fail with the same kind of [`Error`].

use crate::error::Error;
use crate::syntax::*;

pub mod big_step;
pub mod denote;
pub mod small_step;

/// The result of running a [`Node`] to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'core> {
    /// An expression evaluated to a value.
    Value(Value),
    /// A statement evaluated to a final environment.
    Env(Env<'core>),
}

fn get_var<'core>(env: &Env<'core>, name: &'core str) -> Result<Value, Error<'core>> {
    match env.get(name) {
        Some(value) => Ok(value),
        None => Err(Error::UnboundVariable {
            name,
            env: env.clone(),
        }),
    }
}

/// Apply `op` to two evaluated operands. `expr` is the node reported if an
/// operand has the wrong type or the result overflows.
fn apply_binop<'core>(
    expr: Expr<'core>,
    op: Binop,
    lhs: Value,
    rhs: Value,
) -> Result<Value, Error<'core>> {
    match (lhs, rhs) {
        (Value::Number(lhs), Value::Number(rhs)) => match op.apply(lhs, rhs) {
            Some(value) => Ok(value),
            None => Err(Error::overflow(expr, op, lhs, rhs)),
        },
        (Value::Number(_), found) | (found, _) => {
            Err(Error::type_mismatch(expr, op.operand_ty(), found))
        }
    }
}

/// The truth of a branch or loop condition. `stmt` is the node reported if
/// the condition is not a boolean.
fn expect_bool<'core>(stmt: Stmt<'core>, cond: Value) -> Result<bool, Error<'core>> {
    match cond {
        Value::Boolean(b) => Ok(b),
        found => Err(Error::type_mismatch(stmt, Ty::Boolean, found)),
    }
}
