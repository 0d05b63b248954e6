//! Abstract syntax of SIMPLE.
//!
//! Nodes are small `Copy` values that point at their children through
//! `&'core` references. The children live in an arena (or in `'static`
//! promoted constants), so rewriting a node during reduction only allocates
//! the parts of the tree that actually change.

pub use crate::env::Env;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expr<'core> {
    Number(i64),
    Boolean(bool),
    Variable(&'core str),
    Binop(Binop, &'core Self, &'core Self),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stmt<'core> {
    DoNothing,
    Assign(&'core str, &'core Expr<'core>),
    If(&'core Expr<'core>, &'core Self, &'core Self),
    Sequence(&'core Self, &'core Self),
    While(&'core Expr<'core>, &'core Self),
}

/// A top-level term: either sort of node can be driven by the engines.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Node<'core> {
    Expr(Expr<'core>),
    Stmt(Stmt<'core>),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Binop {
    /// `+`
    Add,
    /// `*`
    Mul,
    /// `<`
    Lt,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Boolean(bool),
}

/// The type of a [`Value`], used to report type mismatches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ty {
    Number,
    Boolean,
}

impl<'core> Expr<'core> {
    /// The value of a terminal expression, or `None` if `self` can still be
    /// reduced.
    pub const fn as_value(&self) -> Option<Value> {
        match self {
            Self::Number(n) => Some(Value::Number(*n)),
            Self::Boolean(b) => Some(Value::Boolean(*b)),
            Self::Variable(_) | Self::Binop(..) => None,
        }
    }

    pub const fn is_reducible(&self) -> bool { self.as_value().is_none() }
}

impl<'core> Stmt<'core> {
    pub const fn is_reducible(&self) -> bool { !matches!(self, Self::DoNothing) }
}

impl<'core> Node<'core> {
    pub const fn is_reducible(&self) -> bool {
        match self {
            Self::Expr(expr) => expr.is_reducible(),
            Self::Stmt(stmt) => stmt.is_reducible(),
        }
    }
}

impl<'core> From<Expr<'core>> for Node<'core> {
    fn from(expr: Expr<'core>) -> Self { Self::Expr(expr) }
}

impl<'core> From<Stmt<'core>> for Node<'core> {
    fn from(stmt: Stmt<'core>) -> Self { Self::Stmt(stmt) }
}

impl Binop {
    /// Every operator of SIMPLE takes two numbers.
    pub const fn operand_ty(self) -> Ty { Ty::Number }

    /// `None` if the result does not fit in an `i64`.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<Value> {
        match self {
            Self::Add => i64::checked_add(lhs, rhs).map(Value::Number),
            Self::Mul => i64::checked_mul(lhs, rhs).map(Value::Number),
            Self::Lt => Some(Value::Boolean(lhs < rhs)),
        }
    }
}

impl Value {
    pub const fn ty(self) -> Ty {
        match self {
            Self::Number(_) => Ty::Number,
            Self::Boolean(_) => Ty::Boolean,
        }
    }

    /// Convert a value back into the terminal expression that denotes it.
    pub const fn quote<'core>(self) -> Expr<'core> {
        match self {
            Self::Number(n) => Expr::Number(n),
            Self::Boolean(b) => Expr::Boolean(b),
        }
    }
}
