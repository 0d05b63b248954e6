use std::fmt::{self, Write};

use crate::eval::small_step::State;
use crate::syntax::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Prec {
    Atom,
    Mul,
    Add,
    Cmp,
}

impl Prec {
    pub const MAX: Self = Self::Cmp;

    pub fn of_expr(expr: &Expr) -> Self {
        match expr {
            Expr::Number(_) | Expr::Boolean(_) | Expr::Variable(_) => Self::Atom,
            Expr::Binop(op, ..) => Self::of_binop(*op),
        }
    }

    pub fn of_binop(binop: Binop) -> Self {
        match binop {
            Binop::Add => Self::Add,
            Binop::Mul => Self::Mul,
            Binop::Lt => Self::Cmp,
        }
    }

    /// The loosest precedence each operand of `binop` may have without
    /// parentheses. `+` and `*` associate to the left; `<` does not associate.
    fn of_operands(binop: Binop) -> (Self, Self) {
        match binop {
            Binop::Add => (Self::Add, Self::Mul),
            Binop::Mul => (Self::Mul, Self::Atom),
            Binop::Lt => (Self::Add, Self::Add),
        }
    }
}

fn parens<W: Write>(
    out: &mut W,
    cond: bool,
    mut f: impl FnMut(&mut W) -> fmt::Result,
) -> fmt::Result {
    if cond {
        out.write_char('(')?;
    }
    f(out)?;
    if cond {
        out.write_char(')')?;
    }
    Ok(())
}

pub fn expr_prec(out: &mut impl Write, expr: &Expr, prec: Prec) -> fmt::Result {
    parens(out, Prec::of_expr(expr) > prec, |out| match expr {
        Expr::Number(n) => write!(out, "{n}"),
        Expr::Boolean(b) => write!(out, "{b}"),
        Expr::Variable(name) => write!(out, "{name}"),
        Expr::Binop(op, lhs, rhs) => {
            let (lhs_prec, rhs_prec) = Prec::of_operands(*op);
            expr_prec(out, lhs, lhs_prec)?;
            write!(out, " {op} ")?;
            expr_prec(out, rhs, rhs_prec)
        }
    })
}

pub fn write_stmt(out: &mut impl Write, stmt: &Stmt) -> fmt::Result {
    match stmt {
        Stmt::DoNothing => write!(out, "do-nothing"),
        Stmt::Assign(name, expr) => {
            write!(out, "{name} = ")?;
            expr_prec(out, expr, Prec::MAX)
        }
        Stmt::If(cond, then, r#else) => {
            write!(out, "if (")?;
            expr_prec(out, cond, Prec::MAX)?;
            write!(out, ") {{ ")?;
            write_stmt(out, then)?;
            write!(out, " }} else {{ ")?;
            write_stmt(out, r#else)?;
            write!(out, " }}")
        }
        Stmt::Sequence(first, second) => {
            write_stmt(out, first)?;
            write!(out, "; ")?;
            write_stmt(out, second)
        }
        Stmt::While(cond, body) => {
            write!(out, "while (")?;
            expr_prec(out, cond, Prec::MAX)?;
            write!(out, ") {{ ")?;
            write_stmt(out, body)?;
            write!(out, " }}")
        }
    }
}

pub fn write_env(out: &mut impl Write, env: &Env) -> fmt::Result {
    out.write_char('{')?;
    for (index, (name, value)) in env.iter().enumerate() {
        if index > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{name}: {value}")?;
    }
    out.write_char('}')
}

impl<'core> fmt::Display for Expr<'core> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result { expr_prec(out, self, Prec::MAX) }
}

impl<'core> fmt::Display for Stmt<'core> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result { write_stmt(out, self) }
}

impl<'core> fmt::Display for Node<'core> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Expr(expr) => fmt::Display::fmt(expr, out),
            Node::Stmt(stmt) => fmt::Display::fmt(stmt, out),
        }
    }
}

impl<'core> fmt::Display for Env<'core> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result { write_env(out, self) }
}

impl<'core> fmt::Display for State<'core> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        write!(out, "{}, {}", self.node, self.env)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(n) => write!(out, "{n}"),
            Self::Boolean(b) => write!(out, "{b}"),
        }
    }
}

impl fmt::Display for Binop {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Add => write!(out, "+"),
            Self::Mul => write!(out, "*"),
            Self::Lt => write!(out, "<"),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number => write!(out, "number"),
            Self::Boolean => write!(out, "boolean"),
        }
    }
}
