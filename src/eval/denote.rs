//! Denotational semantics: translate a node into a Rust closure from
//! environments to results.
//!
//! The translation is compositional: the denotation of a node is built only
//! from the denotations of its children, once, before any environment is
//! seen. Applying it never looks at the syntax tree again, except to report
//! errors. Closures are allocated in the caller's arena.

use bumpalo::Bump;

use super::*;

/// The meaning of an expression: a function from an environment to a value.
pub type ExprDenotation<'core> = &'core dyn Fn(&Env<'core>) -> Result<Value, Error<'core>>;

/// The meaning of a statement: a function from an environment to the
/// environment it leaves behind.
pub type StmtDenotation<'core> = &'core dyn Fn(Env<'core>) -> Result<Env<'core>, Error<'core>>;

/// The meaning of a [`Node`].
#[derive(Copy, Clone)]
pub enum Denotation<'core> {
    Expr(ExprDenotation<'core>),
    Stmt(StmtDenotation<'core>),
}

impl<'core> Denotation<'core> {
    pub fn apply(&self, env: Env<'core>) -> Result<Outcome<'core>, Error<'core>> {
        match self {
            Self::Expr(denotation) => Ok(Outcome::Value(denotation(&env)?)),
            Self::Stmt(denotation) => Ok(Outcome::Env(denotation(env)?)),
        }
    }
}

fn expr_fn<'core>(
    bump: &'core Bump,
    f: impl Fn(&Env<'core>) -> Result<Value, Error<'core>> + 'core,
) -> ExprDenotation<'core> {
    bump.alloc(f)
}

fn stmt_fn<'core>(
    bump: &'core Bump,
    f: impl Fn(Env<'core>) -> Result<Env<'core>, Error<'core>> + 'core,
) -> StmtDenotation<'core> {
    bump.alloc(f)
}

pub fn denote_expr<'core>(bump: &'core Bump, expr: &Expr<'core>) -> ExprDenotation<'core> {
    let expr = *expr;
    match expr {
        Expr::Number(n) => expr_fn(bump, move |_| Ok(Value::Number(n))),
        Expr::Boolean(b) => expr_fn(bump, move |_| Ok(Value::Boolean(b))),
        Expr::Variable(name) => expr_fn(bump, move |env| get_var(env, name)),
        Expr::Binop(op, lhs, rhs) => {
            let lhs = denote_expr(bump, lhs);
            let rhs = denote_expr(bump, rhs);
            expr_fn(bump, move |env| apply_binop(expr, op, lhs(env)?, rhs(env)?))
        }
    }
}

pub fn denote_stmt<'core>(bump: &'core Bump, stmt: &Stmt<'core>) -> StmtDenotation<'core> {
    let stmt = *stmt;
    match stmt {
        Stmt::DoNothing => stmt_fn(bump, Ok),
        Stmt::Assign(name, expr) => {
            let expr = denote_expr(bump, expr);
            stmt_fn(bump, move |env| {
                let value = expr(&env)?;
                Ok(env.with(name, value))
            })
        }
        Stmt::If(cond, then, r#else) => {
            let cond = denote_expr(bump, cond);
            let then = denote_stmt(bump, then);
            let r#else = denote_stmt(bump, r#else);
            stmt_fn(bump, move |env| match expect_bool(stmt, cond(&env)?)? {
                true => then(env),
                false => r#else(env),
            })
        }
        Stmt::Sequence(first, second) => {
            let first = denote_stmt(bump, first);
            let second = denote_stmt(bump, second);
            stmt_fn(bump, move |env| second(first(env)?))
        }
        Stmt::While(cond, body) => {
            let cond = denote_expr(bump, cond);
            let body = denote_stmt(bump, body);
            stmt_fn(bump, move |mut env| {
                while expect_bool(stmt, cond(&env)?)? {
                    env = body(env)?;
                    tracing::trace!(%env, "loop iteration");
                }
                Ok(env)
            })
        }
    }
}

pub fn denote_node<'core>(bump: &'core Bump, node: &Node<'core>) -> Denotation<'core> {
    match node {
        Node::Expr(expr) => Denotation::Expr(denote_expr(bump, expr)),
        Node::Stmt(stmt) => Denotation::Stmt(denote_stmt(bump, stmt)),
    }
}
