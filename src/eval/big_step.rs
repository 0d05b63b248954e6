//! Big-step semantics: evaluate a node straight to its result, without
//! materialising intermediate terms.

use super::*;

pub fn eval_expr<'core>(expr: &Expr<'core>, env: &Env<'core>) -> Result<Value, Error<'core>> {
    match *expr {
        Expr::Number(n) => Ok(Value::Number(n)),
        Expr::Boolean(b) => Ok(Value::Boolean(b)),
        Expr::Variable(name) => get_var(env, name),
        Expr::Binop(op, lhs, rhs) => {
            let lhs = eval_expr(lhs, env)?;
            let rhs = eval_expr(rhs, env)?;
            apply_binop(*expr, op, lhs, rhs)
        }
    }
}

pub fn eval_stmt<'core>(stmt: &Stmt<'core>, env: Env<'core>) -> Result<Env<'core>, Error<'core>> {
    match *stmt {
        Stmt::DoNothing => Ok(env),
        Stmt::Assign(name, expr) => {
            let value = eval_expr(expr, &env)?;
            Ok(env.with(name, value))
        }
        Stmt::If(cond, then, r#else) => {
            let cond = eval_expr(cond, &env)?;
            match expect_bool(*stmt, cond)? {
                true => eval_stmt(then, env),
                false => eval_stmt(r#else, env),
            }
        }
        Stmt::Sequence(first, second) => {
            let env = eval_stmt(first, env)?;
            eval_stmt(second, env)
        }
        // `while` is `eval_stmt(stmt, eval_stmt(body, env))` while the condition
        // holds: the tail call is written as a loop so the Rust stack stays flat.
        Stmt::While(cond, body) => {
            let mut env = env;
            loop {
                let holds = expect_bool(*stmt, eval_expr(cond, &env)?)?;
                if !holds {
                    return Ok(env);
                }
                env = eval_stmt(body, env)?;
                tracing::trace!(%env, "loop iteration");
            }
        }
    }
}

pub fn eval_node<'core>(node: &Node<'core>, env: Env<'core>) -> Result<Outcome<'core>, Error<'core>> {
    match node {
        Node::Expr(expr) => Ok(Outcome::Value(eval_expr(expr, &env)?)),
        Node::Stmt(stmt) => Ok(Outcome::Env(eval_stmt(stmt, env)?)),
    }
}
