//! Three equivalent semantics for SIMPLE, a minimal imperative language with
//! numbers, booleans, variables, `+`, `*`, `<`, assignment, conditionals,
//! sequencing and `while` loops.
//!
//! - **Small-step** ([`eval::small_step`]): every node knows how to rewrite
//!   itself by one step; a [`Machine`] applies those steps until nothing is
//!   left to reduce, and can expose every intermediate state as a [`Trace`].
//! - **Big-step** ([`eval::big_step`]): structural recursion straight to a
//!   value (for expressions) or a final environment (for statements).
//! - **Denotational** ([`eval::denote`]): each node is translated once into a
//!   Rust closure `Env -> Result`, built from the closures of its children.
//!
//! All three agree on every program: same value or environment, or the same
//! kind of [`Error`].
//!
//! Nodes borrow their children, so trees are usually built from `'static`
//! constants or allocated in a [`bumpalo::Bump`]. Reduction and denotation
//! allocate into a caller-supplied arena, which bounds the `'core` lifetime of
//! everything they produce.
//!
//! ```
//! use bumpalo::Bump;
//! use simple_semantics::*;
//!
//! // while (x < 5) { x = x * 3 }
//! let program = Stmt::While(
//!     &Expr::Binop(Binop::Lt, &Expr::Variable("x"), &Expr::Number(5)),
//!     &Stmt::Assign(
//!         "x",
//!         &Expr::Binop(Binop::Mul, &Expr::Variable("x"), &Expr::Number(3)),
//!     ),
//! );
//! let env = Env::from([("x", Value::Number(1))]);
//! let bump = Bump::new();
//!
//! let small = Machine::new(&bump, program, env.clone()).run().unwrap();
//! let big = eval_stmt(&program, env.clone()).unwrap();
//! let denoted = denote_stmt(&bump, &program)(env).unwrap();
//!
//! assert_eq!(small.env, big);
//! assert_eq!(big, denoted);
//! assert_eq!(big.get("x"), Some(Value::Number(9)));
//! ```

pub mod env;
pub mod error;
pub mod eval;
pub mod print;
pub mod syntax;

pub use crate::error::Error;
pub use crate::eval::big_step::{eval_expr, eval_node, eval_stmt};
pub use crate::eval::denote::{
    denote_expr, denote_node, denote_stmt, Denotation, ExprDenotation, StmtDenotation,
};
pub use crate::eval::small_step::{Machine, State, Trace};
pub use crate::eval::Outcome;
pub use crate::syntax::{Binop, Env, Expr, Node, Stmt, Ty, Value};
