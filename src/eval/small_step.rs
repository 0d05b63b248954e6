//! Small-step semantics: a one-step rewrite relation on nodes, and a machine
//! that applies it until the node is irreducible.

use std::iter::FusedIterator;

use bumpalo::Bump;

use super::*;

impl<'core> Expr<'core> {
    /// Rewrite `self` by exactly one step.
    ///
    /// Binary operators reduce their left operand to a value before touching
    /// the right one, and only combine once both are values.
    pub fn reduce(&self, bump: &'core Bump, env: &Env<'core>) -> Result<Self, Error<'core>> {
        match *self {
            Self::Number(_) | Self::Boolean(_) => Err(Error::invalid_reduction(*self)),
            Self::Variable(name) => Ok(get_var(env, name)?.quote()),
            Self::Binop(op, lhs, rhs) => match (lhs.as_value(), rhs.as_value()) {
                (None, _) => {
                    let lhs = lhs.reduce(bump, env)?;
                    Ok(Self::Binop(op, bump.alloc(lhs), rhs))
                }
                (Some(_), None) => {
                    let rhs = rhs.reduce(bump, env)?;
                    Ok(Self::Binop(op, lhs, bump.alloc(rhs)))
                }
                (Some(lhs), Some(rhs)) => Ok(apply_binop(*self, op, lhs, rhs)?.quote()),
            },
        }
    }
}

impl<'core> Stmt<'core> {
    /// Rewrite `self` by exactly one step, returning the rewritten statement
    /// and the environment it should run in.
    pub fn reduce(
        &self,
        bump: &'core Bump,
        env: &Env<'core>,
    ) -> Result<(Self, Env<'core>), Error<'core>> {
        match *self {
            Self::DoNothing => Err(Error::invalid_reduction(*self)),
            Self::Assign(name, expr) => match expr.as_value() {
                None => {
                    let expr = expr.reduce(bump, env)?;
                    Ok((Self::Assign(name, bump.alloc(expr)), env.clone()))
                }
                Some(value) => Ok((Self::DoNothing, env.with(name, value))),
            },
            Self::If(cond, then, r#else) => match cond.as_value() {
                None => {
                    let cond = cond.reduce(bump, env)?;
                    Ok((Self::If(bump.alloc(cond), then, r#else), env.clone()))
                }
                Some(cond) => match expect_bool(*self, cond)? {
                    true => Ok((*then, env.clone())),
                    false => Ok((*r#else, env.clone())),
                },
            },
            Self::Sequence(Self::DoNothing, second) => Ok((*second, env.clone())),
            Self::Sequence(first, second) => {
                let (first, env) = first.reduce(bump, env)?;
                Ok((Self::Sequence(bump.alloc(first), second), env))
            }
            Self::While(cond, body) => {
                let unrolled = Self::Sequence(body, bump.alloc(*self));
                Ok((
                    Self::If(cond, bump.alloc(unrolled), &Self::DoNothing),
                    env.clone(),
                ))
            }
        }
    }
}

impl<'core> Node<'core> {
    /// Rewrite `self` by one step. Expressions never change the environment.
    pub fn reduce(
        &self,
        bump: &'core Bump,
        env: &Env<'core>,
    ) -> Result<(Self, Env<'core>), Error<'core>> {
        match self {
            Self::Expr(expr) => Ok((Self::Expr(expr.reduce(bump, env)?), env.clone())),
            Self::Stmt(stmt) => {
                let (stmt, env) = stmt.reduce(bump, env)?;
                Ok((Self::Stmt(stmt), env))
            }
        }
    }
}

/// A snapshot of a [`Machine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State<'core> {
    pub node: Node<'core>,
    pub env: Env<'core>,
}

impl<'core> State<'core> {
    /// The outcome of a halted state. `None` if the node is still reducible.
    pub fn outcome(&self) -> Option<Outcome<'core>> {
        match self.node {
            Node::Expr(expr) => expr.as_value().map(Outcome::Value),
            Node::Stmt(Stmt::DoNothing) => Some(Outcome::Env(self.env.clone())),
            Node::Stmt(_) => None,
        }
    }
}

/// Drives a node to normal form by repeated reduction.
///
/// The machine places no bound on the number of steps: running a program
/// that loops forever never returns. Use [`Machine::step`] or
/// [`Machine::trace`] to stay in control of how far it goes.
///
/// Every step allocates the rewritten parts of the node in the arena, and an
/// arena only frees memory when it is dropped or reset. Arena usage therefore
/// grows with the number of steps taken, even for a loop whose environment
/// stays the same size.
pub struct Machine<'core> {
    bump: &'core Bump,
    state: State<'core>,
    steps: usize,
}

impl<'core> Machine<'core> {
    pub fn new(bump: &'core Bump, node: impl Into<Node<'core>>, env: Env<'core>) -> Self {
        Self {
            bump,
            state: State {
                node: node.into(),
                env,
            },
            steps: 0,
        }
    }

    pub const fn state(&self) -> &State<'core> { &self.state }

    /// Number of transitions taken so far.
    pub const fn steps(&self) -> usize { self.steps }

    pub const fn is_halted(&self) -> bool { !self.state.node.is_reducible() }

    pub fn step(&mut self) -> Result<(), Error<'core>> {
        let (node, env) = self.state.node.reduce(self.bump, &self.state.env)?;
        self.state = State { node, env };
        self.steps += 1;
        tracing::trace!(step = self.steps, state = %self.state, "reduced");
        Ok(())
    }

    /// Step until the node is irreducible, and return the final state.
    pub fn run(mut self) -> Result<State<'core>, Error<'core>> {
        while !self.is_halted() {
            self.step()?;
        }
        tracing::debug!(steps = self.steps, state = %self.state, "halted");
        Ok(self.state)
    }

    /// Every state the machine passes through, starting with the current one.
    pub fn trace(self) -> Trace<'core> {
        Trace {
            machine: self,
            status: TraceStatus::Start,
        }
    }
}

/// Iterator returned by [`Machine::trace`].
///
/// Yields the initial state, then the state after each transition. Ends after
/// the first irreducible state, or after yielding the first error.
pub struct Trace<'core> {
    machine: Machine<'core>,
    status: TraceStatus,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum TraceStatus {
    Start,
    Running,
    Done,
}

impl<'core> Iterator for Trace<'core> {
    type Item = Result<State<'core>, Error<'core>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.status {
            TraceStatus::Done => None,
            TraceStatus::Start => {
                self.status = TraceStatus::Running;
                Some(Ok(self.machine.state.clone()))
            }
            TraceStatus::Running if self.machine.is_halted() => {
                self.status = TraceStatus::Done;
                None
            }
            TraceStatus::Running => match self.machine.step() {
                Ok(()) => Some(Ok(self.machine.state.clone())),
                Err(error) => {
                    self.status = TraceStatus::Done;
                    Some(Err(error))
                }
            },
        }
    }
}

impl<'core> FusedIterator for Trace<'core> {}
