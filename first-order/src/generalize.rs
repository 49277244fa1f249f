//! Plotkin's anti-unification over ranked terms.

use std::rc::Rc;

use thiserror::Error;
use util::{Env, NameSupply};

use crate::term::{Term, TermRef};

/// Maps each generalization variable to the `(left, right)` subterm pair it
/// stands for.
pub type Environment = Env<TermRef>;

#[derive(Debug, Error)]
pub enum GeneralizeError {
    #[error("Cannot generalize position-wise: left has {left} terms, right has {right}")]
    LengthMismatch { left: usize, right: usize },
}
pub type Result<T> = std::result::Result<T, GeneralizeError>;

/// Compute the least general generalization of `t1` and `t2`.
///
/// Substituting each environment variable in the result by its `left` term
/// reconstructs `t1` exactly; by its `right` term, `t2`.
pub fn anti_unify(t1: &TermRef, t2: &TermRef) -> (TermRef, Environment) {
    let mut supply = NameSupply::new("X");
    let mut env = Environment::new();
    let gen = generalize(t1, t2, &mut supply, &mut env);
    (gen, env)
}

/// Anti-unify two equal-length sequences position-wise, sharing one fresh
/// variable supply and one environment across all positions, so identical
/// mismatches reuse the same variable across the whole list.
pub fn anti_unify_list(ts1: &[TermRef], ts2: &[TermRef]) -> Result<(Vec<TermRef>, Environment)> {
    if ts1.len() != ts2.len() {
        return Err(GeneralizeError::LengthMismatch {
            left: ts1.len(),
            right: ts2.len(),
        });
    }
    let mut supply = NameSupply::new("X");
    let mut env = Environment::new();
    let gens = ts1
        .iter()
        .zip(ts2)
        .map(|(t1, t2)| generalize(t1, t2, &mut supply, &mut env))
        .collect();
    Ok((gens, env))
}

fn generalize(
    t1: &TermRef,
    t2: &TermRef,
    supply: &mut NameSupply,
    env: &mut Environment,
) -> TermRef {
    // identical terms generalize to themselves
    if t1 == t2 {
        return t1.clone();
    }

    // same symbol and arity: generalize the arguments pairwise
    if let (Term::Func(f, args1), Term::Func(g, args2)) = (t1.as_ref(), t2.as_ref()) {
        if f == g && args1.len() == args2.len() {
            let args = args1
                .iter()
                .zip(args2)
                .map(|(a1, a2)| generalize(a1, a2, supply, env))
                .collect();
            return Rc::new(Term::Func(f.clone(), args));
        }
    }

    // disagreement point: reuse the variable for this exact pair, or mint one
    if let Some(var) = env.reuse(t1, t2) {
        return Term::var(var.clone());
    }
    let var = supply.fresh();
    env.bind(var.clone(), t1.clone(), t2.clone());
    Term::var(var)
}
