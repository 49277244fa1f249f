//! Restricted higher-order anti-unification over lambda terms: matched
//! binders are alpha-renamed to a common name, and a variable minted for a
//! mismatch under binders is applied to every bound variable in scope, so
//! the generalization stays well-scoped.

pub mod generalize;
pub mod subst;
pub mod term;
