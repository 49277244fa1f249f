//! First-order anti-unification: Plotkin's least general generalization of
//! two ranked function terms, together with the environment recording which
//! subterm pair each fresh variable generalizes.

pub mod generalize;
pub mod term;
