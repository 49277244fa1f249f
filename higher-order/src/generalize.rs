//! The binder-aware anti-unification recursion.

use std::rc::Rc;

use rpds::Vector;
use util::{Env, NameSupply};

use crate::subst::{shared_bound_name, subst_bound};
use crate::term::{apply_spine, spine, Term, TermRef};

/// Maps each generalization variable to the `(left, right)` subterm pair it
/// stands for, as encountered after alpha-renaming of enclosing binders.
pub type Environment = Env<TermRef>;

/// Bound variables open on the path from the root, outermost first. Extended
/// per branch, never mutated in place.
type Context = Vector<TermRef>;

/// Compute the least general generalization of two lambda terms.
///
/// Every variable minted for a mismatch under binders is applied to all
/// bound variables in scope, so the result never refers to a bound variable
/// it does not explicitly depend on.
pub fn ho_anti_unify(t1: &TermRef, t2: &TermRef) -> (TermRef, Environment) {
    let mut supply = NameSupply::new("F");
    let mut env = Environment::new();
    let gen = generalize(t1, t2, &Context::new(), &mut supply, &mut env);
    (gen, env)
}

fn generalize(
    t1: &TermRef,
    t2: &TermRef,
    ctx: &Context,
    supply: &mut NameSupply,
    env: &mut Environment,
) -> TermRef {
    // identical terms generalize to themselves
    if t1 == t2 {
        return t1.clone();
    }

    // matched lambdas: alpha-rename both bodies to a common bound name and
    // recurse under the extended context
    if let (Term::Abs(x, body1), Term::Abs(y, body2)) = (t1.as_ref(), t2.as_ref()) {
        let name = shared_bound_name(x, y);
        let var = Term::var(name.clone());
        let body1 = subst_bound(body1, x, &var);
        let body2 = subst_bound(body2, y, &var);
        let body = generalize(&body1, &body2, &ctx.push_back(var), supply, env);
        return Rc::new(Term::Abs(name, body));
    }

    // rigid-rigid: equal constant heads with equal arity
    let (head1, args1) = spine(t1);
    let (head2, args2) = spine(t2);
    if let (Term::Const(c1), Term::Const(c2)) = (head1.as_ref(), head2.as_ref()) {
        if c1 == c2 && args1.len() == args2.len() {
            let args: Vec<_> = args1
                .iter()
                .zip(&args2)
                .map(|(a1, a2)| generalize(a1, a2, ctx, supply, env))
                .collect();
            return apply_spine(head1, args);
        }
    }

    // flex: reuse the variable for this exact pair or mint one, then apply
    // it to every bound variable in scope, outermost first
    let var = match env.reuse(t1, t2) {
        Some(var) => var.clone(),
        None => {
            let var = supply.fresh();
            env.bind(var.clone(), t1.clone(), t2.clone());
            var
        }
    };
    apply_spine(Term::var(var), ctx.iter().cloned())
}
