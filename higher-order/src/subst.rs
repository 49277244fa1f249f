//! Alpha-renaming support: choosing a common bound name for two matched
//! lambdas, and capture-avoiding substitution of a bound name.

use std::rc::Rc;

use util::Name;

use crate::term::{Term, TermRef};

/// The replacement bound name used when two matched binders disagree.
///
/// Fixed rather than fresh: a free `z` in either body will be captured.
/// Preserved as-is; see the known-limitation test in `generalize`.
const REPLACEMENT_NAME: &str = "z";

/// A single bound name shared by both sides of a matched lambda pair: the
/// original name when both agree, the fixed replacement otherwise.
pub fn shared_bound_name(x: &Name, y: &Name) -> Name {
    if x == y {
        x.clone()
    } else {
        Name::new(REPLACEMENT_NAME)
    }
}

/// Replace every occurrence of the bound name `old` in `t` by the term
/// `var`, without descending into the body of an inner lambda that rebinds
/// `old` (those occurrences refer to the inner binder).
pub fn subst_bound(t: &TermRef, old: &Name, var: &TermRef) -> TermRef {
    match t.as_ref() {
        Term::Var(name) if name == old => var.clone(),
        Term::Var(_) | Term::Const(_) => t.clone(),
        Term::Apply(fun, arg) => Rc::new(Term::Apply(
            subst_bound(fun, old, var),
            subst_bound(arg, old, var),
        )),
        Term::Abs(name, _) if name == old => t.clone(),
        Term::Abs(name, body) => Rc::new(Term::Abs(name.clone(), subst_bound(body, old, var))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shared_name_keeps_agreeing_binders() {
        assert_eq!(
            shared_bound_name(&Name::new("x"), &Name::new("x")),
            Name::new("x")
        );
        assert_eq!(
            shared_bound_name(&Name::new("x"), &Name::new("y")),
            Name::new("z")
        );
    }

    #[test]
    fn test_subst_replaces_occurrences() {
        // f x x -> f z z
        let t = crate::term::apply_spine(
            Term::constant("f"),
            [Term::var("x"), Term::var("x")],
        );
        let z = Term::var("z");
        assert_eq!(
            subst_bound(&t, &Name::new("x"), &z),
            crate::term::apply_spine(Term::constant("f"), [z.clone(), z])
        );
    }

    #[test]
    fn test_subst_leaves_constants_and_other_variables() {
        let t = Term::apply(Term::constant("x"), Term::var("y"));
        assert_eq!(subst_bound(&t, &Name::new("x"), &Term::var("z")), t);
    }

    #[test]
    fn test_subst_stops_at_shadowing_binder() {
        // x (λx. x) -> z (λx. x): only the outer occurrence is renamed
        let t = Term::apply(
            Term::var("x"),
            Term::lambda("x", Term::var("x")),
        );
        let renamed = subst_bound(&t, &Name::new("x"), &Term::var("z"));
        assert_eq!(
            renamed,
            Term::apply(Term::var("z"), Term::lambda("x", Term::var("x")))
        );
    }

    #[test]
    fn test_subst_descends_through_other_binders() {
        // λy. x -> λy. z
        let t = Term::lambda("y", Term::var("x"));
        assert_eq!(
            subst_bound(&t, &Name::new("x"), &Term::var("z")),
            Term::lambda("y", Term::var("z"))
        );
    }
}
