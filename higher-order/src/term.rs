use std::rc::Rc;

use util::Name;

pub type TermRef = Rc<Term>;

/// A lambda term. Applications are binary and curried; an n-ary call is a
/// left-nested chain of `Apply` nodes (a spine). Equality is structural.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Term {
    /// `x`, `F0`
    Var(Name),
    /// `f`
    Const(Name),
    /// `t t`
    Apply(TermRef, TermRef),
    /// `λx. t`
    Abs(Name, TermRef),
}

impl Term {
    pub fn var(name: impl Into<Name>) -> TermRef {
        Rc::new(Term::Var(name.into()))
    }

    pub fn constant(name: impl Into<Name>) -> TermRef {
        Rc::new(Term::Const(name.into()))
    }

    pub fn apply(fun: TermRef, arg: TermRef) -> TermRef {
        Rc::new(Term::Apply(fun, arg))
    }

    pub fn lambda(name: impl Into<Name>, body: TermRef) -> TermRef {
        Rc::new(Term::Abs(name.into(), body))
    }
}

/// Decompose a term into its head and argument list:
/// `(((f a) b) c)` -> `(f, [a, b, c])`.
pub fn spine(t: &TermRef) -> (TermRef, Vec<TermRef>) {
    let mut head = t.clone();
    let mut args = Vec::new();
    loop {
        let fun = match head.as_ref() {
            Term::Apply(fun, arg) => {
                args.push(arg.clone());
                fun.clone()
            }
            _ => break,
        };
        head = fun;
    }
    args.reverse();
    (head, args)
}

/// Re-apply `head` to `args` in order: `(f, [a, b, c])` -> `(((f a) b) c)`.
pub fn apply_spine(head: TermRef, args: impl IntoIterator<Item = TermRef>) -> TermRef {
    args.into_iter().fold(head, Term::apply)
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(name) => write!(f, "{name}"),
            Term::Const(name) => write!(f, "{name}"),
            Term::Abs(name, body) => write!(f, "(λ{name}. {body})"),
            Term::Apply(fun, arg) => {
                // flatten the spine for readability
                let mut head: &Term = fun;
                let mut args = vec![arg];
                while let Term::Apply(fun, arg) = head {
                    args.push(arg);
                    head = fun.as_ref();
                }
                write!(f, "({head}")?;
                for arg in args.iter().rev() {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_flattens_spines() {
        let t = apply_spine(
            Term::constant("f"),
            [Term::constant("a"), Term::var("x")],
        );
        assert_eq!(t.to_string(), "(f a x)");
    }

    #[test]
    fn test_display_lambda() {
        let t = Term::lambda("x", Term::apply(Term::constant("f"), Term::var("x")));
        assert_eq!(t.to_string(), "(λx. (f x))");
    }

    #[test]
    fn test_spine_unwinds_nested_applications() {
        let head = Term::constant("f");
        let args = vec![Term::constant("a"), Term::constant("b"), Term::var("c")];
        let t = apply_spine(head.clone(), args.clone());
        assert_eq!(spine(&t), (head, args));
    }

    #[test]
    fn test_spine_of_non_application() {
        let t = Term::lambda("x", Term::var("x"));
        let (h, args) = spine(&t);
        assert_eq!(h, t);
        assert!(args.is_empty());
    }
}
