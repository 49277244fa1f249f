use std::rc::Rc;

use util::Name;

pub type TermRef = Rc<Term>;

/// A ranked first-order term. Equality is structural, never identity-based;
/// the equal-terms base case and environment reuse both depend on that.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Term {
    /// `X0`
    Var(Name),
    /// `a`
    Const(Name),
    /// `f(t1, ..., tn)`
    Func(Name, Vec<TermRef>),
}

impl Term {
    pub fn var(name: impl Into<Name>) -> TermRef {
        Rc::new(Term::Var(name.into()))
    }

    pub fn constant(name: impl Into<Name>) -> TermRef {
        Rc::new(Term::Const(name.into()))
    }

    pub fn func(symbol: impl Into<Name>, args: Vec<TermRef>) -> TermRef {
        Rc::new(Term::Func(symbol.into(), args))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(name) => write!(f, "{name}"),
            Term::Const(name) => write!(f, "{name}"),
            Term::Func(symbol, args) => {
                write!(f, "{symbol}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
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
    fn test_display() {
        let t = Term::func(
            "f",
            vec![
                Term::constant("a"),
                Term::func("g", vec![Term::var("X0")]),
            ],
        );
        assert_eq!(t.to_string(), "f(a, g(X0))");
    }

    #[test]
    fn test_structural_equality() {
        let t1 = Term::func("f", vec![Term::constant("a")]);
        let t2 = Term::func("f", vec![Term::constant("a")]);
        assert_eq!(t1, t2);
        assert_ne!(t1, Term::func("f", vec![Term::constant("b")]));
        assert_ne!(t1, Term::func("f", vec![]));
    }
}
