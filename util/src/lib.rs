//! Machinery shared by both generalization engines: names, the fresh-name
//! supply, the generalization environment, and the demo REPL plumbing.

pub mod env;
pub mod repl;

pub use env::{Entry, Env};

use std::rc::Rc;

/// A name for a variable, constant, or function symbol. Cheap to clone,
/// compared by value.
#[derive(PartialEq, Eq, Clone, derive_more::Display, Debug)]
#[display(fmt = "{_0}")]
pub struct Name(Rc<String>);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Name(Rc::new(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name::new(name)
    }
}

/// Sequential supply of generalization-variable names: `X0`, `X1`, ...
///
/// Owned by a single top-level generalization call; two independent calls
/// each start their own supply at zero.
#[derive(Debug)]
pub struct NameSupply {
    prefix: &'static str,
    counter: usize,
}

impl NameSupply {
    pub fn new(prefix: &'static str) -> Self {
        NameSupply { prefix, counter: 0 }
    }

    pub fn fresh(&mut self) -> Name {
        let name = Name::new(format!("{}{}", self.prefix, self.counter));
        self.counter += 1;
        name
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_name_display() {
        assert_eq!(Name::new("X0").to_string(), "X0");
    }

    #[test]
    fn test_name_equality_by_value() {
        assert_eq!(Name::new("f"), Name::from("f"));
        assert_ne!(Name::new("f"), Name::new("g"));
    }

    #[test]
    fn test_supply_is_sequential() {
        let mut supply = NameSupply::new("X");
        assert_eq!(supply.fresh(), Name::new("X0"));
        assert_eq!(supply.fresh(), Name::new("X1"));
        assert_eq!(supply.fresh(), Name::new("X2"));
    }

    #[test]
    fn test_supplies_are_independent() {
        let mut a = NameSupply::new("F");
        let mut b = NameSupply::new("F");
        a.fresh();
        assert_eq!(b.fresh(), Name::new("F0"));
    }
}
