use anyhow::Result;
use higher_order::generalize::{ho_anti_unify, Environment};
use higher_order::term::{apply_spine, Term, TermRef};
use util::repl;

fn show_pair(t1: &TermRef, t2: &TermRef) {
    let (gen, env) = ho_anti_unify(t1, t2);
    println!("t1:  {t1}");
    println!("t2:  {t2}");
    println!("lgg: {gen}");
    print_env(&env);
}

fn print_env(env: &Environment) {
    println!("env:");
    for entry in env.iter() {
        println!("  {} -> ({}, {})", entry.var, entry.left, entry.right);
    }
}

fn demo_apply() {
    // λx. f x vs λx. g x
    let t1 = Term::lambda("x", Term::apply(Term::constant("f"), Term::var("x")));
    let t2 = Term::lambda("x", Term::apply(Term::constant("g"), Term::var("x")));
    show_pair(&t1, &t2);
}

fn demo_nested() {
    // λx. T (G x) vs λy. T (H y): the bound names disagree
    let t1 = Term::lambda(
        "x",
        Term::apply(
            Term::constant("T"),
            Term::apply(Term::constant("G"), Term::var("x")),
        ),
    );
    let t2 = Term::lambda(
        "y",
        Term::apply(
            Term::constant("T"),
            Term::apply(Term::constant("H"), Term::var("y")),
        ),
    );
    show_pair(&t1, &t2);
}

fn demo_flex() {
    // λx. c vs λx. x: the fresh variable is applied to the binder
    let t1 = Term::lambda("x", Term::constant("c"));
    let t2 = Term::lambda("x", Term::var("x"));
    show_pair(&t1, &t2);
}

fn demo_sharing() {
    // c (f a) (f a) vs c (g a) (g a): one variable, used twice
    let t1 = apply_spine(
        Term::constant("c"),
        [
            Term::apply(Term::constant("f"), Term::constant("a")),
            Term::apply(Term::constant("f"), Term::constant("a")),
        ],
    );
    let t2 = apply_spine(
        Term::constant("c"),
        [
            Term::apply(Term::constant("g"), Term::constant("a")),
            Term::apply(Term::constant("g"), Term::constant("a")),
        ],
    );
    show_pair(&t1, &t2);
}

fn show_help() {
    println!(
        "{}",
        r#"
apply    -- λx. f x vs λx. g x
nested   -- λx. T (G x) vs λy. T (H y)
flex     -- λx. c vs λx. x
sharing  -- c (f a) (f a) vs c (g a) (g a)
all      -- run every demo
:help    -- show this message
        "#
        .trim()
    );
}

struct Repl;
impl repl::Repl for Repl {
    type Error = anyhow::Error;
    const HISTORY: Option<&'static str> = Some("/tmp/higher-order.history");
    fn evaluate(&mut self, input: String) -> Result<(), Self::Error> {
        match input.trim() {
            "" => {}
            "apply" => demo_apply(),
            "nested" => demo_nested(),
            "flex" => demo_flex(),
            "sharing" => demo_sharing(),
            "all" => {
                for (name, demo) in [
                    ("apply", demo_apply as fn()),
                    ("nested", demo_nested),
                    ("flex", demo_flex),
                    ("sharing", demo_sharing),
                ] {
                    println!("--- {name} ---");
                    demo();
                }
            }
            ":help" | ":h" => show_help(),
            other => {
                eprintln!("Unknown command {other}");
                show_help();
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("Hi, this is a higher-order anti-unification demo. :h to show help");
    println!();
    repl::start_repl(Repl)?;
    Ok(())
}
