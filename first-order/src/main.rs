use anyhow::Result;
use first_order::generalize::{anti_unify, anti_unify_list, Environment};
use first_order::term::{Term, TermRef};
use util::repl;

fn print_env(env: &Environment) {
    println!("env:");
    for entry in env.iter() {
        println!("  {} -> ({}, {})", entry.var, entry.left, entry.right);
    }
}

fn show_pair(t1: &TermRef, t2: &TermRef) {
    let (gen, env) = anti_unify(t1, t2);
    println!("t1:  {t1}");
    println!("t2:  {t2}");
    println!("lgg: {gen}");
    print_env(&env);
}

fn demo_basic() {
    // f(a, g(b)) vs f(c, g(d))
    let t1 = Term::func(
        "f",
        vec![
            Term::constant("a"),
            Term::func("g", vec![Term::constant("b")]),
        ],
    );
    let t2 = Term::func(
        "f",
        vec![
            Term::constant("c"),
            Term::func("g", vec![Term::constant("d")]),
        ],
    );
    show_pair(&t1, &t2);
}

fn demo_sharing() {
    // the same disagreement at both positions reuses one variable
    let t1 = Term::func("f", vec![Term::constant("a"), Term::constant("a")]);
    let t2 = Term::func("f", vec![Term::constant("b"), Term::constant("b")]);
    show_pair(&t1, &t2);
}

fn demo_clash() {
    // different head symbols collapse to a single variable
    let t1 = Term::func("f", vec![Term::constant("a")]);
    let t2 = Term::func("g", vec![Term::constant("a"), Term::constant("b")]);
    show_pair(&t1, &t2);
}

fn demo_list() {
    let ts1 = vec![
        Term::constant("a"),
        Term::func("h", vec![Term::constant("b"), Term::constant("c")]),
    ];
    let ts2 = vec![
        Term::constant("x"),
        Term::func("h", vec![Term::constant("y"), Term::constant("c")]),
    ];
    match anti_unify_list(&ts1, &ts2) {
        Ok((gens, env)) => {
            let rendered: Vec<String> = gens.iter().map(|t| t.to_string()).collect();
            println!("list lgg: [{}]", rendered.join(", "));
            print_env(&env);
        }
        Err(e) => eprintln!("Error: {e}"),
    }
}

fn show_help() {
    println!(
        "{}",
        r#"
basic    -- f(a, g(b)) vs f(c, g(d))
sharing  -- f(a, a) vs f(b, b)
clash    -- f(a) vs g(a, b)
list     -- [a, h(b, c)] vs [x, h(y, c)]
all      -- run every demo
:help    -- show this message
        "#
        .trim()
    );
}

struct Repl;
impl repl::Repl for Repl {
    type Error = anyhow::Error;
    const HISTORY: Option<&'static str> = Some("/tmp/first-order.history");
    fn evaluate(&mut self, input: String) -> Result<(), Self::Error> {
        match input.trim() {
            "" => {}
            "basic" => demo_basic(),
            "sharing" => demo_sharing(),
            "clash" => demo_clash(),
            "list" => demo_list(),
            "all" => {
                for (name, demo) in [
                    ("basic", demo_basic as fn()),
                    ("sharing", demo_sharing),
                    ("clash", demo_clash),
                    ("list", demo_list),
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
    println!("Hi, this is a first-order anti-unification demo. :h to show help");
    println!();
    repl::start_repl(Repl)?;
    Ok(())
}
