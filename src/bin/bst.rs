use classics::tree::Tree;

const HELP: &str = "\
    bst - insert, query, and remove values in a binary search tree

    USAGE:
        bst [--quiet] [--find VALUE]... [--remove VALUE]... [VALUES]...

    OPTIONS:
        --find VALUE        A value to look up after inserting. May be repeated. Defaults to
                            looking up 40 and 100.
        --remove VALUE      A value to remove, in order, after the lookups. May be repeated.
                            Defaults to removing 20, 30, then 50.
        --quiet             If present, all non-error output is suppressed.

    ARGS:
        VALUES              Integers to insert, in order. Defaults to 50 30 70 20 40 60 80.
";

const DEFAULT_VALUES: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];
const DEFAULT_FINDS: [i64; 2] = [40, 100];
const DEFAULT_REMOVES: [i64; 3] = [20, 30, 50];

#[derive(Debug, Eq, PartialEq)]
struct BstArgs {
    quiet: bool,
    find: Vec<i64>,
    remove: Vec<i64>,
    values: Vec<i64>,
}

fn main() {
    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let mut tree: Tree<i64> = args.values.iter().copied().collect();
    report(&args, format!("In-order traversal: {}", join(&tree)));

    for value in &args.find {
        let found = if tree.contains(value) { "Yes" } else { "No" };
        report(&args, format!("Contains {}: {}", value, found));
    }

    if let Some(min) = tree.min() {
        report(&args, format!("Minimum value: {}", min));
    }

    for value in &args.remove {
        tree.remove(value);
        report(&args, format!("After removing {}: {}", value, join(&tree)));
    }
}

fn report(args: &BstArgs, line: String) {
    if !args.quiet {
        println!("{}", line);
    }
}

fn join(tree: &Tree<i64>) -> String {
    tree.iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_args() -> Result<BstArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let quiet = pargs.contains("--quiet");
    let mut find: Vec<i64> = pargs.values_from_str("--find")?;
    let mut remove: Vec<i64> = pargs.values_from_str("--remove")?;
    let mut values = Vec::new();
    while let Some(value) = pargs.opt_free_from_str::<i64>()? {
        values.push(value);
    }

    if values.is_empty() {
        values = DEFAULT_VALUES.to_vec();
    }
    if find.is_empty() {
        find = DEFAULT_FINDS.to_vec();
    }
    if remove.is_empty() {
        remove = DEFAULT_REMOVES.to_vec();
    }

    Ok(BstArgs {
        quiet,
        find,
        remove,
        values,
    })
}
