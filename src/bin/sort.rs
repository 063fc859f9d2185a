use classics::sort;

const HELP: &str = "\
    sort - sort a handful of integers from smallest to biggest

    USAGE:
        sort [--algorithm ALGORITHM] [VALUES]...

    OPTIONS:
        --algorithm ALGORITHM   Which sort to use. ALGORITHM is one of 'bubble' or 'merge'.
                                Defaults to 'merge'.

    ARGS:
        VALUES                  Integers to sort. Defaults to 9 5 1 4 3 8 2 7 6.
";

const DEFAULT_VALUES: [i64; 9] = [9, 5, 1, 4, 3, 8, 2, 7, 6];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    Bubble,
    Merge,
}

#[derive(Debug, Eq, PartialEq)]
struct SortArgs {
    algorithm: Algorithm,
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

    let mut values = args.values;
    println!("Before sorting: {}", join(&values));
    match args.algorithm {
        Algorithm::Bubble => sort::bubble_sort(&mut values),
        Algorithm::Merge => sort::merge_sort(&mut values),
    }
    println!("After sorting (smallest to biggest): {}", join(&values));
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_args() -> Result<SortArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let algorithm = pargs
        .opt_value_from_fn("--algorithm", parse_algorithm)?
        .unwrap_or(Algorithm::Merge);
    let mut values = Vec::new();
    while let Some(value) = pargs.opt_free_from_str::<i64>()? {
        values.push(value);
    }
    if values.is_empty() {
        values = DEFAULT_VALUES.to_vec();
    }

    Ok(SortArgs { algorithm, values })
}

fn parse_algorithm(s: &str) -> Result<Algorithm, &'static str> {
    match s {
        "bubble" => Ok(Algorithm::Bubble),
        "merge" => Ok(Algorithm::Merge),
        _ => Err("unrecognized sorting algorithm"),
    }
}
