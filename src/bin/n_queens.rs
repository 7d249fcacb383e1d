use drills::queens::{validate_board, SolutionReport, SolveLimits, Solver};

const USAGE: &str =
    "Usage: n_queens <N> [--count] [--json] [--check] [--max-solutions <M>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Boards,
    Count,
    Json,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let n: usize = match args[1].parse() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("invalid board size {}: {e}\n\n{USAGE}", args[1]);
            std::process::exit(2);
        }
    };

    let mut output = Output::Boards;
    let mut check = false;
    let mut limits = SolveLimits::default();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                output = Output::Count;
                i += 1;
            }
            "--json" => {
                output = Output::Json;
                i += 1;
            }
            "--check" => {
                check = true;
                i += 1;
            }
            "--max-solutions" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--max-solutions requires an integer argument");
                    std::process::exit(2);
                };
                limits.max_solutions = match v.parse() {
                    Ok(x) => x,
                    Err(e) => {
                        eprintln!("invalid --max-solutions {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}\n\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let solver = match Solver::new(n, limits) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if output == Output::Count {
        println!("{}", solver.count());
        return;
    }

    let report = match SolutionReport::from_solver(&solver) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    if check {
        for (k, board) in report.solutions.iter().enumerate() {
            if let Err(e) = validate_board(board) {
                eprintln!("Solution {k} failed verification: {e}");
                std::process::exit(1);
            }
        }
    }

    match output {
        Output::Json => match report.to_json_pretty() {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        _ => {
            for board in &report.solutions {
                for row in board {
                    println!("{row}");
                }
                println!();
            }
            println!("n = {}: {} solutions", report.n, report.count);
        }
    }
}
