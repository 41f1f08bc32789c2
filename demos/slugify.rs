use slugify_rs::{CollisionTracker, Options};
use std::env;

/// Prints a unique slug for each argument.
///
/// Usage: cargo run --example slugify [--separator <sep>] [--max-length <n>] <text>...
fn main() {
    env_logger::init();

    let mut opts = Options::default();
    let mut inputs = Vec::new();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--separator" => {
                let sep = args.next().unwrap_or_else(|| usage("--separator needs a value"));
                opts = opts.separator(sep);
            }
            "--max-length" => {
                let max = args
                    .next()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or_else(|| usage("--max-length needs a number"));
                opts = opts.max_length(max);
            }
            _ => inputs.push(arg),
        }
    }

    if inputs.is_empty() {
        usage("no input text given");
    }

    let mut tracker = CollisionTracker::new();
    for input in &inputs {
        match tracker.try_invoke(input, &opts) {
            Ok(slug) => println!("{}", slug),
            Err(err) => {
                eprintln!("{:?}: {}", input, err);
                std::process::exit(1);
            }
        }
    }
}

fn usage(problem: &str) -> ! {
    eprintln!("{}", problem);
    eprintln!("Usage: slugify [--separator <sep>] [--max-length <n>] <text>...");
    std::process::exit(1);
}
