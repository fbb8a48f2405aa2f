mod readme;

use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let res = match args.last().map(|e| return e.as_str()) {
        Some("update-readme") => readme::update(),
        _ => {
            eprintln!("ERROR: No task selected");
            process::exit(1);
        }
    };

    if let Err(err) = res {
        eprintln!("ERROR: {err:#}");
        process::exit(1);
    }
}
