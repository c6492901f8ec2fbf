use std::fs;
use std::io;
use std::process;

use bracket_check::checker;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let json_mode = args.iter().any(|arg| arg == "--json");
    let path = args.iter().skip(1).find(|arg| !arg.starts_with("--"));

    let path = match path {
        Some(p) => p,
        None => {
            eprintln!("Usage: bracket-check [--json] <file>");
            process::exit(2);
        }
    };

    let contents = fs::read_to_string(path)?;
    let diagnostic = checker::check_source(&contents);

    if json_mode {
        let rendered =
            serde_json::to_string(&diagnostic).expect("diagnostic serializes to JSON");
        println!("{}", rendered);
    } else {
        println!("{}", diagnostic);
    }

    if !diagnostic.is_balanced() {
        process::exit(1);
    }

    Ok(())
}
