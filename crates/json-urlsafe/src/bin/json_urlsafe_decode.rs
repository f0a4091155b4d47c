//! `json-urlsafe-decode` — decode a framed URL-safe string (stdin) to JSON (stdout).
//!
//! Usage:
//!   json-urlsafe-decode [--max-size BYTES] [--compact]

use json_urlsafe::cli::{decode_to_json, init_logging, parse_args};
use std::io::{self, Read};

fn main() {
    init_logging();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match decode_to_json(&buf, &args) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
