//! `json-urlsafe-encode` — encode JSON (stdin) to a framed URL-safe string (stdout).
//!
//! Usage:
//!   json-urlsafe-encode [--level 0-9]

use json_urlsafe::cli::{encode_json, init_logging, parse_args};
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

    match encode_json(buf.trim(), args.options) {
        Ok(framed) => println!("{framed}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
