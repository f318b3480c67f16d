use std::path::Path;
use std::process::ExitCode;

use crcview_checksum::{checksum_file, Algorithm};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("usage: crcview <file>...");
        return ExitCode::FAILURE;
    }

    let mut failed = false;
    for arg in &args {
        let path = Path::new(arg);
        println!("{arg}");

        for algorithm in Algorithm::ALL {
            match checksum_file(path, algorithm) {
                Ok(hex) => println!("  {:<8} {hex}", algorithm.name()),
                Err(err) => {
                    eprintln!("  {:<8} {err}", algorithm.name());
                    failed = true;
                    break;
                }
            }
        }
        println!();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
