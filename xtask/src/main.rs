use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use flatruler_core::{Ruler, Unit};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let Some(cmd) = args.next() else {
        print_usage();
        return Err("missing command".to_string());
    };

    match cmd.as_str() {
        "precommit" => {
            let mut ci = false;
            for arg in args {
                match arg.as_str() {
                    "--ci" => ci = true,
                    _ => return Err(format!("unknown precommit flag: {arg}")),
                }
            }
            precommit(ci)
        }
        "calibration-table" => {
            let unit = match args.next() {
                Some(name) => name.parse::<Unit>().map_err(|e| e.to_string())?,
                None => Unit::Kilometers,
            };
            calibration_table(unit)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            Err(format!("unknown command: {cmd}"))
        }
    }
}

fn print_usage() {
    eprintln!("xtask commands:");
    eprintln!("  precommit [--ci]");
    eprintln!("  calibration-table [unit]");
}

fn repo_root() -> Result<PathBuf, String> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| "xtask must live inside the workspace".to_string())
}

fn precommit(ci: bool) -> Result<(), String> {
    let root = repo_root()?;
    let fmt: &[&str] = if ci {
        &["cargo", "fmt", "--all", "--", "--check"]
    } else {
        &["cargo", "fmt", "--all"]
    };
    let steps: [&[&str]; 7] = [
        fmt,
        &[
            "cargo",
            "clippy",
            "-p",
            "flatruler-core",
            "--all-features",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
        &[
            "cargo",
            "clippy",
            "-p",
            "flatruler-core",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
        &["cargo", "test", "--workspace"],
        &["cargo", "test", "-p", "flatruler-core", "--no-default-features"],
        &["cargo", "test", "-p", "flatruler-core", "--all-features"],
        &["cargo", "doc", "-p", "flatruler-core", "--no-deps"],
    ];

    for step in steps {
        run_step(&root, step)?;
    }
    Ok(())
}

fn run_step(cwd: &Path, args: &[&str]) -> Result<(), String> {
    let (bin, rest) = args
        .split_first()
        .ok_or_else(|| "empty command step".to_string())?;
    eprintln!("+ {}", args.join(" "));

    let status = Command::new(bin)
        .args(rest)
        .current_dir(cwd)
        .status()
        .map_err(|e| e.to_string())?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("command failed: {}", args.join(" ")))
    }
}

/// Scale factors every five degrees from the equator to 85° N.
fn calibration_table(unit: Unit) -> Result<(), String> {
    println!("{:>8} {:>16} {:>16}   ({unit} per degree)", "lat", "kx", "ky");
    for lat in (0..=85).step_by(5) {
        let ruler = Ruler::with_unit(f64::from(lat), unit).map_err(|e| e.to_string())?;
        println!("{lat:>8} {:>16.6} {:>16.6}", ruler.kx(), ruler.ky());
    }
    Ok(())
}
