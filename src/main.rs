use std::io::Write;
use std::process::exit;

fn main() {
    drop(env_logger::try_init());

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    match cubic::cli::run(&args) {
        Ok(lines) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for line in lines.iter() {
                if writeln!(out, "{}", line).is_err() {
                    exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}
