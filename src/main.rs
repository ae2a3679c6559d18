//! rTimesheet main entrypoint.

use rtimesheet::run;

fn main() {
    println!();
    if let Err(e) = run() {
        // validation failures were already shown as a status line
        if !e.is_validation() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
