use std::env;

use anyhow::Result;
use task::{help, Tracker};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Both files live in the current working directory.
    let tracker = Tracker::new("task.txt".to_string(), "completed.txt".to_string());

    if args.len() > 1 {
        let command = args[1].as_str();
        match command {
            "add"    => tracker.add(&args[2..])?,
            "ls"     => tracker.list()?,
            "del"    => tracker.delete(&args[2..])?,
            "done"   => tracker.done(&args[2..])?,
            "report" => tracker.report()?,
            "help" | "--help" | "-h" => help(),
            _ => help(),
        }
    } else {
        // Default if no command provided
        help();
    }

    Ok(())
}
