use std::fs::{self, OpenOptions};
use std::io::Write;

use anyhow::{Context, Result};

pub struct Task {
    pub priority: i64,
    pub text: String,
}

pub struct Tracker {
    pending_file: String,
    completed_file: String,
}

impl Tracker {
    pub fn new(pending_file: String, completed_file: String) -> Self {
        Self { pending_file, completed_file }
    }

    pub fn add(&self, args: &[String]) -> Result<()> {
        let priority = args.first().and_then(|raw| raw.trim().parse::<i64>().ok());
        let text = if args.len() > 1 { args[1..].join(" ") } else { String::new() };

        match priority {
            Some(priority) if !text.is_empty() => {
                let mut tasks = self.load()?;
                tasks.push(Task { priority, text: text.clone() });
                // Keep the file sorted; stable, so ties stay in insertion order.
                tasks.sort_by_key(|task| task.priority);
                self.save(&tasks)?;
                println!("Added task: \"{text}\" with priority {priority}");
            }
            _ => println!("Error: Missing tasks string. Nothing added!"),
        }
        Ok(())
    }

    pub fn list(&self) -> Result<()> {
        let tasks = self.load()?;
        if tasks.is_empty() {
            println!("There are no pending tasks!");
        } else {
            for (i, task) in tasks.iter().enumerate() {
                println!("{}", listing_line(i + 1, task));
            }
        }
        Ok(())
    }

    pub fn delete(&self, args: &[String]) -> Result<()> {
        let mut tasks = self.load()?;
        let Some(index) = parse_index(args) else {
            println!("Error: Missing NUMBER for deleting tasks.");
            return Ok(());
        };

        match remove_at(&mut tasks, index) {
            Some(_) => {
                self.save(&tasks)?;
                println!("Deleted item with index {index}");
            }
            None => println!("Error: item with index {index} does not exist. Nothing deleted."),
        }
        Ok(())
    }

    pub fn done(&self, args: &[String]) -> Result<()> {
        let mut tasks = self.load()?;
        let Some(index) = parse_index(args) else {
            println!("Error: Missing NUMBER for marking tasks as done.");
            return Ok(());
        };

        match remove_at(&mut tasks, index) {
            Some(finished) => {
                self.save(&tasks)?;
                self.append_completed(&finished.text)?;
                println!("Marked item as done.");
            }
            None => println!("Error: no incomplete item with index {index} exists."),
        }
        Ok(())
    }

    pub fn report(&self) -> Result<()> {
        let tasks = self.load()?;
        let completed = self.read_completed();

        println!("Pending : {}", tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            println!("{}", listing_line(i + 1, task));
        }

        println!();
        println!("Completed : {}", completed.len());
        for (i, text) in completed.iter().enumerate() {
            println!("{}. {text}", i + 1);
        }
        Ok(())
    }

    // Store helpers

    fn load(&self) -> Result<Vec<Task>> {
        // A fresh install has no pending file yet; treat it as empty.
        let Ok(contents) = fs::read_to_string(&self.pending_file) else {
            return Ok(Vec::new());
        };

        let mut tasks = Vec::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let task = parse_line(line)
                .with_context(|| format!("{}: malformed task line {:?}", self.pending_file, line))?;
            tasks.push(task);
        }

        // Stable, so equal priorities keep their file order.
        tasks.sort_by_key(|task| task.priority);
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let lines: Vec<String> = tasks
            .iter()
            .map(|task| format!("{} {}", task.priority, task.text))
            .collect();
        fs::write(&self.pending_file, lines.join("\n"))
            .with_context(|| format!("could not write {}", self.pending_file))
    }

    fn append_completed(&self, text: &str) -> Result<()> {
        let mut log = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.completed_file)
            .with_context(|| format!("could not open {}", self.completed_file))?;
        writeln!(log, "{text}")
            .with_context(|| format!("could not append to {}", self.completed_file))
    }

    fn read_completed(&self) -> Vec<String> {
        fs::read_to_string(&self.completed_file)
            .unwrap_or_default()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

// Helper: split a stored line into priority and text
fn parse_line(line: &str) -> Option<Task> {
    let (token, text) = line.split_once(' ')?;
    let priority = token.parse::<i64>().ok()?;
    if text.is_empty() {
        return None;
    }
    Some(Task { priority, text: text.to_string() })
}

// Helper: parse a 1-based index from user arguments
fn parse_index(args: &[String]) -> Option<i64> {
    args.first().and_then(|raw| raw.trim().parse::<i64>().ok())
}

fn remove_at(tasks: &mut Vec<Task>, index: i64) -> Option<Task> {
    if index < 1 || index as usize > tasks.len() {
        return None;
    }
    Some(tasks.remove(index as usize - 1))
}

fn listing_line(position: usize, task: &Task) -> String {
    format!("{}. {} [{}]", position, task.text, task.priority)
}

const HELP: &str = "\
Usage :-
$ ./task add 2 hello world    # Add a new item with priority 2 and text \"hello world\" to the list
$ ./task ls                   # Show incomplete priority list items sorted by priority in ascending order
$ ./task del INDEX            # Delete the incomplete item with the given index
$ ./task done INDEX           # Mark the incomplete item with the given index as complete
$ ./task help                 # Show usage
$ ./task report               # Statistics";

pub fn help() {
    println!("{HELP}");
}
