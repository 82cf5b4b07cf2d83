use std::fs;
use std::path::Path;

use super::{Reply, Session, show};

pub fn run(file: &Path, seed: Option<u64>, plain: bool) -> Result<(), String> {
    let script = fs::read_to_string(file)
        .map_err(|e| format!("failed to read {}: {e}", file.display()))?;

    let (mut session, intro) = Session::start(seed)?;
    show(&intro, plain);

    for command in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        println!("> {command}");
        match session.handle(command)? {
            Reply::Text(text) => {
                show(&text, plain);
                println!();
            }
            Reply::Quit => break,
        }
    }

    Ok(())
}
