use std::io::{self, BufRead, Write};

use super::{Reply, Session, show};

pub fn run(seed: Option<u64>, plain: bool) -> Result<(), String> {
    let (mut session, intro) = Session::start(seed)?;
    show(&intro, plain);
    println!("Type 'help' for commands, 'restart' to start over, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.handle(&line)? {
            Reply::Text(text) => {
                show(&text, plain);
                println!();
            }
            Reply::Quit => break,
        }
    }

    Ok(())
}
