//! Interactive stdin prompts

use crate::error::TubeError;
use crate::Result;
use std::io::{self, BufRead, Write};

/// Prompt for a video URL
pub fn read_url() -> Result<String> {
    print!("Enter the video URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a menu selection in `1..=max`, re-prompting on invalid input.
///
/// Only end-of-input breaks the loop; a closed stdin would otherwise spin
/// forever.
pub fn read_selection(max: usize) -> Result<usize> {
    let stdin = io::stdin();
    loop {
        print!("Enter the number for the desired option: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(TubeError::InvalidState("input stream closed".to_string()));
        }

        match parse_selection(&line, max) {
            Some(choice) => return Ok(choice),
            None => println!("Invalid choice. Please enter a valid number."),
        }
    }
}

/// Parse a menu selection, accepting only integers in `1..=max`
fn parse_selection(input: &str, max: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=max).contains(n))
}
