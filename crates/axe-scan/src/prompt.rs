//! Yes/no confirmation on the terminal.

use std::io::{self, BufRead, Write};

/// Ask `question` and read one answer line. Only `y` or `yes` confirm.
pub fn confirm<R: BufRead, W: Write>(question: &str, mut input: R, mut output: W) -> io::Result<bool> {
    write!(output, "{} ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
