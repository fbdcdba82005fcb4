//! Interactive candidate selection.

use std::io::{BufRead, Write};

/// Prompts for a 1-based candidate number until a valid one is entered.
///
/// Non-numeric and out-of-range input is rejected with a message and the
/// prompt repeats; there is no retry limit. A closed input stream ends the
/// loop with `UnexpectedEof` instead of spinning.
pub fn select_candidate<R, W>(input: &mut R, output: &mut W, count: usize) -> std::io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "Enter file number to load (1-{count}): ")?;
        output.flush()?;

        let mut line = String::new();
        let bytes_read = input.read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before a file was selected",
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return Ok(choice),
            Ok(_) => writeln!(output, "Please enter a number between 1 and {count}")?,
            Err(_) => writeln!(output, "Please enter a valid number")?,
        }
    }
}
