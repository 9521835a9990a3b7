use std::io::{self, BufRead, Write};

use crate::session::Session;

/// Printed before every line of input.
pub const PROMPT: &str = ">> ";

/// Runs a read-eval-print loop until `input` is exhausted.
///
/// Each line is run through `session`, so bindings persist between lines.
/// The inspect rendering of each result is written to `output`; a line that
/// only binds a name prints nothing. Parse diagnostics are written one per
/// line, indented by a tab, instead of a result.
///
/// # Example
/// ```
/// use monkey::{Session, repl};
///
/// let input = b"let x = 2;\nx + 3\n";
/// let mut output = Vec::new();
/// repl::start(&input[..], &mut output, &mut Session::new()).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> >> 5\n>> ");
/// ```
pub fn start(input: impl BufRead, mut output: impl Write, session: &mut Session) -> io::Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match session.run(&line) {
            Ok(Some(value)) => writeln!(output, "{}", value.inspect())?,
            Ok(None) => {},
            Err(errors) => {
                for error in errors.errors() {
                    writeln!(output, "\t{error}")?;
                }
            },
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    Ok(())
}
