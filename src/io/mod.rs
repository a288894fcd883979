//! Input/output abstractions
//!
//! Provides traits for input and output operations, enabling testing
//! by allowing mock implementations.

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::runtime::Runtime;

/// What came back from a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line, without its trailing newline
    Line(String),
    /// End of input or an interrupt signal
    Closed,
}

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user with a prompt
    fn read_line(&mut self, prompt: &str) -> io::Result<Input>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal input from stdin.
///
/// Each read races the next stdin line against Ctrl-C on a
/// single-threaded runtime, so an interrupt arrives as [`Input::Closed`]
/// instead of killing the process.
///
/// Only interrupts that land while a prompt is waiting are seen. The
/// first read installs tokio's SIGINT handler for the rest of the
/// process, and each `ctrl_c()` listener only observes signals raised
/// after it starts, so a Ctrl-C pressed while output is being printed
/// between prompts is dropped.
pub struct TerminalInput {
    runtime: Option<Runtime>,
    lines: Lines<BufReader<Stdin>>,
}

impl TerminalInput {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let lines = {
            let _guard = runtime.enter();
            BufReader::new(tokio::io::stdin()).lines()
        };
        Ok(Self {
            runtime: Some(runtime),
            lines,
        })
    }
}

impl InputReader for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Input> {
        print!("{} ", prompt);
        io::stdout().flush()?;

        let runtime = self.runtime.as_ref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::BrokenPipe, "terminal already shut down")
        })?;
        let lines = &mut self.lines;
        runtime.block_on(async {
            tokio::select! {
                line = lines.next_line() => Ok(match line? {
                    Some(line) => Input::Line(line),
                    None => {
                        println!();
                        log::info!("end of input");
                        Input::Closed
                    }
                }),
                signal = tokio::signal::ctrl_c() => {
                    signal?;
                    println!();
                    log::info!("interrupt received");
                    Ok(Input::Closed)
                }
            }
        })
    }
}

impl Drop for TerminalInput {
    // A stdin read may still be parked on the blocking pool.
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// Terminal output to stdout
pub struct TerminalOutput;

impl OutputWriter for TerminalOutput {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
