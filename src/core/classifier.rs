use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

/// Per-number output token: "fizz", "buzz", "fizz buzz", or the number itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(u64),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Fizz => write!(f, "fizz"),
            Label::Buzz => write!(f, "buzz"),
            Label::FizzBuzz => write!(f, "fizz buzz"),
            Label::Number(n) => write!(f, "{}", n),
        }
    }
}

fn is_divisible(number: u64, divisor: u64) -> bool {
    number % divisor == 0
}

pub fn label(number: u64) -> Label {
    match (is_divisible(number, 3), is_divisible(number, 5)) {
        (true, true) => Label::FizzBuzz,
        (true, false) => Label::Fizz,
        (false, true) => Label::Buzz,
        (false, false) => Label::Number(number),
    }
}

/// Labels for 1..=up_to. `up_to == 0` yields an empty sequence.
pub fn labels(up_to: u64) -> Vec<String> {
    (1..=up_to).map(|n| label(n).to_string()).collect()
}

pub fn render(up_to: u64) -> String {
    labels(up_to).join(", ")
}

/// Streams the rendered sequence plus a trailing newline to the writer.
pub fn write_report<W: Write>(writer: &mut W, up_to: u64) -> Result<()> {
    tracing::debug!("Rendering classifier labels for 1..={}", up_to);
    writeln!(writer, "{}", render(up_to))?;
    Ok(())
}
