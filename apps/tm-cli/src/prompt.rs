//! Interactive step-count prompt.

use std::io::{BufRead, Write};

use tm_app::{AppError, AppResult};
use tm_scenario::{MAX_STEPS, validate_steps};

/// Ask for the number of simulation steps and validate the answer.
pub fn prompt_steps<R: BufRead, W: Write>(mut input: R, mut output: W) -> AppResult<i64> {
    write!(output, "Enter the number of simulation steps (1..={}): ", MAX_STEPS)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InvalidInput("no step count given".to_string()));
    }

    let steps: i64 = line
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not an integer", line.trim())))?;
    validate_steps(steps)?;
    Ok(steps)
}
