//! Array input for the player: comma-separated parsing with the bounds the
//! bar renderer is laid out for, plus bounded random generation. Validation
//! lives here so the history engine never sees malformed input.

use rand::Rng;
use thiserror::Error;

pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 25;
pub const MAX_VALUE: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseArrayError {
    #[error("array must have between {MIN_SIZE} and {MAX_SIZE} numbers, got {0}")]
    Size(usize),
    #[error("'{0}' is not a valid number")]
    NotANumber(String),
    #[error("number {0} is out of range, use values between 1 and {MAX_VALUE}")]
    OutOfRange(u32),
}

/// Parse a comma-separated list like "15, 6, 2, 18, 9".
pub fn parse_array(input: &str) -> Result<Vec<u32>, ParseArrayError> {
    let fields: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if fields.len() < MIN_SIZE || fields.len() > MAX_SIZE {
        return Err(ParseArrayError::Size(fields.len()));
    }

    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        let value: u32 = field
            .parse()
            .map_err(|_| ParseArrayError::NotANumber(field.to_string()))?;
        if value == 0 || value > MAX_VALUE {
            return Err(ParseArrayError::OutOfRange(value));
        }
        values.push(value);
    }
    Ok(values)
}

/// A random array within the player's size and value bounds.
pub fn random_array(rng: &mut impl Rng) -> Vec<u32> {
    let size = rng.gen_range(MIN_SIZE..=MAX_SIZE);
    (0..size).map(|_| rng.gen_range(1..=MAX_VALUE)).collect()
}
