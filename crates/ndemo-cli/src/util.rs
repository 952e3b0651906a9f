use anyhow::{Context, Result};
use clap::ArgMatches;
use ndemo_array::Literal;
use std::any::Any;

/// Value of `id` when this command defines the argument and it was given.
pub fn arg<'a, T>(matches: &'a ArgMatches, id: &str) -> Option<&'a T>
where
    T: Any + Clone + Send + Sync + 'static,
{
    matches.try_get_one::<T>(id).ok().flatten()
}

/// Parses a shape written as `4,4`, `4x4` or `(4, 4)`.
pub fn parse_shape(text: &str) -> Result<Vec<usize>> {
    let trimmed = text.trim().trim_start_matches('(').trim_end_matches(')');
    let dims = trimmed
        .split(|c: char| c == ',' || c == 'x')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .with_context(|| format!("Invalid dimension '{}' in shape '{}'", part, text))
        })
        .collect::<Result<Vec<_>>>()?;
    if dims.is_empty() {
        anyhow::bail!("Shape must have at least one dimension: '{}'", text);
    }
    Ok(dims)
}

/// Parses a nested JSON list such as `[[1, 2], [3, 4]]`.
pub fn parse_literal(text: &str) -> Result<Literal> {
    serde_json::from_str(text).with_context(|| format!("Invalid array literal: {}", text))
}

/// Python-style tuple: `(3, 4)`, `(5,)`, `()`.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [single] => format!("({},)", single),
        _ => {
            let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
            format!("({})", dims.join(", "))
        }
    }
}

/// One-based positions, as the demos print student numbers.
pub fn one_based(positions: &[usize]) -> Vec<usize> {
    positions.iter().map(|p| p + 1).collect()
}
