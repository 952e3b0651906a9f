use anyhow::{Context, Result};
use ndemo_array::{Array, ArrayError, DynArray, Element};
use std::io::Write;

use crate::config::DemoConfig;
use crate::util::format_shape;

/// Builds an array from a literal, reports its attributes, then tries the
/// configured reshape. A reshape to the wrong size is reported and skipped.
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    let arr = DynArray::from_literal(&config.basics_data).context("Invalid basics data")?;
    let p = config.precision;

    writeln!(out, "Array:\n{:.*}", p, arr)?;
    writeln!(out, "Shape: {}", format_shape(arr.shape()))?;
    writeln!(out, "Size: {}", arr.size())?;
    writeln!(out, "Number of Dimensions: {}", arr.ndim())?;
    writeln!(out, "Datatype: {}", arr.dtype())?;

    match &arr {
        DynArray::Bool(a) => reshape_and_flatten(out, a, config),
        DynArray::Int(a) => reshape_and_flatten(out, a, config),
        DynArray::Float(a) => reshape_and_flatten(out, a, config),
    }
}

fn reshape_and_flatten<T: Element, W: Write>(
    out: &mut W,
    arr: &Array<T>,
    config: &DemoConfig,
) -> Result<()> {
    let p = config.precision;
    let target = &config.reshape;

    match arr.reshape(target) {
        Ok(reshaped) => {
            writeln!(out, "\nReshaped {}:\n{:.*}", format_shape(target), p, reshaped)?;
        }
        Err(ArrayError::Shape(e)) => {
            log::debug!("reshape to {:?} failed: {}", target, e);
            writeln!(out, "Dimensions are not correct")?;
        }
        Err(e) => return Err(e.into()),
    }

    writeln!(out, "Flattened: {:.*}", p, arr.flatten())?;
    Ok(())
}
