use anyhow::{Context, Result};
use ndemo_array::array;
use std::io::Write;

use crate::config::DemoConfig;

pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    let p = config.precision;
    let a = array![1i64, 2, 3, 4];
    let b = array![10i64, 20, 30, 40];

    writeln!(out, "a: {}", a)?;
    writeln!(out, "b: {}", b)?;
    writeln!(out, "\na + b: {}", a.try_add(&b)?)?;
    writeln!(out, "a - b: {}", a.try_sub(&b)?)?;
    writeln!(out, "a * b: {}", a.try_mul(&b)?)?;
    writeln!(out, "a / b: {:.*}", p, a.try_div(&b)?)?;
    writeln!(out, "a ** 2: {}", a.pow(2))?;

    let arr = array![[1i64, 2, 3], [4, 5, 6]];
    let row = array![[10i64, 20, 30]];
    writeln!(out, "\nArray:\n{}", arr)?;
    writeln!(out, "Array + 10:\n{}", &arr + 10)?;
    writeln!(out, "Array * 2:\n{}", &arr * 2)?;
    writeln!(out, "Array + [[10, 20, 30]]:\n{}", arr.try_add(&row)?)?;

    let data = array![[1i64, 2, 3], [4, 5, 6], [7, 8, 9]];
    writeln!(out, "\nData:\n{}", data)?;
    writeln!(out, "Sum of all elements: {}", data.sum())?;
    writeln!(out, "Mean: {:.*}", p, data.mean().context("mean of empty data")?)?;
    writeln!(
        out,
        "Standard deviation: {:.*}",
        p,
        data.std().context("standard deviation of empty data")?
    )?;
    writeln!(out, "Min: {}", data.min()?)?;
    writeln!(out, "Max: {}", data.max()?)?;

    writeln!(out, "\nSum along axis 0 (columns): {}", data.sum_axis(0)?)?;
    writeln!(out, "Sum along axis 1 (rows): {}", data.sum_axis(1)?)?;
    writeln!(out, "Mean along axis 0: {:.*}", p, data.mean_axis(0)?)?;
    Ok(())
}
