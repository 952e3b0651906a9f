use anyhow::Result;
use ndemo_array::{array, s, Array};
use std::io::Write;

use crate::config::DemoConfig;

pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    let a = array![[1i64, 2], [3, 4]];
    let b = array![[5i64, 6], [7, 8]];

    writeln!(out, "Array a:\n{}", a)?;
    writeln!(out, "Array b:\n{}", b)?;
    writeln!(out, "\nHorizontal concatenation:\n{}", Array::hstack(&[&a, &b])?)?;
    writeln!(out, "Vertical concatenation:\n{}", Array::vstack(&[&a, &b])?)?;

    let arr: Array<i64> = Array::arange(12).reshape(&[3, 4])?;
    writeln!(out, "\nOriginal array:\n{}", arr)?;
    writeln!(out, "Horizontal split:")?;
    for (i, part) in arr.hsplit(config.split_sections)?.iter().enumerate() {
        writeln!(out, "Part {}:\n{}", i + 1, part)?;
    }

    let mut original = array![1i64, 2, 3, 4, 5];
    let view = original.slice(&s![..])?;
    let copy = original.copy();

    original.set(&[0], 999)?;
    writeln!(out, "\nOriginal modified: {}", original)?;
    writeln!(out, "View (affected): {}", view)?;
    writeln!(out, "Copy (not affected): {}", copy)?;
    log::debug!(
        "view shares storage: {}, copy shares storage: {}",
        view.shares_storage(&original),
        copy.shares_storage(&original)
    );
    Ok(())
}
