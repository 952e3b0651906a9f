use anyhow::Result;
use ndemo_array::{array, s};
use std::io::Write;

use crate::config::DemoConfig;

pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    let arr = array![[1i64, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]];
    let threshold = config.indexing_threshold;
    writeln!(out, "Original array:\n{}", arr)?;

    writeln!(out, "\nElement at [1, 2]: {}", arr.get(&[1, 2])?)?;
    writeln!(out, "First row: {}", arr.row(0)?)?;
    writeln!(out, "Last column: {}", arr.column(-1)?)?;

    writeln!(out, "\nFirst 2 rows, first 3 columns:\n{}", arr.slice(&s![..2, ..3])?)?;
    writeln!(out, "Every other row:\n{}", arr.slice(&s![..;2])?)?;

    let mask = arr.gt(threshold);
    writeln!(out, "\nBoolean mask (elements > {}):\n{}", threshold, mask)?;
    writeln!(out, "Elements > {}: {}", threshold, arr.masked(&mask)?)?;

    let rows = vec![0, 2];
    let cols = vec![1, 3];
    let picked = arr.fancy_index(&[rows, cols])?;
    writeln!(out, "\nFancy indexing - rows [0,2], cols [1,3]: {}", picked)?;
    Ok(())
}
