//! Squares `0..size` with a push loop into a `Vec` and with array
//! multiplication, then compares wall-clock time and buffer sizes.
//!
//! Timings depend on the machine.

use anyhow::Result;
use ndemo_array::{Array, Element};
use rayon::prelude::*;
use std::io::Write;
use std::mem::size_of;
use std::time::{Duration, Instant};

use crate::config::DemoConfig;

/// Largest size whose squares all fit in an `i64`.
pub const MAX_SIZE: usize = 3_037_000_499;

#[derive(Debug, Clone)]
pub struct Measurement {
    pub elapsed: Duration,
    pub bytes: usize,
}

/// Approximate heap plus handle size of a `Vec`, counting spare capacity.
pub fn vec_bytes<T>(values: &Vec<T>) -> usize {
    size_of::<Vec<T>>() + values.capacity() * size_of::<T>()
}

pub fn array_bytes<T: Element>(array: &Array<T>) -> usize {
    size_of::<Array<T>>() + array.storage_len() * T::DTYPE.item_size()
}

/// Percentage of `list` bytes saved by `array`.
pub fn memory_difference(list: &Measurement, array: &Measurement) -> f64 {
    (list.bytes as f64 - array.bytes as f64) / list.bytes as f64 * 100.0
}

pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    let size = config.speedup_size;
    if size > MAX_SIZE {
        anyhow::bail!("Size {} would overflow i64 squares (max {})", size, MAX_SIZE);
    }
    log::info!("[ndemo] Squaring {} integers", size);

    let list_data: Vec<i64> = (0..size as i64).collect();
    let mut list_squared = Vec::new();
    let start = Instant::now();
    for v in &list_data {
        list_squared.push(v * v);
    }
    let list = Measurement {
        elapsed: start.elapsed(),
        bytes: vec_bytes(&list_squared),
    };

    let data: Array<i64> = Array::arange(size);
    let start = Instant::now();
    let squared = data.try_mul(&data)?;
    let array = Measurement {
        elapsed: start.elapsed(),
        bytes: array_bytes(&squared),
    };

    if let Some(&last) = list_squared.last() {
        let from_array = squared.get(&[size - 1])?;
        if from_array != last {
            anyhow::bail!("Array and list squares disagree: {} vs {}", from_array, last);
        }
    }

    writeln!(
        out,
        "Time for LIST: {:?}\nSize of LIST: {} bytes",
        list.elapsed, list.bytes
    )?;
    writeln!(
        out,
        "Time for ARRAY: {:?}\nSize of ARRAY: {} bytes",
        array.elapsed, array.bytes
    )?;

    if config.parallel {
        let start = Instant::now();
        let par_squared: Vec<i64> = list_data.par_iter().map(|v| v * v).collect();
        let parallel = Measurement {
            elapsed: start.elapsed(),
            bytes: vec_bytes(&par_squared),
        };
        writeln!(
            out,
            "Time for PARALLEL ({} threads): {:?}\nSize of PARALLEL: {} bytes",
            rayon::current_num_threads(),
            parallel.elapsed,
            parallel.bytes
        )?;
    }

    writeln!(
        out,
        "Difference in Memory = {:.2}%",
        memory_difference(&list, &array)
    )?;
    Ok(())
}
