use anyhow::{Context, Result};
use ndemo_array::{Array, DynArray, Numeric};
use std::io::Write;

use crate::config::DemoConfig;
use crate::util::one_based;

/// Per-student and per-subject averages, the top student, students above the
/// threshold in every subject and a 0-100 min-max normalisation.
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    let scores = DynArray::from_literal(&config.scores).context("Invalid scores data")?;
    if scores.ndim() != 2 {
        anyhow::bail!(
            "Scores must be a 2-D table (students x subjects), got {} dimension(s)",
            scores.ndim()
        );
    }
    match &scores {
        DynArray::Int(a) => report(out, a, config),
        DynArray::Float(a) => report(out, a, config),
        DynArray::Bool(_) => anyhow::bail!("Scores must be numeric, got bool"),
    }
}

fn report<T: Numeric, W: Write>(out: &mut W, scores: &Array<T>, config: &DemoConfig) -> Result<()> {
    let p = config.precision;
    let threshold = config.score_threshold;
    writeln!(out, "Student Scores:\n{:.*}", p, scores)?;

    let student_avg = scores.mean_axis(1)?;
    writeln!(out, "\nAverage score per student: {:.*}", p, student_avg)?;
    let subject_avg = scores.mean_axis(0)?;
    writeln!(out, "Average score per subject: {:.*}", p, subject_avg)?;

    let top = student_avg.argmax().context("No students to rank")?;
    writeln!(
        out,
        "\nTop student: Student {} with average {:.2}",
        top + 1,
        student_avg.get(&[top])?
    )?;

    let values = scores.cast::<f64>();
    let all_above = values.gt(threshold).all_axis(1)?;
    let students = all_above.nonzero().into_iter().next().unwrap_or_default();
    writeln!(
        out,
        "Students with all scores > {}: {:?}",
        threshold,
        one_based(&students)
    )?;

    let lo = values.min().context("No scores to normalise")?;
    let hi = values.max().context("No scores to normalise")?;
    let normalized = &(&(&values - lo) / (hi - lo)) * 100.0;
    writeln!(out, "\nNormalized scores:\n{}", normalized.cast::<i64>())?;
    Ok(())
}
