use std::fmt;

use crate::array::Array;
use crate::dtype::Element;

/// Nested brackets, one row per line, elements right-aligned to a common width.
/// A precision (`{:.2}`) applies to floating elements only.
impl<T: Element> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .iter()
            .map(|v| match f.precision() {
                Some(p) if T::DTYPE.is_float() => format!("{:.*}", p, v),
                _ => format!("{}", v),
            })
            .collect();

        if self.ndim() == 0 {
            return f.write_str(&cells[0]);
        }

        let width = cells.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut out = String::new();
        write_block(&mut out, self.shape(), &cells, width, 0);
        f.write_str(&out)
    }
}

fn write_block(out: &mut String, shape: &[usize], cells: &[String], width: usize, depth: usize) {
    out.push('[');
    if shape.len() == 1 {
        for (idx, cell) in cells.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{:>width$}", cell, width = width));
        }
    } else {
        let chunk = shape[1..].iter().product::<usize>();
        for idx in 0..shape[0] {
            if idx > 0 {
                out.push(',');
                // one blank line between blocks of 3-D and deeper arrays
                for _ in 1..shape.len() - 1 {
                    out.push('\n');
                }
                out.push('\n');
                out.push_str(&" ".repeat(depth + 1));
            }
            let part = &cells[idx * chunk..(idx + 1) * chunk];
            write_block(out, &shape[1..], part, width, depth + 1);
        }
    }
    out.push(']');
}

#[cfg(test)]
mod tests {
    use crate::array::Array;

    #[test]
    fn test_display_1d() {
        let a = Array::from_vec(vec![1i64, 2, 3]);
        assert_eq!(a.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_display_2d_aligns_columns() {
        let a = Array::from_rows([[1i64, 20], [300, 4]]);
        assert_eq!(a.to_string(), "[[  1,  20],\n [300,   4]]");
    }

    #[test]
    fn test_display_precision() {
        let a = Array::from_vec(vec![1.0f64, 2.5]);
        assert_eq!(format!("{:.2}", a), "[1.00, 2.50]");
    }

    #[test]
    fn test_display_scalar_and_empty() {
        assert_eq!(Array::scalar(7i32).to_string(), "7");
        assert_eq!(Array::<f64>::from_vec(vec![]).to_string(), "[]");
    }
}
