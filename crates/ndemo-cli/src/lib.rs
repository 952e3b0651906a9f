//! ndemo-cli: the demonstration scripts behind the `ndemo` binary.
//!
//! Each demo builds literal data, runs it through `ndemo-array` and prints a
//! labelled report. Inputs come from `DemoConfig`, which is read from an
//! optional JSON file and overridden from the command line.
pub mod config;
pub mod demos;
pub mod util;
