//! Simulation parameters and the configuration file reader.
//!
//! The configuration source is a plain text file with one field per line,
//! in a fixed order. Parsing failures are fatal and reported before any
//! grid work begins.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::Lines;

/// Immutable record of physical and numerical simulation parameters.
///
/// Constructed once from the configuration source and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    pub bottom_temp: f64,
    pub top_temp: f64,
    pub left_temp: f64,
    pub right_temp: f64,
    /// Requested interior node count. Kept as a real value; see [`Parameters::dim`].
    pub interior_nodes: f64,
    /// Density.
    pub ro: i64,
    /// Specific heat.
    pub c_ro: f64,
    /// Thermal conductivity.
    pub k: f64,
    pub dx: f64,
    pub dy: f64,
    pub dt: f64,
    /// Total number of timesteps to run.
    pub time_count: i64,
    /// Steps between snapshot emissions.
    pub write_each: i64,
    /// Worker count, must be at least 1.
    pub threads: i64,
}

impl Parameters {
    /// Read parameters from a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Parameters, ConfigError> {
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Open {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Parameters::from_text(&text)
    }

    /// Parse the 14 newline-separated fields in their fixed order.
    pub fn from_text(text: &str) -> Result<Parameters, ConfigError> {
        let mut lines = text.lines();
        Ok(Parameters {
            bottom_temp: real(&mut lines, "bottom temperature")?,
            top_temp: real(&mut lines, "top temperature")?,
            left_temp: real(&mut lines, "left temperature")?,
            right_temp: real(&mut lines, "right temperature")?,
            interior_nodes: real(&mut lines, "interior nodes")?,
            ro: integer(&mut lines, "density")?,
            c_ro: real(&mut lines, "specific heat")?,
            k: real(&mut lines, "conductivity")?,
            dx: real(&mut lines, "dx")?,
            dy: real(&mut lines, "dy")?,
            dt: real(&mut lines, "dt")?,
            time_count: integer(&mut lines, "time count")?,
            write_each: integer(&mut lines, "write cadence")?,
            threads: integer(&mut lines, "thread count")?,
        })
    }

    /// Worker count below 1 is a fatal parameter error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads < 1 {
            return Err(ConfigError::ThreadCount {
                threads: self.threads,
            });
        }
        Ok(())
    }

    /// Grid side length including the boundary rows and columns.
    ///
    /// The square root truncates, so a non-perfect-square node count
    /// yields an actual interior of `(dim - 2)^2` nodes.
    pub fn dim(&self) -> usize {
        self.interior_nodes.sqrt().floor() as usize + 2
    }

    /// Thermal diffusivity `k / (ro * c_ro)`.
    pub fn alpha(&self) -> f64 {
        self.k / (self.ro as f64 * self.c_ro)
    }
}

fn next_field<'a>(lines: &mut Lines<'a>, field: &'static str) -> Result<&'a str, ConfigError> {
    lines
        .next()
        .ok_or(ConfigError::MissingField { field })
        .map(str::trim)
}

fn real(lines: &mut Lines<'_>, field: &'static str) -> Result<f64, ConfigError> {
    let raw = next_field(lines, field)?;
    raw.parse().map_err(|_| ConfigError::ParseField {
        field,
        value: raw.to_owned(),
    })
}

fn integer(lines: &mut Lines<'_>, field: &'static str) -> Result<i64, ConfigError> {
    let raw = next_field(lines, field)?;
    raw.parse().map_err(|_| ConfigError::ParseField {
        field,
        value: raw.to_owned(),
    })
}

/// Fatal configuration errors. None of these are retried; the binary
/// reports them and exits before touching the grid.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration source could not be opened or read.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The source ended before the named field.
    MissingField { field: &'static str },
    /// The named field is not parseable as a number.
    ParseField { field: &'static str, value: String },
    /// The configured worker count is below 1.
    ThreadCount { threads: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "error opening configuration {}: {source}", path.display())
            }
            Self::MissingField { field } => {
                write!(f, "configuration is missing the {field} field")
            }
            Self::ParseField { field, value } => {
                write!(f, "configuration field {field} is not numeric: {value:?}")
            }
            Self::ThreadCount { threads } => {
                write!(f, "incorrect number of threads: {threads}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    const GOOD: &str = "0.0\n100.0\n50.0\n50.0\n9\n1\n1.0\n0.25\n1.0\n1.0\n0.1\n1000\n100\n4\n";

    #[test]
    fn parse_in_order() {
        let p = Parameters::from_text(GOOD).unwrap();
        assert_approx_eq!(f64, p.bottom_temp, 0.0);
        assert_approx_eq!(f64, p.top_temp, 100.0);
        assert_approx_eq!(f64, p.left_temp, 50.0);
        assert_approx_eq!(f64, p.right_temp, 50.0);
        assert_approx_eq!(f64, p.interior_nodes, 9.0);
        assert_eq!(p.ro, 1);
        assert_approx_eq!(f64, p.c_ro, 1.0);
        assert_approx_eq!(f64, p.k, 0.25);
        assert_approx_eq!(f64, p.dt, 0.1);
        assert_eq!(p.time_count, 1000);
        assert_eq!(p.write_each, 100);
        assert_eq!(p.threads, 4);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn derived_values() {
        let p = Parameters::from_text(GOOD).unwrap();
        assert_eq!(p.dim(), 5);
        assert_approx_eq!(f64, p.alpha(), 0.25);
    }

    #[test]
    fn dim_truncates_non_square_counts() {
        let mut p = Parameters::from_text(GOOD).unwrap();
        p.interior_nodes = 10.0;
        assert_eq!(p.dim(), 5);
        p.interior_nodes = 15.0;
        assert_eq!(p.dim(), 5);
        p.interior_nodes = 16.0;
        assert_eq!(p.dim(), 6);
    }

    #[test]
    fn short_file_is_missing_field() {
        let err = Parameters::from_text("1.0\n2.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: "left temperature"
            }
        ));
    }

    #[test]
    fn non_numeric_field_fails() {
        let bad = GOOD.replace("0.25", "fast");
        let err = Parameters::from_text(&bad).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ParseField {
                field: "conductivity",
                ..
            }
        ));
    }

    #[test]
    fn integer_fields_reject_reals() {
        let bad = GOOD.replace("\n4\n", "\n4.5\n");
        let err = Parameters::from_text(&bad).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ParseField {
                field: "thread count",
                ..
            }
        ));
    }

    #[test]
    fn thread_count_below_one_is_rejected() {
        let mut p = Parameters::from_text(GOOD).unwrap();
        p.threads = 0;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::ThreadCount { threads: 0 })
        ));
        p.threads = -2;
        assert!(p.validate().is_err());
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = Parameters::from_file("no_such_configuration.txt").unwrap_err();
        assert!(matches!(err, ConfigError::Open { .. }));
    }
}
