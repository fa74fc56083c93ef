//! Free-form run requests as entered in the input form.
//!
//! A [`RunForm`] holds the six fields as raw text. [`RunForm::parse`] turns it
//! into a typed [`RunRequest`] or fails with a single `PSOError::InvalidInput`
//! before any optimizer exists. [`RunRequest::run`] then optimizes over the
//! fixed search box and returns the [`RunResult`] the shell renders.

use crate::bounds::Bounds;
use crate::particle::Coefficients;
use crate::{PSOConfig, PSOError, PSOReport, ParticleSwarm, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Raw text of the six run parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunForm {
    /// Number of particles (positive integer)
    #[serde(deserialize_with = "text_or_number")]
    pub particle_count: String,
    /// Number of iterations (non-negative integer)
    #[serde(deserialize_with = "text_or_number")]
    pub iterations: String,
    /// Inertia weight
    #[serde(deserialize_with = "text_or_number")]
    pub inertia: String,
    /// Personal-best weight
    #[serde(deserialize_with = "text_or_number")]
    pub cognitive: String,
    /// Global-best weight
    #[serde(deserialize_with = "text_or_number")]
    pub social: String,
    /// Constriction coefficient
    #[serde(deserialize_with = "text_or_number")]
    pub constriction: String,
}

impl Default for RunForm {
    fn default() -> Self {
        Self {
            particle_count: "300".into(),
            iterations: "100".into(),
            inertia: "0.3".into(),
            cognitive: "2".into(),
            social: "5".into(),
            constriction: "0.5".into(),
        }
    }
}

// JSON files may carry either "300" or 300.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected text or number, got {}",
            other
        ))),
    }
}

impl RunForm {
    /// Load a form from a JSON file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let form: RunForm = serde_json::from_str(&contents)?;
        Ok(form)
    }

    /// Save the form to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Parse every field, failing on the first one that is not a valid number.
    pub fn parse(&self) -> Result<RunRequest> {
        Ok(RunRequest {
            particle_count: parse_count("particle_count", &self.particle_count, 1)?,
            iterations: parse_count("iterations", &self.iterations, 0)?,
            coefficients: Coefficients {
                inertia: parse_coefficient("inertia", &self.inertia)?,
                cognitive: parse_coefficient("cognitive", &self.cognitive)?,
                social: parse_coefficient("social", &self.social)?,
                constriction: parse_coefficient("constriction", &self.constriction)?,
            },
        })
    }
}

fn invalid(field: &'static str, text: &str) -> PSOError {
    PSOError::InvalidInput {
        field,
        value: text.to_string(),
    }
}

fn parse_count(field: &'static str, text: &str, min: usize) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(v) if v >= min => Ok(v),
        _ => Err(invalid(field, text)),
    }
}

fn parse_coefficient(field: &'static str, text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(field, text)),
    }
}

/// A validated run request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRequest {
    /// Number of particles, at least 1.
    pub particle_count: usize,
    /// Number of iterations.
    pub iterations: usize,
    /// Velocity update weights.
    pub coefficients: Coefficients,
}

impl RunRequest {
    /// Optimizer configuration for this request.
    pub fn to_config(&self, seed: Option<u64>) -> PSOConfig {
        PSOConfig {
            particles: self.particle_count,
            iterations: self.iterations,
            coefficients: self.coefficients,
            seed,
            disp: false,
        }
    }

    /// Optimize over the default search box.
    pub fn run(&self, seed: Option<u64>) -> Result<RunResult> {
        let swarm = ParticleSwarm::new(Bounds::default_search_box(), &self.to_config(seed))?;
        Ok(swarm.optimize().into())
    }
}

/// What the shell renders: the optimum and the final swarm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Best position found.
    pub best_position: [f64; 3],
    /// Objective value at `best_position`.
    pub best_score: f64,
    /// Position of every particle after the last iteration.
    pub final_positions: Vec<[f64; 3]>,
}

impl From<PSOReport> for RunResult {
    fn from(report: PSOReport) -> Self {
        Self {
            best_position: [report.x[0], report.x[1], report.x[2]],
            best_score: report.fun,
            final_positions: report
                .final_positions
                .rows()
                .into_iter()
                .map(|r| [r[0], r[1], r[2]])
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::objective;
    use ndarray::Array1;

    fn form(particles: &str) -> RunForm {
        RunForm {
            particle_count: particles.into(),
            ..RunForm::default()
        }
    }

    #[test]
    fn test_default_form_parses() {
        let req = RunForm::default().parse().unwrap();
        assert_eq!(req.particle_count, 300);
        assert_eq!(req.iterations, 100);
        assert_eq!(req.coefficients, Coefficients::default());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let req = RunForm {
            iterations: " 7 ".into(),
            social: "\t1.5\n".into(),
            ..form("  12")
        }
        .parse()
        .unwrap();
        assert_eq!(req.particle_count, 12);
        assert_eq!(req.iterations, 7);
        assert_eq!(req.coefficients.social, 1.5);
    }

    #[test]
    fn test_malformed_count_is_invalid_input() {
        for bad in ["abc", "", "1.5", "-3", "0"] {
            let err = form(bad).parse().unwrap_err();
            assert!(err.is_input_error(), "{:?} should be rejected", bad);
            assert!(matches!(
                err,
                PSOError::InvalidInput {
                    field: "particle_count",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_zero_iterations_is_accepted() {
        let req = RunForm {
            iterations: "0".into(),
            ..RunForm::default()
        }
        .parse()
        .unwrap();
        assert_eq!(req.iterations, 0);
    }

    #[test]
    fn test_malformed_coefficient_is_invalid_input() {
        for (bad, field) in [("x", "inertia"), ("nan", "inertia"), ("inf", "inertia")] {
            let err = RunForm {
                inertia: bad.into(),
                ..RunForm::default()
            }
            .parse()
            .unwrap_err();
            assert!(matches!(err, PSOError::InvalidInput { field: f, .. } if f == field));
        }

        let err = RunForm {
            constriction: "0,5".into(),
            ..RunForm::default()
        }
        .parse()
        .unwrap_err();
        assert!(matches!(
            err,
            PSOError::InvalidInput {
                field: "constriction",
                ..
            }
        ));
    }

    #[test]
    fn test_first_bad_field_is_reported() {
        let err = RunForm {
            particle_count: "abc".into(),
            social: "def".into(),
            ..RunForm::default()
        }
        .parse()
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid input for particle_count: \"abc\"");
    }

    #[test]
    fn test_form_json_accepts_text_and_numbers() {
        let form: RunForm =
            serde_json::from_str(r#"{"particle_count": 40, "inertia": "0.7"}"#).unwrap();
        assert_eq!(form.particle_count, "40");
        assert_eq!(form.inertia, "0.7");
        // missing fields fall back to defaults
        assert_eq!(form.iterations, "100");

        let err = serde_json::from_str::<RunForm>(r#"{"social": [1, 2]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_form_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("pso_form_{}.json", std::process::id()));
        let original = RunForm {
            cognitive: "1.25".into(),
            ..form("17")
        };
        original.to_file(&path).unwrap();
        let loaded = RunForm::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_form_file_is_io_error() {
        let err = RunForm::from_file("/nonexistent/pso/form.json").unwrap_err();
        assert!(matches!(err, PSOError::Io(_)));
    }

    #[test]
    fn test_run_returns_consistent_result() {
        let req = RunForm {
            iterations: "20".into(),
            ..form("25")
        }
        .parse()
        .unwrap();
        let result = req.run(Some(11)).unwrap();

        assert_eq!(result.final_positions.len(), 25);
        let bounds = Bounds::default_search_box();
        for p in &result.final_positions {
            assert!(bounds.contains(&Array1::from_vec(p.to_vec())));
        }
        assert_eq!(
            objective(&Array1::from_vec(result.best_position.to_vec())),
            result.best_score
        );
        assert_eq!(req.run(Some(11)).unwrap(), result);
    }
}
