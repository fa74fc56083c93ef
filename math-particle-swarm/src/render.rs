use crate::request::RunResult;
use std::fmt::Write as FmtWrite;

/// Message shown for any unparsable run request field.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers.";

/// Renders the optimum as two lines of text:
///
/// ```text
/// Best solution: [4.000000, -3.000000, -0.500000]
/// Objective value: 0.000000e0
/// ```
pub fn render_result(result: &RunResult) -> String {
    let mut out = String::new();
    let coords: Vec<String> = result
        .best_position
        .iter()
        .map(|x| format!("{:.6}", x))
        .collect();
    let _ = writeln!(out, "Best solution: [{}]", coords.join(", "));
    let _ = write!(out, "Objective value: {:.6e}", result.best_score);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_result() {
        let result = RunResult {
            best_position: [4.0, -3.0, -0.5],
            best_score: 0.0,
            final_positions: vec![],
        };
        assert_eq!(
            render_result(&result),
            "Best solution: [4.000000, -3.000000, -0.500000]\nObjective value: 0.000000e0"
        );
    }

    #[test]
    fn test_render_small_score() {
        let result = RunResult {
            best_position: [3.99999, -3.00001, -0.5],
            best_score: 3.2e-10,
            final_positions: vec![[1.0, 2.0, 3.0]],
        };
        let text = render_result(&result);
        assert!(text.starts_with("Best solution: [3.999990, -3.000010, -0.500000]"));
        assert!(text.ends_with("Objective value: 3.200000e-10"));
    }
}
