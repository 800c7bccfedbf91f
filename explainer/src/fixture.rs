//! The canned explanation served whenever the pipeline cannot produce a real one.
//!
//! Fixed and independent of the request: it never reflects the submitted
//! code or the requested target language.

use crate::api_types::{BigO, ExplainResponse, LineExplanation};

/// Returns the mock explanation (a `sumUnique` JavaScript sample).
pub fn mock_explain() -> ExplainResponse {
    ExplainResponse {
        language: "JavaScript".into(),
        summary: "Computes the sum of unique values in an input array by converting to a Set and accumulating.".into(),
        big_o: BigO {
            time: "O(n)".into(),
            space: "O(n)".into(),
            rationale: Some(
                "Building a Set requires O(n) additional space; single pass accumulation.".into(),
            ),
        },
        by_line: vec![
            line(
                "function sumUnique(arr){",
                "Defines a function taking an array of numbers.",
            ),
            line(
                " const set=new Set(arr);",
                "Creates a Set to remove duplicates, preserving only unique values.",
            ),
            line(" let sum=0;", "Initializes an accumulator variable."),
            line(
                " for(const v of set) sum+=v;",
                "Iterates through unique values and adds each to the sum.",
            ),
            line(" return sum; }", "Returns the final accumulated sum."),
        ],
        potential_issues: vec![
            "Assumes numeric inputs; non-numeric values would produce NaN.".into(),
            "No validation for large arrays or extremely large integers (overflow in JS is possible).".into(),
        ],
        refactors: vec![
            "Validate inputs (ensure numbers) before summation.".into(),
            "Consider reduce over Set for clearer functional style.".into(),
        ],
        tests: vec![
            "Empty array → 0".into(),
            "[1,1,2,3] → 6".into(),
            "Negative numbers: [-1,-1,2] → 1".into(),
            "Non-numbers should be rejected or coerced".into(),
        ],
    }
}

// The sample is a one-liner, so every fragment sits on line 1.
fn line(code: &str, explanation: &str) -> LineExplanation {
    LineExplanation {
        line: 1,
        code: code.into(),
        explanation: explanation.into(),
    }
}
