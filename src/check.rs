//! Built-in Check Cases
//!
//! Named example inputs for both transforms with their expected results. Values
//! are compared by their JSON rendering, and error cases pass when the call
//! fails with [`ProductError::InvalidArgument`].

use crate::merge_sorted::merge_sorted;
use crate::product_except_self::{product_except_self, ProductError};

/// Result of running a single check case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    /// Rendered expected and actual values
    Fail { expected: String, actual: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

/// A named check case and what happened when it ran
#[derive(Debug, Clone)]
pub struct CheckCase {
    /// Which transform the case exercises ("product" or "merge")
    pub group: &'static str,
    /// Human readable description, e.g. "array has one zero"
    pub name: &'static str,
    pub outcome: Outcome,
}

/// Expected output of a product case
enum Expect {
    Products(&'static [i64]),
    InvalidArgument,
}

const PRODUCT_CASES: &[(&str, &[i64], Expect)] = &[
    ("short array", &[1, 2, 3], Expect::Products(&[6, 3, 2])),
    (
        "longer array",
        &[8, 2, 4, 3, 1, 5],
        Expect::Products(&[120, 480, 240, 320, 960, 192]),
    ),
    ("array has one zero", &[6, 2, 0, 3], Expect::Products(&[0, 0, 36, 0])),
    (
        "array has two zeros",
        &[4, 0, 9, 1, 0],
        Expect::Products(&[0, 0, 0, 0, 0]),
    ),
    ("one negative number", &[-3, 8, 4], Expect::Products(&[32, -12, -24])),
    (
        "all negative numbers",
        &[-7, -1, -4, -2],
        Expect::Products(&[-8, -56, -14, -28]),
    ),
    ("error with empty array", &[], Expect::InvalidArgument),
    ("error with one number", &[1], Expect::InvalidArgument),
];

const MERGE_CASES: &[(&str, &[i64], &[i64], &[i64])] = &[
    ("both arrays are empty", &[], &[], &[]),
    ("first array is empty", &[], &[1, 2, 3], &[1, 2, 3]),
    ("second array is empty", &[5, 6, 7], &[], &[5, 6, 7]),
    (
        "both arrays have some numbers",
        &[2, 4, 6],
        &[1, 3, 7],
        &[1, 2, 3, 4, 6, 7],
    ),
    (
        "arrays are different lengths",
        &[2, 4, 6, 8],
        &[1, 7],
        &[1, 2, 4, 6, 7, 8],
    ),
];

/// Run every product-except-self case.
pub fn run_product_cases() -> Vec<CheckCase> {
    PRODUCT_CASES
        .iter()
        .map(|&(name, input, ref expect)| {
            let actual = product_except_self(input);
            let outcome = match (expect, actual) {
                (Expect::Products(expected), Ok(actual)) => compare(expected, &actual),
                (Expect::InvalidArgument, Err(ProductError::InvalidArgument { .. })) => {
                    Outcome::Pass
                }
                (Expect::Products(expected), Err(e)) => Outcome::Fail {
                    expected: render(expected),
                    actual: format!("error: {}", e),
                },
                (Expect::InvalidArgument, Ok(actual)) => Outcome::Fail {
                    expected: "InvalidArgument".to_string(),
                    actual: render(&actual),
                },
                (Expect::InvalidArgument, Err(e)) => Outcome::Fail {
                    expected: "InvalidArgument".to_string(),
                    actual: format!("error: {}", e),
                },
            };
            log::debug!("product case '{}': {:?}", name, outcome);
            CheckCase {
                group: "product",
                name,
                outcome,
            }
        })
        .collect()
}

/// Run every sorted-merge case.
pub fn run_merge_cases() -> Vec<CheckCase> {
    MERGE_CASES
        .iter()
        .map(|&(name, left, right, expected)| {
            let outcome = compare(expected, &merge_sorted(left, right));
            log::debug!("merge case '{}': {:?}", name, outcome);
            CheckCase {
                group: "merge",
                name,
                outcome,
            }
        })
        .collect()
}

/// Run all built-in cases, product cases first.
pub fn run_all() -> Vec<CheckCase> {
    let mut cases = run_product_cases();
    cases.extend(run_merge_cases());
    cases
}

/// Render values as a compact JSON array.
pub fn render(values: &[i64]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| format!("{:?}", values))
}

fn compare(expected: &[i64], actual: &[i64]) -> Outcome {
    let expected = render(expected);
    let actual = render(actual);
    if expected == actual {
        Outcome::Pass
    } else {
        Outcome::Fail { expected, actual }
    }
}
