//! Evaluation point parsing (`<=30`, `>=95`, `=50`).

use std::sync::LazyLock;

use dose_model::{EvalPoint, Modifier};
use regex::Regex;

use crate::numeric::round1;

static COMPARISON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(<=|>=|=)\s*([0-9]+(?:\.[0-9]+)?)$").expect("comparison pattern")
});

/// Parse a comparison into a modifier and a one-decimal threshold.
pub fn parse_eval_point(text: &str) -> Option<EvalPoint> {
    let captures = COMPARISON.captures(text.trim())?;
    let modifier = match &captures[1] {
        "<=" => Modifier::LessOrEqual,
        ">=" => Modifier::GreaterOrEqual,
        _ => Modifier::Equal,
    };
    let value = round1(&captures[2])?;
    Some(EvalPoint::new(modifier, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_operators() {
        let point = parse_eval_point("<=30").unwrap();
        assert_eq!(point.modifier.code(), 3);
        assert_eq!(point.value, 30.0);

        let point = parse_eval_point(">= 95").unwrap();
        assert_eq!(point.modifier, Modifier::GreaterOrEqual);
        assert_eq!(point.value, 95.0);

        let point = parse_eval_point("=50.24").unwrap();
        assert_eq!(point.modifier, Modifier::Equal);
        assert_eq!(point.value, 50.2);
    }

    #[test]
    fn rejects_other_text() {
        assert!(parse_eval_point("bogus").is_none());
        assert!(parse_eval_point("").is_none());
        assert!(parse_eval_point("<30").is_none());
        assert!(parse_eval_point("==30").is_none());
        assert!(parse_eval_point("<=30 Gy").is_none());
        assert!(parse_eval_point("<=-5").is_none());
    }
}
