//! Value-list parsing for the CLI boundary.

use anyhow::{anyhow, Result};

/// Parse a comma-separated list of non-negative integers.
///
/// A blank or whitespace-only list parses to an empty sequence; blank
/// entries inside a list are rejected rather than skipped so that typos
/// like `1,,2` surface instead of silently shrinking the input.
pub fn parse_values(list: &str) -> Result<Vec<u64>> {
    let trimmed = list.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u64>()
                .map_err(|err| anyhow!("invalid value '{token}': {err}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values_accepts_simple_list() {
        assert_eq!(parse_values("1,3,2").unwrap(), vec![1, 3, 2]);
    }

    #[test]
    fn test_parse_values_trims_whitespace() {
        assert_eq!(parse_values(" 5 , 0 ,12 ").unwrap(), vec![5, 0, 12]);
    }

    #[test]
    fn test_parse_values_empty_string_is_empty_sequence() {
        assert!(parse_values("").unwrap().is_empty());
        assert!(parse_values("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_values_rejects_negative_and_garbage() {
        assert!(parse_values("-1").is_err());
        assert!(parse_values("1,two,3").is_err());
        assert!(parse_values("1,,2").is_err());
    }
}
