use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("invalid seed `{0}`: expected an unsigned integer")]
    Invalid(String),
    #[error("no seeds given")]
    Empty,
}

/// Parse CLI seed tokens. Duplicates are dropped, first occurrence wins.
///
/// # Errors
///
/// Rejects tokens that are not `u64` and an empty list.
pub fn parse_seeds(tokens: &[String]) -> Result<Vec<u64>, SeedError> {
    let mut seeds = Vec::with_capacity(tokens.len());
    for token in tokens {
        let seed = token
            .parse::<u64>()
            .map_err(|_| SeedError::Invalid(token.clone()))?;
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }
    if seeds.is_empty() {
        return Err(SeedError::Empty);
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_and_dedupes() {
        let seeds = parse_seeds(&tokens(&["7", "1337", "7"])).unwrap();
        assert_eq!(seeds, vec![7, 1337]);
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert_eq!(
            parse_seeds(&tokens(&["12", "abc"])),
            Err(SeedError::Invalid("abc".into()))
        );
        assert_eq!(parse_seeds(&[]), Err(SeedError::Empty));
    }
}
