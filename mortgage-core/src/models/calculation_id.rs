use std::fmt;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 5;

/// Opaque token identifying a single calculation run.
///
/// The token is the current time in milliseconds rendered in base 36,
/// followed by a five-character random base-36 suffix, so ids sort roughly
/// by creation time while staying unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationId(String);

impl CalculationId {
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let mut token = to_base36(millis);

        let mut rng = rand::thread_rng();
        for _ in 0..SUFFIX_LEN {
            token.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
        }

        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CalculationId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn to_base36_renders_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(46655), "zzz");
    }

    #[test]
    fn generate_produces_distinct_ids() {
        let a = CalculationId::generate();
        let b = CalculationId::generate();

        assert_ne!(a, b);
    }

    #[test]
    fn generated_ids_are_lowercase_base36() {
        let id = CalculationId::generate();

        assert!(id.as_str().len() > SUFFIX_LEN);
        assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }
}
