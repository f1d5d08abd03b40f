//! Quantity resolution for digit strings and English number words.

use slice_types::QuantityError;

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

// Index is the tens digit; 0 and 1 are covered by UNITS.
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(&str, u64); 5] = [
    ("hundred", 100),
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
];

const CONNECTIVE: &str = "and";

/// `(scale, increment)` for a single lowercase number word.
fn number_word(word: &str) -> Option<(u64, u64)> {
    if word == CONNECTIVE {
        return Some((1, 0));
    }
    if let Some(idx) = UNITS.iter().position(|unit| *unit == word) {
        return Some((1, idx as u64));
    }
    if let Some(idx) = TENS.iter().position(|tens| !tens.is_empty() && *tens == word) {
        return Some((1, idx as u64 * 10));
    }
    SCALES
        .iter()
        .find(|(scale, _)| *scale == word)
        .map(|(_, value)| (*value, 0))
}

/// True for a digit string or a single word from the number grammar.
///
/// The normalizer uses this to keep quantities out of the stemmer.
#[must_use]
pub fn is_number_word(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    is_digits(&lower) || number_word(&lower).is_some()
}

/// True when the token is only the grammar's connective ("and").
///
/// The connective resolves to zero on its own, which would erase a quantity
/// seen earlier in the utterance, so callers skip it when classifying tokens.
#[must_use]
pub fn is_connective(token: &str) -> bool {
    token.eq_ignore_ascii_case(CONNECTIVE)
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve a token or phrase to a count.
///
/// Digit strings are parsed directly. Anything else is read word by word as an
/// English number: units and tens accumulate into `current`, `hundred`
/// multiplies it in place, and larger scales fold it into the running result.
///
/// ```
/// use slice_core::resolve_quantity;
///
/// assert_eq!(resolve_quantity("2"), Ok(2));
/// assert_eq!(resolve_quantity("two"), Ok(2));
/// assert_eq!(resolve_quantity("one hundred and five"), Ok(105));
/// ```
pub fn resolve_quantity(token: &str) -> Result<u64, QuantityError> {
    let trimmed = token.trim();
    if is_digits(trimmed) {
        return trimmed.parse::<u64>().map_err(|_| QuantityError::Overflow {
            phrase: trimmed.to_string(),
        });
    }

    let lower = trimmed.to_ascii_lowercase();
    let mut words = lower.split_whitespace().peekable();
    if words.peek().is_none() {
        return Err(QuantityError::NotANumber {
            word: trimmed.to_string(),
        });
    }

    let overflow = || QuantityError::Overflow {
        phrase: trimmed.to_string(),
    };

    let mut current: u64 = 0;
    let mut result: u64 = 0;
    for word in words {
        let (scale, increment) = number_word(word).ok_or_else(|| QuantityError::NotANumber {
            word: word.to_string(),
        })?;
        current = current
            .checked_mul(scale)
            .and_then(|v| v.checked_add(increment))
            .ok_or_else(overflow)?;
        if scale > 100 {
            result = result.checked_add(current).ok_or_else(overflow)?;
            current = 0;
        }
    }

    result.checked_add(current).ok_or_else(overflow)
}
