//! Check digit algorithms.
//!
//! - ISO 7064 MOD 97-10, used by every IBAN
//! - the Luhn-style check of the 14-digit Finnish machine BBAN
//! - the 7-3-1 weighted sum of the Finnish creditor reference

use super::error::{PankkiError, Result};

/// Weights applied right to left to the body of a Finnish reference number.
const REFERENCE_WEIGHTS: [u32; 3] = [7, 3, 1];

/// Length of a Finnish machine-format BBAN.
pub const MACHINE_BBAN_LEN: usize = 14;

/// ISO/IEC 7064 MOD 97-10 checksum.
///
/// Letters `A`–`Z` count as the two-digit values 10–35. The digit stream is
/// folded one digit at a time, so inputs of any length work without
/// big-integer arithmetic. The result is in `0..=96`.
///
/// ```rust
/// use pankki::checksum_iso7064;
///
/// // rearranged "FI2112345600000785"
/// assert_eq!(checksum_iso7064("12345600000785FI21").unwrap(), 1);
/// ```
pub fn checksum_iso7064(input: &str) -> Result<u32> {
    if input.is_empty() {
        return Err(PankkiError::InvalidInput(
            "checksum input cannot be empty".into(),
        ));
    }

    let mut acc: u32 = 0;
    for (position, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => acc = (acc * 10 + (c as u32 - '0' as u32)) % 97,
            'A'..='Z' => {
                let value = c as u32 - 'A' as u32 + 10;
                acc = (acc * 10 + value / 10) % 97;
                acc = (acc * 10 + value % 10) % 97;
            }
            _ => {
                return Err(PankkiError::InvalidCharacter {
                    character: c,
                    position,
                });
            }
        }
    }
    Ok(acc)
}

/// Luhn-style validation of a 14-digit Finnish machine BBAN.
///
/// Digits at even positions (0, 2, …, 12) are doubled, minus 9 when the
/// product exceeds 9. Anything but exactly 14 ASCII digits is invalid.
pub fn luhn_bban_valid(machine_bban: &str) -> bool {
    if machine_bban.len() != MACHINE_BBAN_LEN
        || !machine_bban.bytes().all(|b| b.is_ascii_digit())
    {
        return false;
    }

    let sum: u32 = machine_bban
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Check value of a Finnish reference number body (all digits but the last).
///
/// Returns `10 - (sum % 10)`, which is `10` when the weighted sum ends in 0.
/// Such a body has no single check digit and the reference can never validate.
pub fn reference_checksum(body: &str) -> Result<u32> {
    let digits = body
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10).ok_or(PankkiError::InvalidCharacter {
                character: c,
                position,
            })
        })
        .collect::<Result<Vec<u32>>>()?;

    // Only the last digit of the sum matters
    let sum = digits
        .iter()
        .rev()
        .zip(REFERENCE_WEIGHTS.iter().cycle())
        .fold(0u32, |acc, (d, w)| (acc + d * w) % 10);
    Ok(10 - sum)
}
