use anchor_lang::prelude::*;
use crate::constants::{MAX_CRON_SPEC_LEN, PERCENT_DENOMINATOR};
use crate::errors::ErrorCode;

const CRON_FIELDS: usize = 5;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BulkPrice {
    pub total_amount: u64,
    pub discount: u8,
    pub final_amount: u64,
}

pub fn checked_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(ErrorCode::MathOverflow.into())
}

pub fn checked_sub_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(ErrorCode::MathOverflow.into())
}

/// `amount * percent / 100`, floored.
pub fn percent_of(amount: u64, percent: u64) -> Result<u64> {
    let scaled = (amount as u128)
        .checked_mul(percent as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(PERCENT_DENOMINATOR as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    u64::try_from(scaled).map_err(|_| ErrorCode::MathOverflow.into())
}

/// Price of `count` tickets bought in one order. The discount applies to the whole
/// order once `count` is strictly above `discount_threshold`.
pub fn compute_bulk_amount(
    count: u32,
    price_per_ticket: u64,
    discount_percent: u8,
    discount_threshold: u32,
) -> Result<BulkPrice> {
    let total_amount = price_per_ticket
        .checked_mul(count as u64)
        .ok_or(ErrorCode::MathOverflow)?;

    if count <= discount_threshold {
        return Ok(BulkPrice {
            total_amount,
            discount: 0,
            final_amount: total_amount,
        });
    }

    let kept_percent = PERCENT_DENOMINATOR
        .checked_sub(discount_percent as u64)
        .ok_or(ErrorCode::InvalidDiscountPercent)?;

    Ok(BulkPrice {
        total_amount,
        discount: discount_percent,
        final_amount: percent_of(total_amount, kept_percent)?,
    })
}

/// Size of the intersection of the two number sets. Position and repetition are ignored.
pub fn count_matches(numbers: &[u8], winning: &[u8]) -> u8 {
    numbers
        .iter()
        .enumerate()
        .filter(|&(i, n)| !numbers[..i].contains(n) && winning.contains(n))
        .count() as u8
}

/// Expands one VRF output into `count` numbers in `[min, max]`.
///
/// Numbers are distinct whenever the range holds at least `count` values; each slot
/// re-hashes with a bumped nonce until it lands on an unused value.
pub fn derive_lucky_numbers(randomness: &[u8; 32], count: u8, min: u8, max: u8) -> Vec<u8> {
    if max < min {
        return Vec::new();
    }

    let span = (max as u64) - (min as u64) + 1;
    let distinct = span >= count as u64;
    let mut numbers = Vec::with_capacity(count as usize);

    for slot in 0..count as u32 {
        let mut nonce: u32 = 0;

        loop {
            let mut hasher = blake3::Hasher::new();
            hasher.update(randomness);
            hasher.update(&slot.to_le_bytes());
            hasher.update(&nonce.to_le_bytes());
            let digest = hasher.finalize();

            let word = u64::from_le(bytemuck::pod_read_unaligned::<u64>(&digest.as_bytes()[..8]));
            let value = (min as u64 + word % span) as u8;

            if !distinct || !numbers.contains(&value) {
                numbers.push(value);
                break;
            }

            nonce = nonce.saturating_add(1);
        }
    }

    numbers
}

/// Structural check of a five-field cron expression. Field semantics are left to
/// the off-chain scheduler.
pub fn validate_cron_spec(spec: &str) -> Result<()> {
    require!(!spec.trim().is_empty(), ErrorCode::InvalidCronSpec);
    require!(spec.len() <= MAX_CRON_SPEC_LEN, ErrorCode::InvalidCronSpec);

    let fields: Vec<&str> = spec.split_whitespace().collect();
    require!(fields.len() == CRON_FIELDS, ErrorCode::InvalidSpec);

    for field in fields {
        require!(
            field
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '*' | ',' | '-' | '/')),
            ErrorCode::InvalidSpec
        );
        require!(
            field.chars().any(|c| c.is_ascii_digit() || c == '*'),
            ErrorCode::InvalidSpec
        );
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(_) => u32::MAX,
    }
}

#[cfg(test)]
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    let err = result.expect_err("expected an error");
    assert_eq!(error_code(err), u32::from(expected), "expected {:?}", expected);
}
