use soroban_sdk::Env;

use crate::{
    constants::BPS_SCALE,
    error::AggregatorResult,
    math::{bn::U192, safe_math::SafeMath},
};

/// `floor(part * 10_000 / total)`, or 0 when `total` is 0.
///
/// The product is taken in 192 bits so any `u128` balance is accepted.
/// Parts larger than the total (an inconsistent read) saturate at 100%.
pub fn proportion_bps(part: u128, total: u128) -> u32 {
    if total == 0 {
        return 0;
    }

    let scaled = U192::from(part) * U192::from(BPS_SCALE) / U192::from(total);
    if scaled > U192::from(BPS_SCALE) {
        BPS_SCALE
    } else {
        scaled.low_u32()
    }
}

/// `10^exp` as a `u128`.
pub fn pow10(env: &Env, exp: u32) -> AggregatorResult<u128> {
    let mut value = 1u128;
    for _ in 0..exp {
        value = value.safe_mul(10, env)?;
    }
    Ok(value)
}
