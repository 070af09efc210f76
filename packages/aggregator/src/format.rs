//! Text rendering without `core::fmt`.
//!
//! Contracts compile to wasm where pulling in the formatting machinery is
//! expensive, so display strings are assembled in a fixed stack buffer with
//! `itoa` and only then copied into a Soroban [`String`].

use soroban_sdk::{Env, String};

use crate::{
    constants::{BPS_SCALE, PERCENT_DECIMALS},
    error::{AggregatorResult, ErrorCode},
    math::{helpers::pow10, safe_math::SafeMath},
};

pub const TEXT_CAPACITY: usize = 64;

pub struct TextBuf {
    bytes: [u8; TEXT_CAPACITY],
    len: usize,
    overflowed: bool,
}

impl Default for TextBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuf {
    pub const fn new() -> Self {
        TextBuf {
            bytes: [0; TEXT_CAPACITY],
            len: 0,
            overflowed: false,
        }
    }

    /// Appends `s` whole, or marks the buffer overflowed and leaves it as is.
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        let end = self.len + s.len();
        if end > TEXT_CAPACITY {
            self.overflowed = true;
        } else {
            self.bytes[self.len..end].copy_from_slice(s.as_bytes());
            self.len = end;
        }
        self
    }

    pub fn push_uint<I: itoa::Integer>(&mut self, value: I) -> &mut Self {
        let mut digits = itoa::Buffer::new();
        self.push_str(digits.format(value))
    }

    /// Left-pads `value` with zeros to `width` digits.
    pub fn push_zero_padded(&mut self, value: u128, width: u32) -> &mut Self {
        let mut digits = itoa::Buffer::new();
        let rendered = digits.format(value);
        for _ in rendered.len()..width as usize {
            self.push_str("0");
        }
        self.push_str(rendered)
    }

    pub fn as_str(&self) -> &str {
        // only whole `&str` values are ever copied in
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_string(&self, env: &Env) -> AggregatorResult<String> {
        if self.overflowed {
            soroban_sdk::log!(env, "Rendered text exceeds {} bytes", TEXT_CAPACITY as u32);
            return Err(ErrorCode::BufferOverflow);
        }
        Ok(String::from_str(env, self.as_str()))
    }
}

/// Writes `amount` (in units of `10^-decimals`) with `display_decimals`
/// fractional digits, rounding half up.
pub fn write_units(
    env: &Env,
    buf: &mut TextBuf,
    amount: u128,
    decimals: u32,
    display_decimals: u32,
) -> AggregatorResult {
    let shown = if display_decimals >= decimals {
        amount.safe_mul(pow10(env, display_decimals - decimals)?, env)?
    } else {
        let divisor = pow10(env, decimals - display_decimals)?;
        let quotient = amount / divisor;
        let remainder = amount % divisor;
        if remainder.safe_mul(2, env)? >= divisor {
            quotient.safe_add(1, env)?
        } else {
            quotient
        }
    };

    let display_scale = pow10(env, display_decimals)?;
    buf.push_uint(shown / display_scale);
    if display_decimals > 0 {
        buf.push_str(".")
            .push_zero_padded(shown % display_scale, display_decimals);
    }

    Ok(())
}

pub fn format_units(
    env: &Env,
    amount: u128,
    decimals: u32,
    display_decimals: u32,
) -> AggregatorResult<String> {
    let mut buf = TextBuf::new();
    write_units(env, &mut buf, amount, decimals, display_decimals)?;
    buf.to_string(env)
}

/// Basis points as a two-decimal percentage, `8000` -> `"80.00"`.
pub fn write_bps_percent(buf: &mut TextBuf, bps: u32) {
    let hundredths = BPS_SCALE / 10_u32.pow(PERCENT_DECIMALS);
    buf.push_uint(bps / hundredths)
        .push_str(".")
        .push_zero_padded((bps % hundredths) as u128, PERCENT_DECIMALS);
}
