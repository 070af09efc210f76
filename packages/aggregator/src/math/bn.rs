//! Wide unsigned integers for intermediate products.
//!
//! Balances are carried at up to 18 decimals in a `u128`; multiplying one by a
//! basis-point rate or by `BPS_SCALE` can exceed 128 bits, so products and
//! running sums are accumulated here before dividing back down.

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

use uint::construct_uint;

construct_uint! {
    /// 192-bit unsigned integer.
    pub struct U192(3);
}

impl U192 {
    /// Narrow back to `u128`, saturating at `u128::MAX`.
    pub fn saturating_to_u128(self) -> u128 {
        if self > U192::from(u128::MAX) {
            u128::MAX
        } else {
            self.as_u128()
        }
    }
}
