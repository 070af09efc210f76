use soroban_sdk::{log, Env};

use crate::error::{AggregatorResult, ErrorCode};

/// Checked arithmetic that logs the failing call site and maps overflow,
/// underflow and division by zero to [`ErrorCode::MathError`].
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> AggregatorResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> AggregatorResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> AggregatorResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> AggregatorResult<Self>;
}

#[track_caller]
#[inline(always)]
fn or_math_error<T>(result: Option<T>, env: &Env) -> AggregatorResult<T> {
    result.ok_or_else(|| {
        let location = core::panic::Location::caller();
        log!(env, "Math error thrown at {}:{}", location.file(), location.line());
        ErrorCode::MathError
    })
}

macro_rules! checked_impl {
    ($($t:ty),+) => {
        $(
            impl SafeMath for $t {
                #[track_caller]
                #[inline(always)]
                fn safe_add(self, v: $t, env: &Env) -> AggregatorResult<$t> {
                    or_math_error(self.checked_add(v), env)
                }

                #[track_caller]
                #[inline(always)]
                fn safe_sub(self, v: $t, env: &Env) -> AggregatorResult<$t> {
                    or_math_error(self.checked_sub(v), env)
                }

                #[track_caller]
                #[inline(always)]
                fn safe_mul(self, v: $t, env: &Env) -> AggregatorResult<$t> {
                    or_math_error(self.checked_mul(v), env)
                }

                #[track_caller]
                #[inline(always)]
                fn safe_div(self, v: $t, env: &Env) -> AggregatorResult<$t> {
                    or_math_error(self.checked_div(v), env)
                }
            }
        )+
    };
}

checked_impl!(u128, u64, u32);
