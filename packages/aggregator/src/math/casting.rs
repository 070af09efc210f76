use soroban_sdk::{log, Env};

use crate::error::{AggregatorResult, ErrorCode};

pub trait Cast: Sized {
    /// Narrowing conversion that logs and fails instead of truncating.
    fn cast<T: CastFrom<Self>>(self, env: &Env) -> AggregatorResult<T> {
        T::cast_from(self, env)
    }
}

pub trait CastFrom<T>: Sized {
    fn cast_from(value: T, env: &Env) -> AggregatorResult<Self>;
}

macro_rules! impl_cast {
    ($src:ty, $dst:ty) => {
        impl CastFrom<$src> for $dst {
            fn cast_from(value: $src, env: &Env) -> AggregatorResult<Self> {
                value.try_into().map_err(|_| {
                    log!(
                        env,
                        "Casting error: Failed to cast {} to {}",
                        stringify!($src),
                        stringify!($dst)
                    );
                    ErrorCode::CastingFailure
                })
            }
        }
    };
}

impl_cast!(u128, u32);
impl_cast!(i128, u128);

impl Cast for u128 {}
impl Cast for i128 {}
