use soroban_sdk::contracterror;

pub type AggregatorResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 1,
    CastingFailure = 2,
    /// Batch interval is zero or does not divide a day evenly
    InvalidBatchInterval = 3,
    /// Amount must be greater than zero
    InvalidAmount = 4,
    InsufficientBalance = 5,
    /// Rendered text does not fit the fixed output buffer
    BufferOverflow = 6,
}
