// Time, in milliseconds since the Unix epoch
pub const SECOND_MS: u64 = 1_000;
pub const MINUTE_MS: u64 = 60 * SECOND_MS;
pub const HOUR_MS: u64 = 60 * MINUTE_MS;
pub const DAY_MS: u64 = 24 * HOUR_MS;
pub const HOURS_PER_DAY: u32 = 24;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;

// 10_000 bps = 100%
pub const BPS_SCALE: u32 = 10_000;
pub const PERCENT_DECIMALS: u32 = 2;

pub const USDC_DECIMALS: u32 = 6;

pub const OVERDUE_LABEL: &str = "Executing...";
pub const IDLE_LABEL: &str = "Idle (In Vault)";
