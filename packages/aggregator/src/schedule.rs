//! Batch window arithmetic.
//!
//! Vault routers queue deposits and withdrawals and settle them together at
//! fixed hour boundaries counted from 00:00 UTC. Views show the next boundary
//! and a countdown to it. All instants are milliseconds since the Unix epoch
//! and "now" is always passed in by the caller.

use num_integer::Integer;
use soroban_sdk::{contracttype, Env, String};

use crate::{
    constants::{DAY_MS, HOURS_PER_DAY, HOUR_MS, OVERDUE_LABEL, SECOND_MS, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
    error::{AggregatorResult, ErrorCode},
    format::TextBuf,
    validate,
};

/// A batch period in whole hours that divides a day evenly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BatchInterval(u32);

impl BatchInterval {
    pub const HOURLY: BatchInterval = BatchInterval(1);

    pub fn new(hours: u32) -> Option<BatchInterval> {
        if hours > 0 && HOURS_PER_DAY % hours == 0 {
            Some(BatchInterval(hours))
        } else {
            None
        }
    }

    pub fn validated(env: &Env, hours: u32) -> AggregatorResult<BatchInterval> {
        validate!(
            env,
            hours > 0 && HOURS_PER_DAY % hours == 0,
            ErrorCode::InvalidBatchInterval,
            "Batch interval of {} hours does not divide a day",
            hours
        )?;
        Ok(BatchInterval(hours))
    }

    pub fn hours(&self) -> u32 {
        self.0
    }

    /// `0, h, 2h, ...` up to but excluding 24.
    pub fn boundary_hours(&self) -> impl Iterator<Item = u32> {
        (0..HOURS_PER_DAY).step_by(self.0 as usize)
    }
}

/// The first batch boundary strictly after `now_ms`.
pub fn next_batch_instant(interval: BatchInterval, now_ms: u64) -> u64 {
    let (day, time_of_day) = now_ms.div_rem(&DAY_MS);
    let day_start = day * DAY_MS;
    let hour = (time_of_day / HOUR_MS) as u32;

    let candidate = match interval.boundary_hours().find(|boundary| *boundary > hour) {
        Some(boundary) => day_start.saturating_add(boundary as u64 * HOUR_MS),
        // past the last boundary of the day; the first one is always midnight
        None => day_start.saturating_add(DAY_MS),
    };

    if candidate <= now_ms {
        candidate.saturating_add(DAY_MS)
    } else {
        candidate
    }
}

/// Time left before a batch target.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Remaining {
    /// The target has passed and the batch has not been observed yet
    Overdue,
    Left(u64),
}

impl Remaining {
    pub fn countdown(&self) -> Countdown {
        match self {
            Remaining::Overdue => Countdown::Overdue,
            Remaining::Left(ms) => clock(*ms),
        }
    }
}

pub fn remaining_duration(target_ms: u64, now_ms: u64) -> Remaining {
    match target_ms.checked_sub(now_ms) {
        Some(left) if left > 0 => Remaining::Left(left),
        _ => Remaining::Overdue,
    }
}

/// Renderable countdown, `"1h 1m 1s"`, `"4m 0s"`, `"59s"` or the overdue label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Countdown {
    Overdue,
    Clock { hours: u64, minutes: u64, seconds: u64 },
}

fn clock(duration_ms: u64) -> Countdown {
    let total_seconds = duration_ms / SECOND_MS;
    let (hours, rest) = total_seconds.div_rem(&SECONDS_PER_HOUR);
    let (minutes, seconds) = rest.div_rem(&SECONDS_PER_MINUTE);
    Countdown::Clock {
        hours,
        minutes,
        seconds,
    }
}

/// Signed so a target that is already behind "now" can be passed straight in.
pub fn format_countdown(duration_ms: i64) -> Countdown {
    if duration_ms <= 0 {
        Countdown::Overdue
    } else {
        clock(duration_ms as u64)
    }
}

impl Countdown {
    pub fn write_to(&self, buf: &mut TextBuf) {
        match *self {
            Countdown::Overdue => {
                buf.push_str(OVERDUE_LABEL);
            }
            Countdown::Clock {
                hours,
                minutes,
                seconds,
            } => {
                if hours > 0 {
                    buf.push_uint(hours).push_str("h ");
                }
                if hours > 0 || minutes > 0 {
                    buf.push_uint(minutes).push_str("m ");
                }
                buf.push_uint(seconds).push_str("s");
            }
        }
    }

    pub fn to_string(&self, env: &Env) -> AggregatorResult<String> {
        let mut buf = TextBuf::new();
        self.write_to(&mut buf);
        buf.to_string(env)
    }
}

/// Next batch of a vault as seen at one instant.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BatchWindow {
    pub interval_hours: u32,
    pub next_execution_ms: u64,
    pub remaining: Remaining,
}

impl BatchWindow {
    pub fn at(interval: BatchInterval, now_ms: u64) -> BatchWindow {
        let next_execution_ms = next_batch_instant(interval, now_ms);
        BatchWindow {
            interval_hours: interval.hours(),
            next_execution_ms,
            remaining: remaining_duration(next_execution_ms, now_ms),
        }
    }

    /// Re-evaluates the countdown of an already computed window.
    pub fn remaining_at(&self, now_ms: u64) -> Remaining {
        remaining_duration(self.next_execution_ms, now_ms)
    }
}
