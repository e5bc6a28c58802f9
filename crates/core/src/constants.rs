use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest and largest accepted number of open days in a month
pub const MIN_DAYS_PER_MONTH: u32 = 1;
pub const MAX_DAYS_PER_MONTH: u32 = 31;

/// Default number of open days used by the bundled scenario
pub const DEFAULT_DAYS_PER_MONTH: u32 = 30;

/// Months used to annualize a monthly return
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Factor converting a ratio to a percentage
pub const PERCENT: Decimal = dec!(100);

/// Allowed drift when checking that product mix shares sum to one
pub const MIX_SHARE_TOLERANCE: Decimal = dec!(0.000000001);

/// Upper bound on the number of points a single sweep may produce
pub const MAX_SWEEP_POINTS: usize = 10_000;
