/// Fee rates are expressed in tenths of basis points: 100_000 dbps is 100%.
pub const DBPS_DENOMINATOR: u64 = 100_000;

/// Calculates `floor(amount * dbps / 100_000)` without overflowing `u64`.
///
/// The amount is split into quotient and remainder of the denominator first:
/// `q * dbps` is at most `amount` and `r * dbps` stays below `100_000 * 65_535`.
pub fn calculate_fee(amount: u64, dbps: u16) -> u64 {
    let dbps = dbps as u64;
    let q = amount / DBPS_DENOMINATOR;
    let r = amount % DBPS_DENOMINATOR;
    q * dbps + (r * dbps) / DBPS_DENOMINATOR
}
