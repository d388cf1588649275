pub struct CoreConstants;

impl CoreConstants {
    pub const ERROR_TOKEN: &'static str = "Error";
    pub const PERCENT_DIVISOR: f64 = 100.0;
    pub const DECIMAL_POINT: &'static str = ".";
    pub const LEADING_ZERO: &'static str = "0";
}
