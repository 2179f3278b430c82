//! Day count conversion.
//!
//! Expiries arrive as whole calendar days; pricing formulas want years.
//!
//! ```
//! use impvol_core::types::time::DayCountConvention;
//!
//! let tau = DayCountConvention::ActualActual365.year_fraction_from_days(73.0);
//! assert!((tau - 0.2).abs() < 1e-15);
//! ```

use std::fmt;

/// Days in a year under ACT/365 Fixed.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Day count convention for converting day counts into year fractions.
///
/// Only ACT/365 Fixed is supported: no calendar or business-day logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    ActualActual365,
}

impl DayCountConvention {
    /// Returns the market-standard name.
    ///
    /// ```
    /// use impvol_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::ActualActual365.name(), "ACT/365");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActualActual365 => "ACT/365",
        }
    }

    /// Year fraction for a number of days.
    pub fn year_fraction_from_days(&self, days: f64) -> f64 {
        match self {
            DayCountConvention::ActualActual365 => days / DAYS_PER_YEAR,
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_year_fraction_from_days() {
        let dc = DayCountConvention::ActualActual365;
        assert_relative_eq!(dc.year_fraction_from_days(365.0), 1.0);
        assert_relative_eq!(dc.year_fraction_from_days(30.0), 30.0 / 365.0);
        assert_eq!(dc.year_fraction_from_days(0.0), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DayCountConvention::default()), "ACT/365");
    }
}
