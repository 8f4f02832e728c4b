//! Simulated commodity price series for the Prices view.
//!
//! The dashboard ships fixed demo data: ten month-end points for
//! potato and coffee, COP per unit.

use chrono::NaiveDate;
use serde::Serialize;

/// One month-end observation of both simulated series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub month: NaiveDate,
    pub potato: u32,
    pub coffee: u32,
}

const SERIES: [(i32, u32, u32, u32, u32); 10] = [
    // (year, month, day, potato, coffee)
    (2024, 1, 31, 1800, 9000),
    (2024, 2, 29, 1900, 9200),
    (2024, 3, 31, 2000, 9100),
    (2024, 4, 30, 2100, 9300),
    (2024, 5, 31, 2200, 9400),
    (2024, 6, 30, 2300, 9500),
    (2024, 7, 31, 2400, 9600),
    (2024, 8, 31, 2300, 9550),
    (2024, 9, 30, 2200, 9600),
    (2024, 10, 31, 2100, 9700),
];

/// The fixed simulated series, oldest first.
pub fn price_series() -> Vec<PricePoint> {
    SERIES
        .iter()
        .map(|&(year, month, day, potato, coffee)| PricePoint {
            month: NaiveDate::from_ymd_opt(year, month, day)
                .expect("static series dates are valid"),
            potato,
            coffee,
        })
        .collect()
}
