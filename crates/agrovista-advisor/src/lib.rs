//! Agrovista Advisor — the dashboard's static content: the keyword
//! responder behind the chatbot view, the simulated commodity price
//! series, and the agronomic tips.
//!
//! Everything here is pure and fixed at process start; no I/O.

mod prices;
mod responder;
mod tips;

pub use prices::{PricePoint, price_series};
pub use responder::{FALLBACK_ANSWER, KeywordRule, Responder};
pub use tips::{Tip, agronomic_tips};
