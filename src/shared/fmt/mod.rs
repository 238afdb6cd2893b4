//! Display formatting for prices, chart values and timestamps.

pub mod currency;
pub mod time;

pub use currency::{format_currency_for_chart, CurrencyUnit};
pub use time::{epoch_timestamp, format_relative_time};
