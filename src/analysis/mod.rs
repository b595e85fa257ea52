pub mod cap_rate_screener;
pub mod cashflow;
pub mod fair_value;
pub mod profit_margin;
pub mod price_filter;

pub use cap_rate_screener::*;
pub use cashflow::*;
pub use fair_value::*;
pub use profit_margin::*;
pub use price_filter::*;
