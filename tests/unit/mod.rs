mod cap_rate_screener;
mod fair_value;
