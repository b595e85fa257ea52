use serde::{Deserialize, Serialize};

use crate::models::CashflowStatement;

pub const OPERATING_ACTIVITY: &str = "operating activity";
pub const FINANCING_ACTIVITY: &str = "financing activity";
pub const INVESTING_ACTIVITY: &str = "investing activity";

/// One bar of the cash flow chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowRow {
    pub item: String,
    pub period: String,
    pub value: Option<f64>,
}

/// Flatten statements into chart rows: operating, financing, investing per period
pub fn cashflow_breakdown(statements: &[CashflowStatement]) -> Vec<CashflowRow> {
    statements
        .iter()
        .flat_map(|cf| {
            let period = cf.fmt_end_date();
            [
                (OPERATING_ACTIVITY, cf.total_cash_from_operating_activities),
                (FINANCING_ACTIVITY, cf.total_cash_from_financing_activities),
                (INVESTING_ACTIVITY, cf.total_cashflows_from_investing_activities),
            ]
            .into_iter()
            .map(move |(item, value)| CashflowRow {
                item: item.to_string(),
                period: period.clone(),
                value,
            })
        })
        .collect()
}
