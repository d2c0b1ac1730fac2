//! Price tables and the financial breakdown derived from one message.

use serde::{Deserialize, Serialize};

use crate::message::{ParsedInput, Tier};

impl Tier {
    /// Ticket price charged to the customer, VND.
    pub fn unit_price(&self) -> i64 {
        match self {
            Tier::DacBiet => 1_700_000,
            Tier::Super => 700_000,
            Tier::Vip => 600_000,
            Tier::V500 => 500_000,
        }
    }

    /// Base cost per ticket, VND. Super and vip share one rate.
    pub fn unit_cost(&self) -> i64 {
        match self {
            Tier::DacBiet => 1_100_000,
            Tier::Super | Tier::Vip => 400_000,
            Tier::V500 => 500_000,
        }
    }
}

/// Derived financial figures, a pure function of [`ParsedInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// Tickets sold across all tiers.
    pub total_ve: u64,
    /// Ticket revenue, VND.
    pub total_revenue: i64,
    /// Base cost share of the revenue, VND.
    pub tien_goc: i64,
    /// Staff share: revenue minus base cost.
    pub tien_ngon_nv: i64,
    /// Revenue plus staff tip.
    pub total_ve_tip: i64,
    /// Cash still on hand once transfers are subtracted. May go negative.
    pub tien_mat: i64,
}

/// Compute the daily breakdown. Total: integer arithmetic only, no failure
/// path. Counts are widened to i64 before multiplying so no intermediate
/// product can overflow.
pub fn calculate(input: &ParsedInput) -> RevenueBreakdown {
    let mut total_ve = 0u64;
    let mut total_revenue = 0i64;
    let mut tien_goc = 0i64;

    for tier in Tier::ALL {
        let n = input.count(tier);
        total_ve += u64::from(n);
        total_revenue += i64::from(n) * tier.unit_price();
        tien_goc += i64::from(n) * tier.unit_cost();
    }

    RevenueBreakdown {
        total_ve,
        total_revenue,
        tien_goc,
        tien_ngon_nv: total_revenue - tien_goc,
        total_ve_tip: total_revenue + input.tip_nv,
        tien_mat: total_revenue + input.tip_nv - input.da_ck,
    }
}
