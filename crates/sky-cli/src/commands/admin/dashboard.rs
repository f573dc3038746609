use std::collections::BTreeMap;

use serde::Serialize;
use sky_client::Sections;
use sky_core::records::{AdminBooking, BookingStatistics};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress;

const RECENT_BOOKINGS: u32 = 5;
const REVENUE_DAYS: u32 = 7;

#[derive(Serialize)]
struct DashboardResponse {
    statistics: Option<BookingStatistics>,
    recent_bookings: Option<Vec<AdminBooking>>,
    revenue_by_date: Option<BTreeMap<String, f64>>,
    failed_sections: Vec<String>,
}

/// The dashboard fans out three independent requests, waits for all of them
/// to settle, and degrades per section: one failed call blanks that section
/// and names it under `failed_sections` while the rest still render.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let bar = progress::spinner("loading dashboard");
    let (statistics, recent, revenue) = tokio::join!(
        ctx.client.admin_statistics(),
        ctx.client.admin_recent_bookings(RECENT_BOOKINGS),
        ctx.client.admin_revenue_by_date(REVENUE_DAYS),
    );
    bar.finish_and_clear();

    let mut sections = Sections::new();
    let response = DashboardResponse {
        statistics: sections.settle("statistics", statistics),
        recent_bookings: sections.settle("recent-bookings", recent),
        revenue_by_date: sections.settle("revenue-by-date", revenue),
        failed_sections: sections.failed().to_vec(),
    };

    output(&response, flags.format)
}
