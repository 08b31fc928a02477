//! Activity log command

use clap::Args;

use super::Context;
use crate::display::format_activity_list;
use crate::error::SkyclerkResult;

/// Arguments for `skyclerk activities`
#[derive(Args, Debug)]
pub struct ActivitiesArgs {
    /// Number of activities to return
    #[arg(long, default_value = "100")]
    pub limit: String,
    /// Sort field
    #[arg(long, default_value = "id")]
    pub order: String,
    /// Sort direction (ASC or DESC)
    #[arg(long, default_value = "DESC")]
    pub sort: String,
}

pub fn handle_activities_command(ctx: &Context, args: ActivitiesArgs) -> SkyclerkResult<()> {
    let activities = ctx.client()?.get_activities(&[
        ("limit", args.limit.as_str()),
        ("order", args.order.as_str()),
        ("sort", args.sort.as_str()),
    ])?;
    ctx.emit(&activities, |a| format_activity_list(a))
}
