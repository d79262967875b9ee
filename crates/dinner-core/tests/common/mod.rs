use dinner_core::{FormatOptions, HourCycle};

/// Helper function to create options pinned to UTC
pub fn utc_options(hour_cycle: HourCycle) -> FormatOptions {
    FormatOptions::default()
        .with_time_zone("UTC")
        .with_hour_cycle(hour_cycle)
}
