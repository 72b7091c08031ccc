/// Seconds since the UNIX epoch, or zero if the clock is before it.
pub fn current_time_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Whole seconds since the UNIX epoch; used to name saved drawings.
pub fn timestamp_secs() -> u64 {
    current_time_secs() as u64
}
