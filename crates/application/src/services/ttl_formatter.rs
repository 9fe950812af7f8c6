/// Render a TTL as `HHhMMmSSs`, `MMmSSs` or `SSs`, dropping leading zero units.
pub fn format_ttl(ttl: u32) -> String {
    let hours = ttl / 3600;
    let minutes = (ttl / 60) % 60;
    let seconds = ttl % 60;

    if hours > 0 {
        format!("{:02}h{:02}m{:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{:02}m{:02}s", minutes, seconds)
    } else {
        format!("{:02}s", seconds)
    }
}
