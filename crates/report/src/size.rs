const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;
const TIB: u64 = GIB * 1024;

/// Render a byte count in the largest binary unit that keeps the value >= 1.
///
/// Counts below 1 KiB are printed as a bare integer (`"500 bytes"`), anything
/// larger with two decimals (`"1.50 KB"`). TB is the largest unit.
pub fn format_size(bytes: u64) -> String {
    let (unit, name) = match bytes {
        b if b >= TIB => (TIB, "TB"),
        b if b >= GIB => (GIB, "GB"),
        b if b >= MIB => (MIB, "MB"),
        b if b >= KIB => (KIB, "KB"),
        _ => return format!("{bytes} bytes"),
    };

    format!("{:.2} {}", bytes as f64 / unit as f64, name)
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;
