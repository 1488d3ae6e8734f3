use humansize::DECIMAL;

/// Format size in human-readable SI units ("15 B", "1.50 kB")
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, DECIMAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(15), "15 B");
        assert_eq!(format_size(999), "999 B");
    }

    #[test]
    fn test_format_size_uses_decimal_units() {
        assert!(format_size(1500).ends_with("kB"));
        assert!(format_size(2_000_000).ends_with("MB"));
    }
}
