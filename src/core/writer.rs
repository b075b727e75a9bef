use std::collections::HashSet;
use std::io::Write;

/// Codes in ascending byte order, which for UTF-8 is also code point order.
pub fn sorted_codes(codes: &HashSet<String>) -> Vec<&str> {
    let mut sorted: Vec<&str> = codes.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

/// Writes one code per line, each newline-terminated. Returns the number of lines.
pub fn write_codes<W: Write>(codes: &HashSet<String>, mut out: W) -> std::io::Result<usize> {
    let sorted = sorted_codes(codes);
    for code in &sorted {
        out.write_all(code.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(sorted.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_sorted_newline_terminated() {
        let codes: HashSet<String> = ["ZZZZZZZZZZ", "ABCDEFGH", "MMMMMMMMM"]
            .iter()
            .map(|c| c.to_string())
            .collect();

        let mut out = Vec::new();
        let written = write_codes(&codes, &mut out).unwrap();

        assert_eq!(written, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ABCDEFGH\nMMMMMMMMM\nZZZZZZZZZZ\n"
        );
    }

    #[test]
    fn test_empty_set_writes_nothing() {
        let mut out = Vec::new();
        assert_eq!(write_codes(&HashSet::new(), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_sort_is_byte_order() {
        let codes: HashSet<String> = ["abcdefgh", "ABCDEFGH", "12345678"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(sorted_codes(&codes), vec!["12345678", "ABCDEFGH", "abcdefgh"]);
    }
}
