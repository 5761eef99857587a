use std::fmt::Display;

/// Parses the integer at the start of `raw`, ignoring leading whitespace
/// and anything after the digits (`" 12abc"` is 12, `"abc"` is nothing).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Anything that can stand for a player or team identifier.
pub trait IdInput: Display {
    fn to_id(&self) -> Option<u32>;
}

impl IdInput for u32 {
    fn to_id(&self) -> Option<u32> {
        Some(*self)
    }
}

impl IdInput for u8 {
    fn to_id(&self) -> Option<u32> {
        Some(u32::from(*self))
    }
}

impl IdInput for i64 {
    fn to_id(&self) -> Option<u32> {
        u32::try_from(*self).ok()
    }
}

impl IdInput for &str {
    fn to_id(&self) -> Option<u32> {
        parse_leading_int(self).and_then(|v| u32::try_from(v).ok())
    }
}

impl IdInput for String {
    fn to_id(&self) -> Option<u32> {
        self.as_str().to_id()
    }
}
