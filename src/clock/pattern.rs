//! Unicode date-field patterns (`HH:mm:ss`, `h:mm:ss a`, `yyyy-MM-dd` ...).
//!
//! Patterns are parsed once into tokens and rendered every tick. Rendering
//! follows the `en_US_POSIX` conventions of the platform date formatter:
//! English month/weekday names, `AM`/`PM`, ASCII digits.
//!
//! Supported symbols: `G y M L d D E e c a h H k K m s S Z x X z O`.
//! Text inside single quotes is literal, `''` is a quote. Any other ASCII
//! letter is emitted as-is.

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    /// A run of `width` identical pattern letters.
    Field { symbol: char, width: usize },
}

/// Splits a pattern into literal runs and field runs.
pub fn parse(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                literal.push('\'');
                continue;
            }
            // Quoted run; an unterminated quote runs to the end.
            while let Some(q) = chars.next() {
                if q != '\'' {
                    literal.push(q);
                } else if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                } else {
                    break;
                }
            }
        } else if c.is_ascii_alphabetic() {
            let mut width = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                width += 1;
            }
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Field { symbol: c, width });
        } else {
            literal.push(c);
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Renders parsed tokens for a zoned date-time.
pub fn render<Tz: TimeZone>(tokens: &[Token], dt: &DateTime<Tz>) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Field { symbol, width } => render_field(&mut out, *symbol, *width, dt),
        }
    }
    out
}

fn render_field<Tz: TimeZone>(out: &mut String, symbol: char, width: usize, dt: &DateTime<Tz>) {
    let offset = dt.offset().fix().local_minus_utc();

    match symbol {
        'G' => out.push_str(if dt.year() > 0 { "AD" } else { "BC" }),
        'y' => {
            if width == 2 {
                out.push_str(&pad(i64::from(dt.year().rem_euclid(100)), 2));
            } else {
                out.push_str(&pad(i64::from(dt.year()), width));
            }
        }
        'M' | 'L' => {
            let month = dt.month() as usize;
            match width {
                1 | 2 => out.push_str(&pad(month as i64, width)),
                3 => out.push_str(&MONTHS[month - 1][..3]),
                4 => out.push_str(MONTHS[month - 1]),
                _ => out.push_str(&MONTHS[month - 1][..1]),
            }
        }
        'd' => out.push_str(&pad(i64::from(dt.day()), width)),
        'D' => out.push_str(&pad(i64::from(dt.ordinal()), width)),
        'e' | 'c' if width <= 2 => {
            // Sunday = 1 in the en_US week.
            let n = dt.weekday().number_from_sunday();
            out.push_str(&pad(i64::from(n), width));
        }
        'E' | 'e' | 'c' => {
            let name = WEEKDAYS[dt.weekday().num_days_from_monday() as usize];
            match width {
                4 => out.push_str(name),
                5 => out.push_str(&name[..1]),
                6 => out.push_str(&name[..2]),
                _ => out.push_str(&name[..3]),
            }
        }
        'a' => out.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
        'h' => {
            let h = match dt.hour() % 12 {
                0 => 12,
                h => h,
            };
            out.push_str(&pad(i64::from(h), width));
        }
        'H' => out.push_str(&pad(i64::from(dt.hour()), width)),
        'k' => {
            let h = if dt.hour() == 0 { 24 } else { dt.hour() };
            out.push_str(&pad(i64::from(h), width));
        }
        'K' => out.push_str(&pad(i64::from(dt.hour() % 12), width)),
        'm' => out.push_str(&pad(i64::from(dt.minute()), width)),
        's' => out.push_str(&pad(i64::from(dt.second()), width)),
        'S' => {
            let nanos = format!("{:09}", dt.nanosecond() % 1_000_000_000);
            let digits = width.min(9);
            out.push_str(&nanos[..digits]);
            for _ in digits..width {
                out.push('0');
            }
        }
        'Z' => match width {
            1..=3 => out.push_str(&iso_offset(offset, false, true)),
            4 => out.push_str(&gmt_offset(offset, true)),
            _ if offset == 0 => out.push('Z'),
            _ => out.push_str(&iso_offset(offset, true, true)),
        },
        'x' | 'X' => {
            if symbol == 'X' && offset == 0 {
                out.push('Z');
            } else {
                match width {
                    1 => out.push_str(&iso_offset(offset, false, offset % 3600 != 0)),
                    2 => out.push_str(&iso_offset(offset, false, true)),
                    _ => out.push_str(&iso_offset(offset, true, true)),
                }
            }
        }
        'z' | 'O' => out.push_str(&gmt_offset(offset, width >= 4)),
        other => {
            for _ in 0..width {
                out.push(other);
            }
        }
    }
}

fn pad(value: i64, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// `+0800`, `+08:00`, `+08`.
fn iso_offset(seconds: i32, colon: bool, with_minutes: bool) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    match (with_minutes, colon) {
        (false, _) => format!("{sign}{hours:02}"),
        (true, true) => format!("{sign}{hours:02}:{minutes:02}"),
        (true, false) => format!("{sign}{hours:02}{minutes:02}"),
    }
}

/// `GMT+8`, `GMT+5:30`, `GMT+08:00` (long), `GMT` at zero.
fn gmt_offset(seconds: i32, long: bool) -> String {
    if seconds == 0 {
        return "GMT".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    if long {
        format!("GMT{sign}{hours:02}:{minutes:02}")
    } else if minutes == 0 {
        format!("GMT{sign}{hours}")
    } else {
        format!("GMT{sign}{hours}:{minutes:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, h, m, s).unwrap()
    }

    fn fmt(pattern: &str, dt: &DateTime<Utc>) -> String {
        render(&parse(pattern), dt)
    }

    #[test]
    fn test_parse_groups_repeated_letters() {
        assert_eq!(
            parse("HH:mm"),
            vec![
                Token::Field { symbol: 'H', width: 2 },
                Token::Literal(":".into()),
                Token::Field { symbol: 'm', width: 2 },
            ]
        );
    }

    #[test]
    fn test_quoted_text_is_literal() {
        assert_eq!(fmt("HH 'o''clock'", &at(9, 0, 0)), "09 o'clock");
        assert_eq!(fmt("''HH", &at(9, 0, 0)), "'09");
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(fmt("h:mm:ss a", &at(14, 30, 5)), "2:30:05 PM");
        assert_eq!(fmt("h:mm a", &at(0, 5, 0)), "12:05 AM");
        assert_eq!(fmt("K", &at(12, 0, 0)), "0");
        assert_eq!(fmt("k", &at(0, 0, 0)), "24");
    }

    #[test]
    fn test_dates_and_names() {
        let dt = at(14, 30, 0);
        assert_eq!(fmt("yyyy-MM-dd", &dt), "2026-01-15");
        assert_eq!(fmt("yy/M/d", &dt), "26/1/15");
        assert_eq!(fmt("EEE, MMM d", &dt), "Thu, Jan 15");
        assert_eq!(fmt("EEEE MMMM", &dt), "Thursday January");
        assert_eq!(fmt("D", &dt), "15");
    }

    #[test]
    fn test_offsets() {
        let tz = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let dt = tz.with_ymd_and_hms(2026, 1, 15, 8, 0, 0).unwrap();
        let tokens = parse("Z|ZZZZ|ZZZZZ|x|xxx|z");
        assert_eq!(render(&tokens, &dt), "+0530|GMT+05:30|+05:30|+0530|+05:30|GMT+5:30");

        let utc = at(0, 0, 0);
        assert_eq!(fmt("X|ZZZZZ|z", &utc), "Z|Z|GMT");
    }

    #[test]
    fn test_fraction_digits() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(fmt("ss.SSS", &dt), "00.123");
    }
}
