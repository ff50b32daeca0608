use std::path::PathBuf;

use crate::prelude::FromToken;

// Splits an integer token into (negative, radix, digits).
//  0x1F, 0X1F => 16
//  017        => 8
//  42         => 10
fn split_radix(token: &str) -> Result<(bool, u32, &str), String> {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // from_str_radix tolerates its own sign, which would let "0x-1" through.
    match digits.chars().next() {
        None => Err("no digits found".to_string()),
        Some('+') | Some('-') => Err("invalid digit found in string".to_string()),
        Some(_) => Ok((negative, radix, digits)),
    }
}

macro_rules! integer_from_token {
    ($($t:ty),*) => {
        $(
            impl<'t> FromToken<'t> for $t {
                fn from_token(token: &'t str) -> Result<Self, String> {
                    let (negative, radix, digits) = split_radix(token)?;
                    let result = if negative {
                        <$t>::from_str_radix(&format!("-{digits}"), radix)
                    } else {
                        <$t>::from_str_radix(digits, radix)
                    };
                    result.map_err(|error| error.to_string())
                }
            }
        )*
    };
}

integer_from_token!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_from_token {
    ($($t:ty),*) => {
        $(
            impl<'t> FromToken<'t> for $t {
                fn from_token(token: &'t str) -> Result<Self, String> {
                    token.parse::<$t>().map_err(|error| error.to_string())
                }
            }
        )*
    };
}

float_from_token!(f32, f64);

impl<'t> FromToken<'t> for String {
    fn from_token(token: &'t str) -> Result<Self, String> {
        Ok(token.to_string())
    }
}

impl<'t> FromToken<'t> for &'t str {
    fn from_token(token: &'t str) -> Result<Self, String> {
        Ok(token)
    }
}

impl<'t> FromToken<'t> for char {
    fn from_token(token: &'t str) -> Result<Self, String> {
        let mut characters = token.chars();

        match (characters.next(), characters.next()) {
            (Some(c), None) => Ok(c),
            _ => Err("expected precisely one character".to_string()),
        }
    }
}

impl<'t> FromToken<'t> for PathBuf {
    fn from_token(token: &'t str) -> Result<Self, String> {
        Ok(PathBuf::from(token))
    }
}
