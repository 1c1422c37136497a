//! Account names: up to 13 base-32 characters packed into a `u64`.

use crate::trx_format::error::{FormatError, Result};

const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";
const MAX_NAME_LEN: usize = 13;

fn char_to_symbol(c: u8) -> Option<u64> {
    match c {
        b'a'..=b'z' => Some((c - b'a') as u64 + 6),
        b'1'..=b'5' => Some((c - b'1') as u64 + 1),
        b'.' => Some(0),
        _ => None,
    }
}

pub fn string_to_name(s: &str) -> Result<u64> {
    let bytes = s.as_bytes();
    if bytes.len() > MAX_NAME_LEN {
        return Err(FormatError::InvalidName(format!(
            "{s} is longer than {MAX_NAME_LEN} characters"
        )));
    }

    let mut value = 0u64;
    for i in 0..MAX_NAME_LEN {
        let symbol = match bytes.get(i) {
            Some(&c) => char_to_symbol(c).ok_or_else(|| {
                FormatError::InvalidName(format!("{s} contains '{}'", c as char))
            })?,
            None => 0,
        };
        if i < MAX_NAME_LEN - 1 {
            value |= (symbol & 0x1f) << (64 - 5 * (i + 1));
        } else {
            if symbol > 0x0f {
                return Err(FormatError::InvalidName(format!(
                    "{s} has an out of range 13th character"
                )));
            }
            value |= symbol;
        }
    }
    Ok(value)
}

pub fn name_to_string(value: u64) -> String {
    let mut out = [b'.'; MAX_NAME_LEN];
    let mut tmp = value;
    for i in 0..MAX_NAME_LEN {
        let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
        out[MAX_NAME_LEN - 1 - i] = CHARMAP[(tmp & mask) as usize];
        tmp >>= shift;
    }
    String::from_utf8_lossy(&out)
        .trim_end_matches('.')
        .to_string()
}

pub fn validate_name(s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(FormatError::InvalidName("empty name".to_string()));
    }
    let value = string_to_name(s)?;
    if name_to_string(value) != s {
        return Err(FormatError::InvalidName(format!(
            "{s} does not round-trip (trailing '.'?)"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{name_to_string, string_to_name, validate_name};

    #[test]
    fn encodes_known_names() {
        assert_eq!(string_to_name("").expect("empty"), 0);
        assert_eq!(string_to_name("a").expect("a"), 6u64 << 59);
        assert_eq!(string_to_name("xmax").expect("xmax"), 0xec8d_d000_0000_0000);
    }

    #[test]
    fn decode_inverts_encode() {
        for name in ["xmax", "alice", "inita", "a.b.c", "zzzzzzzzzzzzj", "12345"] {
            let value = string_to_name(name).expect("encode");
            assert_eq!(name_to_string(value), name);
        }
    }

    #[test]
    fn validate_name_rejects_bad_input() {
        assert!(validate_name("alice").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("Alice").is_err());
        assert!(validate_name("alice6").is_err());
        assert!(validate_name("alice.").is_err());
        assert!(validate_name("aaaaaaaaaaaaaa").is_err());
        assert!(validate_name("aaaaaaaaaaaaz").is_err());
    }
}
