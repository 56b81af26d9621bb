use sha3::{Digest, Keccak256};

/// Return the EIP-55 mixed-case form of a 20-byte hex address.
/// Returns `None` when the input is not `0x` followed by 40 hex digits.
pub fn to_checksum_address(address: &str) -> Option<String> {
    let stripped = address.strip_prefix("0x")?;
    if stripped.len() != 40 || !stripped.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let lower = stripped.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }
    Some(checksummed)
}

/// True when `address` is a hex address written exactly in its EIP-55 checksum form.
pub fn is_checksum_address(address: &str) -> bool {
    to_checksum_address(address).is_some_and(|checksummed| checksummed == address)
}
