pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Seed for the item set of size `num_items` derived from a base seed string.
pub fn seed_for_item_count(base_seed: &str, num_items: usize) -> [u8; 32] {
    u8s_from_str(&format!("{}:{}", base_seed, num_items))
}
