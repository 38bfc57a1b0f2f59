//! Shared cyclic-index helpers.

/// Floor-mod an index offset into `[0, len)`.
///
/// Backward walks pass negative offsets; truncating `%` would leave them
/// negative, `rem_euclid` never does.
pub fn wrap_index(idx: i64, len: u8) -> u8 {
    idx.rem_euclid(len as i64) as u8
}
