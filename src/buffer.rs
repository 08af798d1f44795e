//! Capacity-checked writes into caller-owned output parameters

use std::ffi::c_char;
use std::slice;

/// Longest prefix of `value` within `max_bytes` that does not split a character
pub(crate) fn truncate_utf8(value: &str, max_bytes: usize) -> &str {
    if value.len() <= max_bytes {
        return value;
    }
    let mut end = max_bytes;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Copies `value` into `out` as a NUL-terminated string of at most `capacity` bytes.
///
/// A null `out` or a non-positive `capacity` means the caller does not want
/// the field and nothing is written. Returns whether the value was truncated.
///
/// # Safety
///
/// A non-null `out` must point to at least `capacity` writable bytes.
pub(crate) unsafe fn write_c_string(out: *mut c_char, capacity: i32, value: &str) -> bool {
    let Some(capacity) = usize::try_from(capacity).ok().filter(|&c| c > 0) else {
        return false;
    };
    if out.is_null() {
        return false;
    }

    let fitted = truncate_utf8(value, capacity - 1);
    // SAFETY: non-null and valid for `capacity` bytes per the caller contract
    let buffer = unsafe { slice::from_raw_parts_mut(out.cast::<u8>(), capacity) };
    buffer[..fitted.len()].copy_from_slice(fitted.as_bytes());
    buffer[fitted.len()] = 0;

    fitted.len() < value.len()
}

/// Stores `value` through `out` unless it is null
///
/// # Safety
///
/// A non-null `out` must be valid for a write of one `i32`.
pub(crate) unsafe fn write_i32(out: *mut i32, value: i32) {
    if !out.is_null() {
        // SAFETY: non-null and writable per the caller contract
        unsafe { out.write(value) };
    }
}
