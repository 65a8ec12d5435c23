//! Pointer/length conversion at the host boundary
//!
//! Hosts pass sequences as a raw pointer and a signed length. Anything that
//! cannot be a valid slice (null pointer, negative length) becomes `None`,
//! which the core treats the same as a missing sequence.

use core::slice;

/// Borrow a host buffer as a slice
///
/// # Safety
///
/// When `ptr` is non-null and `len` is non-negative, `ptr` must point to
/// `len` initialized `f32` values that stay valid and unmodified for `'a`.
pub(crate) unsafe fn host_slice<'a>(ptr: *const f32, len: i32) -> Option<&'a [f32]> {
    if ptr.is_null() {
        return None;
    }
    let len = usize::try_from(len).ok()?;
    if len == 0 {
        return Some(&[]);
    }
    // SAFETY: non-null and length checked above, validity is the caller's contract
    Some(unsafe { slice::from_raw_parts(ptr, len) })
}
