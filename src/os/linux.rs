//! Linux entropy through the `getrandom(2)` system call.
//!
//! `getrandom` reads from the kernel pool and blocks only until the pool
//! has been initialized once after boot.

use std::io;

use libc::{EINTR, c_void, getrandom};

use crate::error::{NaclError, Result};

/// Fills `buf` with random bytes from the kernel.
///
/// Partial reads and `EINTR` are continued until the buffer is full. Any
/// other failure is returned as [`NaclError::EntropyUnavailable`].
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let remaining = &mut buf[filled..];
        let ret = unsafe { getrandom(remaining.as_mut_ptr() as *mut c_void, remaining.len(), 0) };

        if ret < 0 {
            if io::Error::last_os_error().raw_os_error() == Some(EINTR) {
                continue;
            }

            return Err(NaclError::EntropyUnavailable {
                reason: "getrandom() failed",
            });
        }

        filled += ret as usize;
    }

    Ok(())
}
