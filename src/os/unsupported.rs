use crate::error::{NaclError, Result};

/// No secure entropy backend exists for this target.
pub(crate) fn sys_random(_buf: &mut [u8]) -> Result<()> {
    Err(NaclError::EntropyUnavailable {
        reason: "no secure entropy source for this target",
    })
}
