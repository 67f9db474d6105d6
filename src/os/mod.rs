//! Operating system abstraction layer.
//!
//! Platform-specific implementations are selected at compile time. Each
//! submodule exposes the same `sys_random` function, so the entropy layer
//! above stays portable.
//!
//! Every backend reports failure as
//! [`NaclError::EntropyUnavailable`](crate::error::NaclError::EntropyUnavailable).
//! A buffer is never handed back partially filled and reported as
//! success.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod unsupported;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) use unsupported::*;
