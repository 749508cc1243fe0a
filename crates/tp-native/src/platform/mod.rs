//! Per-OS library opening.
//!
//! Each platform exposes the same two functions: open a library file found in
//! a candidate directory, and open a bare filename through the system's
//! default search.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::{open_default, open_in_dir};

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::{open_default, open_in_dir};

#[cfg(windows)]
pub const LIBRARY_FILE: &str = "CoolProp.dll";

#[cfg(target_os = "macos")]
pub const LIBRARY_FILE: &str = "libCoolProp.dylib";

#[cfg(all(unix, not(target_os = "macos")))]
pub const LIBRARY_FILE: &str = "libCoolProp.so";
