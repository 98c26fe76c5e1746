//! Platform error descriptions

use std::ffi::CStr;

/// Textual description of an OS error number, as `strerror(3)` renders it
pub fn describe(errno: i32) -> String {
    let mut buf = [0 as libc::c_char; 128];
    // SAFETY: buf is valid for buf.len() bytes; the XSI strerror_r always
    // NUL-terminates on success.
    let rc = unsafe { libc::strerror_r(errno, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        return format!("Unknown error {errno}");
    }
    // SAFETY: NUL-terminated by strerror_r above.
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

/// The calling thread's current errno
pub fn last_errno() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Description of the calling thread's current errno
pub fn describe_last() -> String {
    describe(last_errno())
}
