use std::ffi::CStr;

/// Human readable name of a signal number, e.g. "Interrupt" for SIGINT.
pub fn describe(signal: i32) -> String {
    // SAFETY: strsignal returns either null or a NUL-terminated string that
    // stays valid until the next strsignal call on this thread.
    let description = unsafe { libc::strsignal(signal) };
    if description.is_null() {
        return format!("signal {}", signal);
    }
    unsafe { CStr::from_ptr(description) }
        .to_string_lossy()
        .into_owned()
}
