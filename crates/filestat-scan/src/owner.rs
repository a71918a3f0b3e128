//! Owner and group name resolution.
//!
//! Thin safe wrappers over the reentrant passwd/group lookups. A missing
//! uid or gid resolves to `None`; the caller decides how to report it.

use std::ffi::CStr;
use std::os::raw::c_char;

/// Resolve a uid to its user name. `None` when the directory service has
/// no entry for it.
pub fn user_name(uid: u32) -> Option<String> {
    let mut buf = vec![0u8; initial_buf_len(libc::_SC_GETPW_R_SIZE_MAX)];
    loop {
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                &mut pwd,
                buf.as_mut_ptr() as *mut c_char,
                buf.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            return None;
        }
        // result points at pwd, whose strings live in buf.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

/// Resolve a gid to its group name. `None` when the directory service has
/// no entry for it.
pub fn group_name(gid: u32) -> Option<String> {
    let mut buf = vec![0u8; initial_buf_len(libc::_SC_GETGR_R_SIZE_MAX)];
    loop {
        let mut grp: libc::group = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::group = std::ptr::null_mut();
        let rc = unsafe {
            libc::getgrgid_r(
                gid,
                &mut grp,
                buf.as_mut_ptr() as *mut c_char,
                buf.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            return None;
        }
        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

/// Buffer size hint from sysconf, with a sane floor when unavailable.
fn initial_buf_len(key: libc::c_int) -> usize {
    let hint = unsafe { libc::sysconf(key) };
    if hint > 0 { hint as usize } else { 1024 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_resolves() {
        let uid = unsafe { libc::getuid() };
        let name = user_name(uid).unwrap();
        assert!(!name.is_empty());
    }

    #[test]
    fn test_current_group_resolves() {
        let gid = unsafe { libc::getgid() };
        let name = group_name(gid).unwrap();
        assert!(!name.is_empty());
    }

    #[test]
    fn test_unknown_uid_is_none() {
        // Nobody allocates uids this high.
        assert_eq!(user_name(u32::MAX - 3), None);
    }
}
