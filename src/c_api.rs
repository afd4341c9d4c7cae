// C ABI for hosting a session from the chat UI process.
// Handles are opaque boxed sessions; entry points catch panics and treat null
// pointers as no-ops.
use crate::{AutocompleteConfig, AutocompleteSession};
use std::ffi::{c_char, c_void, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::ptr;

unsafe fn get_session_mut<'a>(handle: *mut c_void) -> Option<&'a mut AutocompleteSession> {
    (handle as *mut AutocompleteSession).as_mut()
}

unsafe fn get_session<'a>(handle: *const c_void) -> Option<&'a AutocompleteSession> {
    (handle as *const AutocompleteSession).as_ref()
}

unsafe fn str_arg<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    // Interior NULs cannot cross the boundary; send an empty string instead.
    CString::new(s).unwrap_or_default().into_raw()
}

/// Opens a session backed by the dictionary at `path`, or at the default
/// location when `path` is null. Returns null if initialization panicked.
///
/// # Safety
/// `path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn chat_autocomplete_open(path: *const c_char) -> *mut c_void {
    let dictionary_path = str_arg(path).map(PathBuf::from);
    let result = catch_unwind(move || {
        let config = AutocompleteConfig { dictionary_path, ..Default::default() };
        let session = AutocompleteSession::from_file_or_new(&config);
        Box::into_raw(Box::new(session)) as *mut c_void
    });
    result.unwrap_or_else(|_| {
        tracing::error!("panic while opening autocomplete session");
        ptr::null_mut()
    })
}

/// Saves the dictionary and frees the session.
///
/// # Safety
/// `handle` must be null or come from [`chat_autocomplete_open`], and must not
/// be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn chat_autocomplete_close(handle: *mut c_void) {
    if handle.is_null() {
        return;
    }
    let session = Box::from_raw(handle as *mut AutocompleteSession);
    match session.save_dictionary() {
        Ok(()) => tracing::debug!("dictionary saved on close"),
        Err(e) => tracing::error!("failed to save dictionary: {}", e),
    }
}

/// Ghost suffix for the current input. Always returns a string that must be
/// released with [`chat_autocomplete_free_string`].
///
/// # Safety
/// `handle` must be null or a live session; `text` null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn chat_autocomplete_ghost(handle: *mut c_void, text: *const c_char) -> *mut c_char {
    let text = str_arg(text).unwrap_or("");
    let ghost = catch_unwind(AssertUnwindSafe(|| {
        get_session_mut(handle)
            .map(|session| session.append_suggestion(text))
            .unwrap_or_default()
    }));
    into_c_string(ghost.unwrap_or_else(|_| {
        tracing::error!("panic in chat_autocomplete_ghost");
        String::new()
    }))
}

/// Up to `max` completions for the current input as a JSON array of strings.
///
/// # Safety
/// Same as [`chat_autocomplete_ghost`].
#[no_mangle]
pub unsafe extern "C" fn chat_autocomplete_completions(
    handle: *const c_void,
    text: *const c_char,
    max: u32,
) -> *mut c_char {
    let text = str_arg(text).unwrap_or("");
    let result = catch_unwind(AssertUnwindSafe(|| {
        let words = get_session(handle)
            .map(|session| session.completion_list(text, max as usize))
            .unwrap_or_default();
        serde_json::to_string(&words).unwrap_or_else(|_| "[]".to_string())
    }));
    into_c_string(result.unwrap_or_else(|_| {
        tracing::error!("panic in chat_autocomplete_completions");
        "[]".to_string()
    }))
}

/// Learns every word of a submitted message. Returns how many were stored.
///
/// # Safety
/// Same as [`chat_autocomplete_ghost`].
#[no_mangle]
pub unsafe extern "C" fn chat_autocomplete_learn(handle: *mut c_void, text: *const c_char) -> u32 {
    let Some(text) = str_arg(text) else { return 0 };
    catch_unwind(AssertUnwindSafe(|| {
        get_session_mut(handle).map_or(0, |session| session.learn_input(text) as u32)
    }))
    .unwrap_or(0)
}

/// Returns 0 on success, -1 if the dictionary could not be written.
///
/// # Safety
/// `handle` must be null or a live session.
#[no_mangle]
pub unsafe extern "C" fn chat_autocomplete_save(handle: *const c_void) -> i32 {
    let Some(session) = get_session(handle) else { return -1 };
    match catch_unwind(AssertUnwindSafe(|| session.save_dictionary())) {
        Ok(Ok(())) => 0,
        Ok(Err(e)) => {
            tracing::error!("failed to save dictionary: {}", e);
            -1
        }
        Err(_) => -1,
    }
}

/// # Safety
/// `s` must be null or a string returned by this library.
#[no_mangle]
pub unsafe extern "C" fn chat_autocomplete_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}
