mod guard;
mod header;

pub use guard::RequireSession;
pub use header::Header;

/// Blocking browser confirm dialog. Destructive actions (logout,
/// delete) only proceed on explicit confirm.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
