/// Copy `s` (the rendered Friday list) to the system clipboard.
///
/// Thin wrapper around the `arboard` crate. Clipboard initialization may fail
/// on headless machines, so callers treat errors as non-fatal and only warn.
///
/// Returns `Ok(())` on success or `Err(String)` describing the failure.
pub fn copy_to_clipboard(s: &str) -> Result<(), String> {
    let mut ctx = arboard::Clipboard::new().map_err(|e| format!("clipboard init: {}", e))?;
    ctx.set_text(s.to_owned())
        .map_err(|e| format!("clipboard set: {}", e))
}
