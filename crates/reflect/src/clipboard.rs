use arboard::Clipboard;
use reflect_common::{ReflectError, Result};

/// Copy text to the system clipboard.
///
/// On Linux, clipboard contents persist only while the application is running
/// unless a clipboard manager takes ownership.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| ReflectError::clipboard(format!("Failed to access system clipboard: {}", e)))?;
    clipboard
        .set_text(text)
        .map_err(|e| ReflectError::clipboard(format!("Failed to copy text to clipboard: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_reports_clipboard_errors() {
        // Headless CI has no clipboard; either outcome is fine as long as failures are typed.
        if let Err(err) = copy_to_clipboard("reflection") {
            assert!(matches!(err, ReflectError::Clipboard(_)));
        }
    }
}
