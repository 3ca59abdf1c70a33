//! RFC 5545 TEXT value escaping.

/// Escape `text` for a TEXT property value.
///
/// Order matters: backslashes are doubled first so the escapes introduced
/// by the later steps are not themselves escaped again.
///
/// | Input      | Output |
/// |------------|--------|
/// | `\`        | `\\`   |
/// | newline    | `\n`   |
/// | `,`        | `\,`   |
/// | `;`        | `\;`   |
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}
