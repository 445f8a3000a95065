use crate::error::{Result, SigError};
use std::io::Write;
use std::process::{Command, Stdio};

/// What the clipboard ended up holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardFormat {
    /// Rich HTML: pastes as a rendered signature.
    Html,
    /// The markup as plain text: must be pasted into an HTML source view.
    PlainText,
}

/// An external clipboard program and how to call it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
    pub format: ClipboardFormat,
}

const fn tool(
    program: &'static str,
    args: &'static [&'static str],
    format: ClipboardFormat,
) -> ClipboardTool {
    ClipboardTool {
        program,
        args,
        format,
    }
}

/// Tools to try, in order, for this platform. HTML-capable tools come first.
/// - macOS: pbcopy
/// - Linux: wl-copy, xclip, then xsel
/// - Windows: clip.exe
pub fn candidates() -> &'static [ClipboardTool] {
    #[cfg(target_os = "macos")]
    {
        const TOOLS: &[ClipboardTool] = &[tool("pbcopy", &[], ClipboardFormat::PlainText)];
        TOOLS
    }

    #[cfg(target_os = "linux")]
    {
        const TOOLS: &[ClipboardTool] = &[
            tool("wl-copy", &["--type", "text/html"], ClipboardFormat::Html),
            tool(
                "xclip",
                &["-selection", "clipboard", "-t", "text/html"],
                ClipboardFormat::Html,
            ),
            tool("xsel", &["--clipboard", "--input"], ClipboardFormat::PlainText),
        ];
        TOOLS
    }

    #[cfg(target_os = "windows")]
    {
        const TOOLS: &[ClipboardTool] = &[tool("clip", &[], ClipboardFormat::PlainText)];
        TOOLS
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        &[]
    }
}

/// Copies an HTML fragment to the system clipboard with the first tool that works.
pub fn copy_html(html: &str) -> Result<ClipboardFormat> {
    copy_with(candidates(), html)
}

/// Tries each tool in turn; the error of the last attempt is reported when all fail.
pub fn copy_with(tools: &[ClipboardTool], text: &str) -> Result<ClipboardFormat> {
    let mut last_error = None;

    for candidate in tools {
        match run_tool(candidate, text) {
            Ok(()) => {
                tracing::debug!(program = candidate.program, "copied to clipboard");
                return Ok(candidate.format);
            }
            Err(e) => {
                tracing::debug!(program = candidate.program, error = %e, "clipboard tool failed");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        SigError::Clipboard("Clipboard not supported on this platform".to_string())
    }))
}

fn run_tool(candidate: &ClipboardTool, text: &str) -> Result<()> {
    let program = candidate.program;

    let mut child = Command::new(program)
        .args(candidate.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| SigError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| SigError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| SigError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SigError::Clipboard(format!("{} exited with error", program)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tools_is_an_error() {
        let err = copy_with(&[], "<table></table>").unwrap_err();
        assert!(matches!(err, SigError::Clipboard(_)));
    }

    #[test]
    fn test_missing_programs_fall_through_to_error() {
        let tools = [
            tool("sigcraft-no-such-tool-a", &[], ClipboardFormat::Html),
            tool("sigcraft-no-such-tool-b", &[], ClipboardFormat::PlainText),
        ];
        let err = copy_with(&tools, "x").unwrap_err();
        assert!(err.to_string().contains("sigcraft-no-such-tool-b"));
    }

    #[cfg(unix)]
    #[test]
    fn test_first_working_tool_wins() {
        let tools = [
            tool("sigcraft-no-such-tool", &[], ClipboardFormat::Html),
            tool("cat", &[], ClipboardFormat::PlainText),
        ];
        assert_eq!(copy_with(&tools, "x").unwrap(), ClipboardFormat::PlainText);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_prefers_html_tools() {
        let tools = candidates();
        assert_eq!(tools[0].format, ClipboardFormat::Html);
        assert_eq!(tools.last().unwrap().program, "xsel");
    }
}
