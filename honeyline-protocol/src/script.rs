//! Text emitted by the fake terminal
//!
//! These strings are reproduced byte for byte on every attempt. Scanners
//! and scripts that fingerprint the lure match on them, so changing any of
//! them changes the device's observable behavior.

/// Line terminator appended by `write_line`
pub const LINE_TERMINATOR: &str = "\r\n";

/// Banner title, padded with blank lines to scroll the caller's screen
pub const BANNER_TITLE: &str =
    "\n\n\n\n\n\n\n\n\n\n\n\n\n\nFDIC COLUMBIA SAVINGS AND LOAN CC PROC TELEHUB\n\n";

/// Legal warning shown under the title
pub const BANNER_WARNING: &str = "UNAUTHORIZED USE PROHIBITED BY LAW P.L. 81-797, 64 STAT. 783\n\n";

/// Login prompt (no terminator: the reply continues the same line)
pub const LOGIN_PROMPT: &str = "\nLOGIN: ";

/// Password prompt (no terminator)
pub const PASSWORD_PROMPT: &str = "PASSWORD: ";

/// Rejection sent after every password, whatever was typed
pub const REJECTION: &str = "0919-0FF: INVALID CVV ENTRY / 0 OF 395 RECORDS RETURNED   ?REENTER\n";

/// Banner lines in the order they are emitted, each followed by
/// [`LINE_TERMINATOR`]
pub const BANNER: [&str; 2] = [BANNER_TITLE, BANNER_WARNING];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_have_no_terminator() {
        assert!(!LOGIN_PROMPT.ends_with('\n'));
        assert!(!PASSWORD_PROMPT.ends_with('\n'));
        assert!(LOGIN_PROMPT.ends_with("LOGIN: "));
        assert_eq!(PASSWORD_PROMPT, "PASSWORD: ");
    }

    #[test]
    fn test_banner_padding() {
        let leading = BANNER_TITLE.bytes().take_while(|&b| b == b'\n').count();
        assert_eq!(leading, 14);
        assert!(BANNER_TITLE.trim().starts_with("FDIC COLUMBIA"));
        assert!(BANNER_WARNING.ends_with("\n\n"));
        assert_eq!(BANNER, [BANNER_TITLE, BANNER_WARNING]);
    }

    #[test]
    fn test_rejection_is_error_code_style() {
        assert!(REJECTION.starts_with("0919-0FF: "));
        assert!(REJECTION.ends_with("?REENTER\n"));
    }

    #[test]
    fn test_script_is_ascii() {
        for text in [BANNER_TITLE, BANNER_WARNING, LOGIN_PROMPT, PASSWORD_PROMPT, REJECTION] {
            assert!(text.is_ascii());
        }
    }
}
