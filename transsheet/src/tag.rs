//! Reversible tagging of control characters for spreadsheet/CSV cells.
//!
//! Spreadsheet tools silently drop raw TAB characters, so TAB is always
//! tagged. CR/LF tagging is optional and chosen by the caller.
//!
//! Text that already contains one of the literal tags (`<CRLF>`, `<CR>`,
//! `<LF>`, `<TAB>`) does not round-trip: the tag is decoded to the control
//! character on the way back.

pub const TAG_CRLF: &str = "<CRLF>";
pub const TAG_CR: &str = "<CR>";
pub const TAG_LF: &str = "<LF>";
pub const TAG_TAB: &str = "<TAB>";

/// Tags CR/LF sequences, then TAB.
pub fn escape(text: &str) -> String {
    escape_tab(&escape_controls(text))
}

/// Exact inverse of [`escape`].
pub fn unescape(text: &str) -> String {
    unescape_tab(&unescape_controls(text))
}

/// Tags `\r\n`, `\r` and `\n`, in that order.
pub fn escape_controls(text: &str) -> String {
    text.replace("\r\n", TAG_CRLF)
        .replace('\r', TAG_CR)
        .replace('\n', TAG_LF)
}

/// Restores `<CRLF>`, `<CR>` and `<LF>`, in that order.
pub fn unescape_controls(text: &str) -> String {
    text.replace(TAG_CRLF, "\r\n")
        .replace(TAG_CR, "\r")
        .replace(TAG_LF, "\n")
}

pub fn escape_tab(text: &str) -> String {
    text.replace('\t', TAG_TAB)
}

pub fn unescape_tab(text: &str) -> String {
    text.replace(TAG_TAB, "\t")
}

/// Prepares text for a sheet cell. TAB is tagged regardless of `tag_controls`.
pub fn encode_cell(text: &str, tag_controls: bool) -> String {
    if tag_controls {
        escape(text)
    } else {
        escape_tab(text)
    }
}

/// Reads text back from a sheet cell. `<TAB>` is decoded regardless of `tag_controls`.
pub fn decode_cell(text: &str, tag_controls: bool) -> String {
    if tag_controls {
        unescape(text)
    } else {
        unescape_tab(text)
    }
}
