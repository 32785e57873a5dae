use std::fmt;

/// Number of byte literals per line of a declaration.
pub const ELEMENTS_PER_LINE: usize = 16;

const DECL_INDENT: &str = "    ";
const LINE_INDENT: &str = "       ";

/// Text of one `constexpr uint8_t` array declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteArrayDeclaration {
    symbol: String,
    text: String,
}

impl ByteArrayDeclaration {
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ByteArrayDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders `bytes` as a byte array declaration named `symbol`.
///
/// ```text
///     constexpr uint8_t fooScript[] = {
///         0x03, 0x02, 0x23, 0x07, 0x00, 0x06, 0x01, 0x00, 0x00, 0x00, 0x0e, 0x00, 0x89, 0x00, 0x00, 0x00,
///         0x00, 0x00};
/// ```
///
/// An empty input yields `constexpr uint8_t fooScript[] = {};`.
pub fn serialize(bytes: &[u8], symbol: &str) -> ByteArrayDeclaration {
    if bytes.is_empty() {
        return ByteArrayDeclaration {
            symbol: symbol.into(),
            text: format!("{DECL_INDENT}constexpr uint8_t {symbol}[] = {{}};\n"),
        };
    }

    // Each element takes 6 characters plus the line overhead
    let lines = bytes.len().div_ceil(ELEMENTS_PER_LINE);
    let mut body = String::with_capacity(bytes.len() * 6 + lines * (LINE_INDENT.len() + 1));

    for (i, byte) in bytes.iter().enumerate() {
        if i % ELEMENTS_PER_LINE == 0 {
            body.push_str(LINE_INDENT);
        }
        body.push_str(&format!(" 0x{byte:02x},"));
        if i % ELEMENTS_PER_LINE == ELEMENTS_PER_LINE - 1 {
            body.push('\n');
        }
    }

    // The closing brace follows the last element directly
    let body = body.strip_suffix('\n').unwrap_or(&body);
    let body = body.strip_suffix(',').unwrap_or(body);

    ByteArrayDeclaration {
        symbol: symbol.into(),
        text: format!("{DECL_INDENT}constexpr uint8_t {symbol}[] = {{\n{body}}};\n"),
    }
}
