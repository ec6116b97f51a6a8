//! Command handlers for the rechunk CLI.

pub mod batch;
pub mod info;
pub mod init;
pub mod split;

pub use batch::BatchCommand;
pub use info::InfoCommand;
pub use init::InitCommand;
pub use split::SplitCommand;

use rechunk_chunking::{config, ChunkerConfig};
use rechunk_core::{config::AppConfig, AppError, AppResult};

/// Resolve the chunker config: workspace chunker.yaml, then the option map
/// from the config file and CLI flags.
pub fn resolve_chunker_config(app: &AppConfig) -> AppResult<ChunkerConfig> {
    config::load_config(&app.workspace)?.with_options(&app.chunker_options)
}

/// Decode backslash escapes in a separator given on the command line.
///
/// Supports `\n`, `\r`, `\t`, `\\`, `\0` and `\u{XXXX}` / `\uXXXX`.
pub fn parse_separator(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('u') => out.push(parse_unicode_escape(&mut chars)?),
            Some(other) => return Err(format!("unknown escape '\\{}' in {:?}", other, raw)),
            None => return Err(format!("dangling '\\' at end of {:?}", raw)),
        }
    }

    Ok(out)
}

fn parse_unicode_escape(chars: &mut std::str::Chars<'_>) -> Result<char, String> {
    let rest = chars.as_str();
    let (hex, consumed) = if let Some(braced) = rest.strip_prefix('{') {
        let end = braced
            .find('}')
            .ok_or_else(|| "unterminated \\u{...} escape".to_string())?;
        (&braced[..end], end + 2)
    } else {
        let end = rest.char_indices().nth(4).map_or(rest.len(), |(i, _)| i);
        (&rest[..end], end)
    };

    let code = u32::from_str_radix(hex, 16)
        .map_err(|_| format!("invalid unicode escape '\\u{}'", hex))?;
    let c = char::from_u32(code).ok_or_else(|| format!("invalid code point U+{:X}", code))?;

    for _ in 0..rest[..consumed].chars().count() {
        chars.next();
    }
    Ok(c)
}

/// Serialize a value as pretty JSON.
pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separator_plain() {
        assert_eq!(parse_separator(". ").unwrap(), ". ");
        assert_eq!(parse_separator("").unwrap(), "");
    }

    #[test]
    fn test_parse_separator_escapes() {
        assert_eq!(parse_separator("\\n\\n").unwrap(), "\n\n");
        assert_eq!(parse_separator("\\t|\\r\\\\").unwrap(), "\t|\r\\");
    }

    #[test]
    fn test_parse_separator_unicode() {
        assert_eq!(parse_separator("\\u200b").unwrap(), "\u{200b}");
        assert_eq!(parse_separator("\\u{3002}x").unwrap(), "\u{3002}x");
        assert_eq!(parse_separator("\\uff0c!").unwrap(), "\u{ff0c}!");
    }

    #[test]
    fn test_parse_separator_errors() {
        assert!(parse_separator("\\q").is_err());
        assert!(parse_separator("abc\\").is_err());
        assert!(parse_separator("\\u{zz}").is_err());
        assert!(parse_separator("\\u{d800}").is_err());
    }

    #[test]
    fn test_resolve_chunker_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut app = AppConfig::default();
        app.workspace = temp.path().to_path_buf();
        app = app.with_overrides(None, None, false, false, Some(42), None);

        let chunker = resolve_chunker_config(&app).unwrap();
        assert_eq!(chunker.chunk_size, 42);
        assert_eq!(chunker.separators, config::default_separators());
    }

    #[test]
    fn test_resolve_rejects_zero_size() {
        let app = AppConfig::default().with_overrides(None, None, false, false, Some(0), None);
        assert!(matches!(
            resolve_chunker_config(&app),
            Err(AppError::Config(_))
        ));
    }
}
