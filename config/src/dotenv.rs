//! Parse a project `.env` into a key-value map; applied to the environment in `lib.rs`.

use std::collections::HashMap;
use std::path::Path;

/// Splits one `KEY=VALUE` line. Returns `None` for blanks, `#` comments, lines
/// without `=`, and empty keys. Keys and values are trimmed; values lose one
/// layer of surrounding quotes.
fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim())))
}

/// Strips one layer of surrounding quotes. Double-quoted values support the
/// `\"` escape; single-quoted values are taken literally.
fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return value[1..value.len() - 1].replace("\\\"", "\"");
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_string();
    }
    value.to_string()
}

/// Loads `.env` from `override_dir` (or the current directory) into a map.
/// A missing file is not an error; it yields an empty map.
pub fn load_env_map(override_dir: Option<&Path>) -> std::io::Result<HashMap<String, String>> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => match std::env::current_dir() {
            Ok(d) => d,
            Err(_) => return Ok(HashMap::new()),
        },
    };
    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(content.lines().filter_map(parse_line).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_pairs() {
        let m: HashMap<_, _> = "FOO=bar\nBAZ=quux\n".lines().filter_map(parse_line).collect();
        assert_eq!(m.get("FOO"), Some(&"bar".to_string()));
        assert_eq!(m.get("BAZ"), Some(&"quux".to_string()));
    }

    #[test]
    fn skips_comments_blanks_and_bare_words() {
        let m: HashMap<_, _> = "\n# comment\nNOT_A_PAIR\nKEY=val\n  \n"
            .lines()
            .filter_map(parse_line)
            .collect();
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("KEY"), Some(&"val".to_string()));
    }

    #[test]
    fn strips_double_quotes_with_escapes() {
        let (_, v) = parse_line(r#"KEY="say \"hi\"""#).unwrap();
        assert_eq!(v, "say \"hi\"");
    }

    #[test]
    fn strips_single_quotes_literally() {
        let (_, v) = parse_line("KEY='single quoted'").unwrap();
        assert_eq!(v, "single quoted");
    }

    #[test]
    fn empty_value_is_kept() {
        let (_, v) = parse_line("KEY=").unwrap();
        assert_eq!(v, "");
    }

    #[test]
    fn empty_key_is_skipped() {
        assert!(parse_line("=value_only").is_none());
    }

    #[test]
    fn load_env_map_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let m = load_env_map(Some(dir.path())).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn load_env_map_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "A=1\nB=2\n").unwrap();
        let m = load_env_map(Some(dir.path())).unwrap();
        assert_eq!(m.get("A"), Some(&"1".to_string()));
        assert_eq!(m.get("B"), Some(&"2".to_string()));
    }
}
