use std::path::{Path, PathBuf};

/// Keeps `[A-Za-z0-9_-]`, replacing anything else with `_`. Case is preserved
/// because player names are case-sensitive in the output file names.
pub fn sanitize_file_stem(value: &str) -> String {
    let sanitized = value
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect::<String>();

    if sanitized.is_empty() {
        "skin".to_string()
    } else {
        sanitized
    }
}

pub fn skin_path(output_dir: &Path, player: &str) -> PathBuf {
    output_dir.join(format!("{}.png", sanitize_file_stem(player)))
}

pub fn preview_path(output_dir: &Path, player: &str) -> PathBuf {
    output_dir.join(format!("preview_{}.png", sanitize_file_stem(player)))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{preview_path, sanitize_file_stem, skin_path};

    #[test]
    fn output_names_follow_player_name() {
        let dir = Path::new("out");
        assert_eq!(skin_path(dir, "Alex"), dir.join("Alex.png"));
        assert_eq!(preview_path(dir, "Alex"), dir.join("preview_Alex.png"));
    }

    #[test]
    fn unsafe_characters_are_replaced() {
        assert_eq!(sanitize_file_stem("../evil"), "___evil");
        assert_eq!(sanitize_file_stem("  "), "skin");
    }
}
