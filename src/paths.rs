use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    } else if path == "~" {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home);
        }
    }
    PathBuf::from(path)
}

/// The daemon runs with its own working directory, so relative paths handed to
/// `file` are resolved against ours before they leave the process.
pub fn absolutize(path: &str, cwd: &Path) -> String {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return path.to_string();
    }
    cwd.join(candidate).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_tilde_replaces_home() {
        let home = std::env::var("HOME").unwrap();
        let result = expand_tilde("~/gpaste/config.toml");
        assert_eq!(result, PathBuf::from(&home).join("gpaste/config.toml"));
    }

    #[test]
    fn expand_tilde_bare_tilde() {
        let home = std::env::var("HOME").unwrap();
        assert_eq!(expand_tilde("~"), PathBuf::from(&home));
    }

    #[test]
    fn expand_tilde_leaves_absolute_unchanged() {
        assert_eq!(expand_tilde("/etc/gpaste.toml"), PathBuf::from("/etc/gpaste.toml"));
    }

    #[test]
    fn absolutize_keeps_absolute_path() {
        let cwd = PathBuf::from("/home/user");
        assert_eq!(absolutize("/tmp/notes.txt", &cwd), "/tmp/notes.txt");
    }

    #[test]
    fn absolutize_joins_relative_path_with_cwd() {
        let cwd = PathBuf::from("/home/user");
        assert_eq!(absolutize("notes.txt", &cwd), "/home/user/notes.txt");
        assert_eq!(absolutize("docs/a.md", &cwd), "/home/user/docs/a.md");
    }
}
