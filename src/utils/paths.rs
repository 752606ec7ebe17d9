use std::path::Path;

/// Formats a path with ~ substitution for the home directory
///
/// The substitution is a plain string prefix replacement of the first occurrence
/// at the start of the path.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use pi_chat_fzf::format_path_with_tilde;
///
/// // Returns "~/Documents" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(Path::new("/Users/alice/Documents"));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

/// Internal helper for path formatting with an explicit home (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    let path_str = path.to_string_lossy();
    let home_str = home.map(|h| h.to_string_lossy());

    if let Some(home) = home_str.as_deref().filter(|h| !h.is_empty()) {
        if let Some(rest) = path_str.strip_prefix(home) {
            return format!("~{}", rest);
        }
    }

    path_str.into_owned()
}
