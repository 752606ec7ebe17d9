pub mod environment;
pub mod paths;
pub mod terminal;
pub mod text;

pub use environment::{AGENT_DIR_ENV, get_sessions_dir};
pub use paths::format_path_with_tilde;
pub use terminal::strip_ansi_codes;
pub use text::{flatten_whitespace, truncate_chars, truncate_with_ellipsis};
