use std::process::ExitCode;

fn main() -> ExitCode {
    match pi_chat_fzf::cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("pi-chat-fzf: {err:#}");
            ExitCode::FAILURE
        }
    }
}
