//! Stencil CLI binary: serve the web tool or generate a component from the command line.
//!
//! Subcommands: `serve` (HTTP server with the browser UI), `template`
//! (list/show the built-in templates). With no subcommand, generates code for
//! the prompt given via `-m/--message` or positional args.

mod logging;

use clap::{Parser, Subcommand};
use cli::{GenerateBackend, LocalBackend, RemoteBackend, ViewState};
use std::sync::Arc;

const DEFAULT_REMOTE_URL: &str = "http://127.0.0.1:3000";

#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(about = "Stencil — describe a UI component, get React/TypeScript source")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Component description (or pass as positional arguments)
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Positional args: component description when -m/--message is not used
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,

    /// Use local execution (default: remote)
    #[arg(long)]
    local: bool,

    /// Remote server URL (default: http://127.0.0.1:3000 or STENCIL_REMOTE_URL)
    #[arg(long, value_name = "URL")]
    remote: Option<String>,

    /// Output JSON ({"code": ...}) instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run the HTTP server (browser UI + /api/generate)
    Serve(ServeArgs),
    /// List or show the built-in component templates
    Template(TemplateArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address (default 127.0.0.1:3000 or STENCIL_ADDR)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
struct TemplateArgs {
    #[command(subcommand)]
    sub: TemplateCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum TemplateCommand {
    /// List the template categories
    List,
    /// Print the template for one category (button, card, modal, form, default)
    Show(ShowTemplateArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ShowTemplateArgs {
    /// Category name
    name: String,
}

fn resolve_remote_url(args: &Args) -> String {
    if let Some(ref u) = args.remote {
        return u.clone();
    }
    std::env::var("STENCIL_REMOTE_URL").unwrap_or_else(|_| DEFAULT_REMOTE_URL.to_string())
}

/// Caps the prompt at [`stencil::PROMPT_MAX_LEN`] chars, mirroring the
/// browser textarea's maxlength. Uses character boundaries, so multi-byte
/// input cannot split a code point.
fn cap_prompt(s: &str) -> String {
    s.chars().take(stencil::PROMPT_MAX_LEN).collect()
}

fn make_backend(args: &Args) -> Result<Arc<dyn GenerateBackend>, cli::RunError> {
    if args.local {
        Ok(Arc::new(LocalBackend::from_env()?))
    } else {
        Ok(Arc::new(RemoteBackend::new(resolve_remote_url(args))))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_and_apply("stencil", None::<&std::path::Path>).ok();
    logging::init()?;

    let args = Args::parse();

    match &args.cmd {
        Some(Command::Serve(sa)) => {
            if let Err(e) = serve::run_serve(sa.addr.as_deref()).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
            return Ok(());
        }
        Some(Command::Template(ta)) => {
            match &ta.sub {
                TemplateCommand::List => {
                    for category in stencil::Category::ALL {
                        println!("{}", category);
                    }
                }
                TemplateCommand::Show(show) => match show.name.parse::<stencil::Category>() {
                    Ok(category) => println!("{}", stencil::template(category)),
                    Err(e) => {
                        eprintln!("stencil: {}", e);
                        std::process::exit(1);
                    }
                },
            }
            return Ok(());
        }
        None => {}
    }

    let message = args.message.clone().or_else(|| {
        if args.rest.is_empty() {
            None
        } else {
            Some(args.rest.join(" "))
        }
    });
    let Some(message) = message else {
        eprintln!("stencil: provide a component description via -m/--message or positional args");
        std::process::exit(1);
    };
    if message.trim().is_empty() {
        eprintln!("stencil: component description is empty");
        std::process::exit(1);
    }

    let backend = match make_backend(&args) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("stencil: {}", e);
            std::process::exit(1);
        }
    };

    let prompt = cap_prompt(&message);
    let view = ViewState::default().submit();
    let view = match backend.generate(&prompt).await {
        Ok(code) => view.complete(code),
        Err(e) => view.fail(e.to_string()),
    };

    match view {
        ViewState::Success(code) => {
            if args.json {
                println!("{}", serde_json::json!({ "code": code }));
            } else {
                println!("{}", code);
            }
        }
        ViewState::Error(message) => {
            eprintln!("error: {}", message);
            std::process::exit(1);
        }
        ViewState::Idle | ViewState::Loading => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::cap_prompt;
    use stencil::PROMPT_MAX_LEN;

    /// Short prompts pass through unchanged.
    #[test]
    fn cap_prompt_unchanged_when_short() {
        assert_eq!(cap_prompt("a modal dialog"), "a modal dialog");
    }

    /// Prompts at the cap pass through unchanged.
    #[test]
    fn cap_prompt_unchanged_at_exact_cap() {
        let s = "a".repeat(PROMPT_MAX_LEN);
        assert_eq!(cap_prompt(&s), s);
    }

    /// Longer prompts are cut at the cap, like the textarea's maxlength.
    #[test]
    fn cap_prompt_cuts_at_cap() {
        let s = "a".repeat(PROMPT_MAX_LEN + 100);
        assert_eq!(cap_prompt(&s).chars().count(), PROMPT_MAX_LEN);
    }

    /// Multi-byte chars are handled on character boundaries.
    #[test]
    fn cap_prompt_utf8_safe() {
        let s = "ボタン ".repeat(200);
        let capped = cap_prompt(&s);
        assert_eq!(capped.chars().count(), PROMPT_MAX_LEN);
        assert!(s.starts_with(&capped));
    }
}
