//! REPL (Read-Eval-Print Loop) for asking questions interactively

use crate::interrupt::{health_interruptible, submit_interruptible};
use crate::view::console_view::ConsoleView;
use colored::Colorize;
use ragask_application::{AnswerService, QueryController};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::sync::Arc;
use tracing::debug;

/// Interactive prompt: every line is one submit.
pub struct AskRepl {
    controller: Arc<QueryController>,
    view: Arc<ConsoleView>,
    service: Arc<dyn AnswerService>,
    service_url: String,
}

impl AskRepl {
    pub fn new(
        controller: Arc<QueryController>,
        view: Arc<ConsoleView>,
        service: Arc<dyn AnswerService>,
        service_url: impl Into<String>,
    ) -> Self {
        Self {
            controller,
            view,
            service,
            service_url: service_url.into(),
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("ask".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.view.set_question(line);
                    let outcome = submit_interruptible(&self.controller).await;
                    debug!("Submit finished: {:?}", outcome);
                    println!();
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(_) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "ragask - interactive mode".cyan().bold());
        println!("Service: {}", self.service_url);
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /health           - Check the answer service");
        println!("  /quit, /exit, /q  - Exit");
        println!();
        println!("Anything else is sent as a question. Ctrl-C cancels a pending request.");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
                false
            }
            "/health" => {
                match health_interruptible(self.service.as_ref()).await {
                    Ok(health) if health.is_ok() => {
                        println!("{} {}", "healthy".green(), self.service_url);
                    }
                    Ok(health) => {
                        println!("{} status: {}", "unhealthy".yellow(), health.status);
                    }
                    Err(e) => {
                        println!("{} {}", "unreachable".red(), e);
                    }
                }
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }
}
