//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Keeps the conversation history in memory for the lifetime of the session.
//! Nothing is persisted — loading and storing threads is the caller's
//! concern, not the loop's.

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use candor_application::{NoProgress, RunChatInput, RunChatUseCase};
use candor_domain::{ModelConfig, Turn};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: RunChatUseCase,
    models: ModelConfig,
    history: Vec<Turn>,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RunChatUseCase, models: ModelConfig) -> Self {
        Self {
            use_case,
            models,
            history: Vec::new(),
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Line-editor history only — conversation turns stay in memory
        let history_path = dirs::data_dir().map(|p| p.join("candor").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("Candor - Chat Mode");
        println!();
        println!(
            "Writer: {}  Checker: {}",
            self.models.writer, self.models.checker
        );
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /models   - Show current models");
        println!("  /clear    - Forget the conversation so far");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /models          - Show current models");
                println!("  /clear           - Forget the conversation so far");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/models" => {
                println!();
                println!("Writer:  {}", self.models.writer);
                println!("Checker: {}", self.models.checker);
                println!();
                false
            }
            "/clear" => {
                self.history.clear();
                println!("Conversation cleared.");
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&mut self, message: &str) {
        println!();

        let input = RunChatInput::new(message).with_history(self.history.clone());

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute_with_progress(input, &NoProgress).await
        };

        match result {
            Ok(outcome) => {
                println!("{}", ConsoleFormatter::format_text(&outcome));

                // Fallback turns are shown but not remembered — the next
                // attempt should not build on a canned apology
                if !outcome.is_fallback {
                    self.history.push(Turn::user(message));
                    self.history.push(Turn::assistant(outcome.response));
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
