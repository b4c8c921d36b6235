//! Aegis application binary - composition root.
//!
//! Ties the crates together into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize the knowledge base and the flat-file memory store
//! 3. Render the startup banner and greeting
//! 4. Capture and validate the user's name
//! 5. Run the blocking conversation loop until the user exits
//!
//! Exit code 0 on user-initiated exit; non-zero on a fatal startup failure.

mod cli;

use clap::Parser;

use aegis_chat::{ChatError, ConversationEngine, TurnOutcome};
use aegis_console::{banner, Console};
use aegis_core::AegisConfig;
use aegis_knowledge::KnowledgeBase;
use aegis_memory::MemoryStore;

use cli::CliArgs;

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = run(args) {
        tracing::error!(error = %e, "Fatal startup failure");
        eprintln!("critical error: {e}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> aegis_core::Result<()> {
    // Config.
    let config_path = args.resolve_config_path();
    let mut config = AegisConfig::load_or_default(&config_path);
    if args.no_typing {
        config.console.typing_delay_ms = 0;
    }
    if args.no_color {
        config.console.use_color = false;
    }

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Aegis v{}", env!("CARGO_PKG_VERSION"));

    // Components.
    let memory_file = args.resolve_memory_file(&config.general.memory_file);
    let memory = MemoryStore::open(&memory_file);
    tracing::info!(path = %memory_file.display(), persistent = memory.is_persistent(), "Memory store opened");

    let kb = KnowledgeBase::new();
    tracing::info!(topics = kb.topics().len(), "Knowledge base ready");

    let console = Console::new(&config.console);
    let mut engine = ConversationEngine::new(kb, memory, config.chat.clone());

    // Greeting (cosmetic; never blocks startup).
    if !args.quiet {
        banner::greet(&console, config.console.play_greeting);
    }

    if !engine.memory().is_persistent() {
        console.warn("your memory file couldn't be read; I won't remember this session");
    }

    // Name capture: identity-referencing responses need a validated name.
    console.say("Hi! I'm Aegis. What's your name?");
    loop {
        let Some(line) = console.read_line()? else {
            // End of input before we even got a name.
            console.say("Gone already? Stay safe out there!");
            return Ok(());
        };
        match engine.set_name(&line) {
            Ok(name) => {
                tracing::debug!(name = %name, "Name accepted");
                break;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Name rejected");
                console.say("Letters and spaces only, please. What should I call you?");
            }
        }
    }
    console.say(&engine.greeting());

    // Conversation loop. Errors are handled at the turn boundary: log,
    // tell the user, and keep reading input.
    let mut persistence_warned = !engine.memory().is_persistent();
    loop {
        let Some(line) = console.read_line()? else {
            console.say(&format!(
                "Stay safe out there, {}. Bye!",
                engine.memory().name().unwrap_or("friend")
            ));
            break;
        };

        match engine.process(&line) {
            Ok(TurnOutcome::Continue(replies)) => {
                for reply in replies {
                    console.say(&reply);
                }
            }
            Ok(TurnOutcome::Exit(farewell)) => {
                console.say(&farewell);
                break;
            }
            Err(ChatError::InputTooLong(max)) => {
                console.say(&format!(
                    "That's a lot of text! Keep it under {max} characters for me."
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Turn failed; restarting input loop");
                console.error(&e.to_string());
                console.say("Something went wrong on my end. Let's try that again.");
            }
        }

        if !persistence_warned && !engine.memory().is_persistent() {
            console.warn("couldn't save your memory file; continuing without persistence");
            persistence_warned = true;
        }
    }

    tracing::info!("Session ended");
    Ok(())
}
