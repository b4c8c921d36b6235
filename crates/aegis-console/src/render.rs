//! Text rendering and input collection.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crossterm::style::Stylize;

use aegis_core::config::ConsoleConfig;

/// Speaker tag shown before bot output.
const BOT_TAG: &str = "aegis";
/// Speaker tag shown before the input cursor.
const USER_TAG: &str = "you";

/// Console renderer with optional color and typed-text effect.
///
/// All display operations are best-effort: a failed write never aborts the
/// conversation.
pub struct Console {
    typing_delay: Duration,
    use_color: bool,
}

impl Console {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            typing_delay: Duration::from_millis(config.typing_delay_ms),
            use_color: config.use_color,
        }
    }

    /// A plain console with no color and no typing effect.
    pub fn plain() -> Self {
        Self {
            typing_delay: Duration::ZERO,
            use_color: false,
        }
    }

    /// Display bot speech, character by character when the typing effect
    /// is enabled.
    pub fn say(&self, text: &str) {
        let tag = if self.use_color {
            format!("{}> ", BOT_TAG.cyan().bold())
        } else {
            format!("{BOT_TAG}> ")
        };
        for line in text.lines() {
            let mut stdout = io::stdout().lock();
            let _ = write!(stdout, "{tag}");
            if self.typing_delay.is_zero() {
                let _ = writeln!(stdout, "{line}");
            } else {
                for c in line.chars() {
                    let _ = write!(stdout, "{c}");
                    let _ = stdout.flush();
                    std::thread::sleep(self.typing_delay);
                }
                let _ = writeln!(stdout);
            }
        }
    }

    /// Display a one-line warning.
    pub fn warn(&self, text: &str) {
        if self.use_color {
            eprintln!("{}", format!("warning: {text}").yellow());
        } else {
            eprintln!("warning: {text}");
        }
    }

    /// Display an error line.
    pub fn error(&self, text: &str) {
        if self.use_color {
            eprintln!("{}", format!("error: {text}").red().bold());
        } else {
            eprintln!("error: {text}");
        }
    }

    /// Show the input prompt and read one line.
    ///
    /// Returns `Ok(None)` on end of input (ctrl-d).
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let tag = if self.use_color {
            format!("{}> ", USER_TAG.green().bold())
        } else {
            format!("{USER_TAG}> ")
        };
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{tag}")?;
            stdout.flush()?;
        }

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_respects_config() {
        let config = ConsoleConfig {
            typing_delay_ms: 25,
            use_color: false,
            play_greeting: true,
        };
        let console = Console::new(&config);
        assert_eq!(console.typing_delay(), Duration::from_millis(25));
        assert!(!console.use_color());
    }

    #[test]
    fn test_plain_console() {
        let console = Console::plain();
        assert!(console.typing_delay().is_zero());
        assert!(!console.use_color());
    }

    #[test]
    fn test_say_does_not_panic_on_multiline() {
        // Output goes to stdout; this just exercises the path.
        Console::plain().say("line one\nline two");
    }
}
