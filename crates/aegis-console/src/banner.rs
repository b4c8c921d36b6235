//! Startup banner and greeting effects.

use std::io::{self, Write};

use crossterm::style::Stylize;
use tracing::debug;

use crate::render::Console;

/// ASCII-art banner shown once at startup.
const BANNER: &str = r#"
      _    _____ ____ ___ ____
     / \  | ____/ ___|_ _/ ___|
    / _ \ |  _|| |  _ | |\___ \
   / ___ \| |__| |_| || | ___) |
  /_/   \_\_____\____|___|____/
"#;

const TAGLINE: &str = "your cybersecurity awareness buddy";

/// Render the banner and ring the terminal bell as an audible greeting.
///
/// Entirely cosmetic: any failure here is logged and ignored so the
/// conversation loop always starts.
pub fn greet(console: &Console, play_bell: bool) {
    let mut stdout = io::stdout().lock();
    let result = if console.use_color() {
        writeln!(stdout, "{}", BANNER.cyan()).and_then(|_| {
            writeln!(stdout, "  {}", TAGLINE.dark_grey())
        })
    } else {
        writeln!(stdout, "{BANNER}").and_then(|_| writeln!(stdout, "  {TAGLINE}"))
    };
    if let Err(e) = result {
        debug!(error = %e, "Banner render failed; continuing without it");
    }

    if play_bell {
        // BEL is the closest a terminal gets to an audio greeting.
        let _ = write!(stdout, "\x07");
        let _ = stdout.flush();
    }
    let _ = writeln!(stdout);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_nonempty_ascii() {
        assert!(!BANNER.trim().is_empty());
        assert!(BANNER.is_ascii());
    }

    #[test]
    fn test_greet_does_not_panic() {
        greet(&Console::plain(), false);
    }
}
