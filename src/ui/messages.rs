use crate::config::Config;
use crate::utils::colors::{BLUE, BOLD, CYAN, GREEN, GREY, RED, RESET, YELLOW, paint};
use std::fmt;
use std::io::{self, Write};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// All session output goes through a Console so the whole interaction can
/// be captured in tests (`Console<Vec<u8>>`) or sent to stdout.
pub struct Console<W: Write> {
    out: W,
    color: bool,
    separator: String,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, cfg: &Config) -> Self {
        Self {
            out,
            color: cfg.color,
            separator: cfg.separator(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line<T: fmt::Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(self.out, "{}", msg)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn tagged<T: fmt::Display>(&mut self, color: &str, icon: &str, msg: T) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}{}{} {}{}", color, BOLD, icon, RESET, msg)
        } else {
            writeln!(self.out, "{} {}", icon, msg)
        }
    }

    pub fn info<T: fmt::Display>(&mut self, msg: T) -> io::Result<()> {
        self.tagged(BLUE, ICON_INFO, msg)
    }

    pub fn success<T: fmt::Display>(&mut self, msg: T) -> io::Result<()> {
        self.tagged(GREEN, ICON_OK, msg)
    }

    pub fn warning<T: fmt::Display>(&mut self, msg: T) -> io::Result<()> {
        self.tagged(YELLOW, ICON_WARN, msg)
    }

    pub fn error<T: fmt::Display>(&mut self, msg: T) -> io::Result<()> {
        self.tagged(RED, ICON_ERR, msg)
    }

    /// Formatted section header
    pub fn header<T: fmt::Display>(&mut self, msg: T) -> io::Result<()> {
        let text = format!("====================== {}", msg);
        writeln!(self.out, "{}", paint(&text, BLUE, self.color))
    }

    /// `Label: value`, label highlighted
    pub fn field<T: fmt::Display>(&mut self, label: &str, value: T) -> io::Result<()> {
        let label = paint(&format!("{}:", label), CYAN, self.color);
        writeln!(self.out, "{} {}", label, value)
    }

    pub fn note<T: fmt::Display>(&mut self, msg: T) -> io::Result<()> {
        let text = msg.to_string();
        writeln!(self.out, "{}", paint(&text, GREY, self.color))
    }

    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.separator)
    }

    /// Print a prompt without a trailing newline and flush it.
    pub fn prompt(&mut self, msg: &str) -> io::Result<()> {
        write!(self.out, "{}", msg)?;
        self.out.flush()
    }
}
