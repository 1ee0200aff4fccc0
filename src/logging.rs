/* ************************************************************************ **
** This file is part of linspan, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::fmt;
use ::log::{Level, LevelFilter};

/// Builder-style setup for logging
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    verbosity: Verbosity,
}

impl GlobalLogger {
    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: i32) -> &mut Self {
        self.verbosity = match level > 0 {
            true => Verbosity::Loud,
            false => Verbosity::Default,
        };
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

impl GlobalLogger {
    fn crate_level(&self) -> LevelFilter {
        match self.verbosity {
            Verbosity::Default => LevelFilter::Debug,
            Verbosity::Loud => LevelFilter::Trace,
        }
    }

    /// Install the logger, writing to stderr.
    ///
    /// Fails if some logger (this one or another) was already installed.
    pub fn apply(&mut self) -> Result<(), ::failure::Error> {
        use ::std::time::Instant;

        let start = Instant::now();
        ::fern::Dispatch::new()
            .format(move |out, message, record| {
                let t = start.elapsed();
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    record.target(),
                    ColorizedLevel(record.level()),
                    message))
            })
            .level(LevelFilter::Info)
            .level_for("linspan", self.crate_level())
            .level_for("linspan_linalg", self.crate_level())
            .chain(::std::io::stderr())
            .apply()?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ::ansi_term::Colour::Red.bold(),
            Level::Warn  => ::ansi_term::Colour::Red.normal(),
            Level::Info  => ::ansi_term::Colour::Cyan.bold(),
            Level::Debug => ::ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ::ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}
