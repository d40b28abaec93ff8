//! Colored stderr logging for the command-line tool.

use std::{
	fmt::Display,
	io::Write,
	sync::atomic::{AtomicBool, Ordering},
};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
	Info = 1,
	Warn = 2,
	Error = 3,
}

impl Display for Level {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Info => "INFO",
			Self::Warn => "WARN",
			Self::Error => "ERROR",
		};

		f.pad(name)
	}
}

/// Drops `Info` messages when set.
pub static QUIET: AtomicBool = AtomicBool::new(false);

fn color_of(level: Level) -> ColorSpec {
	let mut spec = ColorSpec::new();

	match level {
		Level::Info => spec.set_fg(Some(Color::Cyan)),
		Level::Warn => spec.set_fg(Some(Color::Yellow)).set_bold(true),
		Level::Error => spec.set_fg(Some(Color::Red)).set_bold(true),
	};

	spec
}

/// Use the `info!`, `warn!` and `error!` macros instead.
#[doc(hidden)]
pub fn log(level: Level, message: &str) {
	if level == Level::Info && QUIET.load(Ordering::Relaxed) {
		return;
	}

	let mut stderr = StandardStream::stderr(ColorChoice::Auto);

	// Nothing sensible to do if stderr itself is gone.
	let _ = stderr.set_color(&color_of(level));
	let _ = write!(stderr, "[{level:5}]");
	let _ = stderr.reset();
	let _ = writeln!(stderr, " {message}");
}

#[macro_export]
macro_rules! info {
	($($arg:tt)*) => {
		$crate::log::log($crate::log::Level::Info, &format!($($arg)*))
	};
}

#[macro_export]
macro_rules! warn {
	($($arg:tt)*) => {
		$crate::log::log($crate::log::Level::Warn, &format!($($arg)*))
	};
}

#[macro_export]
macro_rules! error {
	($($arg:tt)*) => {
		$crate::log::log($crate::log::Level::Error, &format!($($arg)*))
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_ordering() {
		assert!(Level::Info < Level::Warn);
		assert!(Level::Warn < Level::Error);
	}

	#[test]
	fn level_display() {
		assert_eq!(format!("{:5}", Level::Info), "INFO ");
		assert_eq!(Level::Error.to_string(), "ERROR");
	}
}
