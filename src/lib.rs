//! The nagiosstatus crate collects the messages and performance data of a nagios check and
//! renders them into the single status line and exit code nagios expects.
//!
//! ```rust
//! # use nagiosstatus::{Bound, StatusAggregator};
//! let mut status = StatusAggregator::new();
//! status.check_threshold("load", 5.0, 4.0, Bound::Disabled);
//! status.add_ok("disk mounted");
//!
//! let (exit_code, text) = status.render();
//! assert_eq!(exit_code, 2);
//! assert_eq!(text, "WARNING - warning(load=5.000000) ok(disk mounted) | load=5.000000");
//! ```

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::process;

use tracing::debug;

mod format;
mod helper;
mod runner;
mod state;
mod threshold;

pub use crate::helper::safe_run;
pub use crate::runner::{Runner, RunnerResult};
pub use crate::state::{ParseStateError, State};
pub use crate::threshold::{classify, Bound, ParseBoundError};

use crate::format::{format_fixed, perf_entry};

/// Collects the messages of one check run, sorted by severity, together with its perfdata.
///
/// Messages keep their insertion order within a severity. Nothing is ever removed, so one
/// aggregator should be used per check run.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusAggregator {
    ok: Vec<String>,
    warning: Vec<String>,
    critical: Vec<String>,
    unknown: Vec<String>,
    perfdata: Vec<String>,
    show_perfdata: bool,
}

impl StatusAggregator {
    /// Creates an empty aggregator which shows perfdata.
    pub fn new() -> Self {
        StatusAggregator {
            ok: Vec::new(),
            warning: Vec::new(),
            critical: Vec::new(),
            unknown: Vec::new(),
            perfdata: Vec::new(),
            show_perfdata: true,
        }
    }

    /// Adds a message to the ok list.
    pub fn add_ok(&mut self, message: impl Into<String>) {
        self.ok.push(message.into())
    }

    /// Adds a message to the warning list.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warning.push(message.into())
    }

    /// Adds a message to the critical list.
    pub fn add_critical(&mut self, message: impl Into<String>) {
        self.critical.push(message.into())
    }

    /// Adds a message to the unknown list.
    pub fn add_unknown(&mut self, message: impl Into<String>) {
        self.unknown.push(message.into())
    }

    /// Adds a message to the list belonging to `state`.
    pub fn add(&mut self, state: State, message: impl Into<String>) {
        match state {
            State::Ok => self.add_ok(message),
            State::Warning => self.add_warning(message),
            State::Critical => self.add_critical(message),
            State::Unknown => self.add_unknown(message),
        }
    }

    /// Adds a `key=value` perfdata entry. Neither part is validated; a space in either of them
    /// will break the perfdata section for nagios.
    pub fn add_perfdata(&mut self, key: &str, value: impl Display) {
        self.perfdata.push(format!("{key}={value}"))
    }

    /// Classifies `value` against the thresholds and records it as `name=value` with six
    /// decimals, both as a message and as perfdata.
    ///
    /// A value triggers a bound only if it is strictly greater. Pass [Bound::Disabled], `None`
    /// or NaN to disable a bound.
    pub fn check_threshold(
        &mut self,
        name: &str,
        value: f64,
        warning: impl Into<Bound>,
        critical: impl Into<Bound>,
    ) {
        let message = perf_entry(name, value);
        self.check(name, value, warning.into(), critical.into(), message)
    }

    /// Like [Self::check_threshold] but checks `value / max * 100` instead. The message shows
    /// the percentage with two decimals (`name=12.50%`) while the perfdata entry keeps the
    /// six decimal format.
    ///
    /// A `max` of zero is not special cased and yields an infinite or NaN percentage.
    pub fn check_percentage_threshold(
        &mut self,
        name: &str,
        value: f64,
        max: f64,
        warning: impl Into<Bound>,
        critical: impl Into<Bound>,
    ) {
        let percentage = value / max * 100.0;
        let message = format!("{}={}%", name, format_fixed(percentage, 2));
        self.check(name, percentage, warning.into(), critical.into(), message)
    }

    fn check(&mut self, name: &str, value: f64, warning: Bound, critical: Bound, message: String) {
        let state = classify(value, warning, critical);
        debug!(metric = name, value, ?warning, ?critical, %state, "classified threshold");

        self.add(state, message);
        self.perfdata.push(perf_entry(name, value));
    }

    /// Returns the ok messages in insertion order.
    pub fn ok(&self) -> &[String] {
        &self.ok
    }

    /// Returns the warning messages in insertion order.
    pub fn warning(&self) -> &[String] {
        &self.warning
    }

    /// Returns the critical messages in insertion order.
    pub fn critical(&self) -> &[String] {
        &self.critical
    }

    /// Returns the unknown messages in insertion order.
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    /// Returns the perfdata entries as `key=value` strings.
    pub fn perfdata(&self) -> &[String] {
        &self.perfdata
    }

    /// Whether the perfdata section is appended to the output.
    pub fn show_perfdata(&self) -> bool {
        self.show_perfdata
    }

    /// Controls whether the perfdata section is appended to the output.
    pub fn set_show_perfdata(&mut self, show_perfdata: bool) {
        self.show_perfdata = show_perfdata
    }

    /// Builder variant of [Self::set_show_perfdata].
    pub fn with_show_perfdata(mut self, show_perfdata: bool) -> Self {
        self.set_show_perfdata(show_perfdata);
        self
    }

    /// The overall state: critical if any critical message exists, otherwise warning, then
    /// unknown, otherwise ok.
    pub fn state(&self) -> State {
        if !self.critical.is_empty() {
            State::Critical
        } else if !self.warning.is_empty() {
            State::Warning
        } else if !self.unknown.is_empty() {
            State::Unknown
        } else {
            State::Ok
        }
    }

    /// Returns the exit code together with the status line.
    pub fn render(&self) -> (i32, String) {
        (self.exit_code(), self.to_nagios_string())
    }

    /// Returns the exit code of [Self::state].
    pub fn exit_code(&self) -> i32 {
        self.state().exit_code()
    }

    /// Builds the status line, e.g. `CRITICAL - critical(a, b) ok(c) | a=1.000000`.
    ///
    /// Every non-empty severity is listed, in the order critical, warning, unknown, ok, even if
    /// the label only names the most severe one.
    pub fn to_nagios_string(&self) -> String {
        let mut s = format!("{} -", self.state());

        let segments = [
            ("critical", &self.critical),
            ("warning", &self.warning),
            ("unknown", &self.unknown),
            ("ok", &self.ok),
        ];
        let mut empty = true;
        for (label, messages) in segments {
            if !messages.is_empty() {
                s.push_str(&format!(" {}({})", label, messages.join(", ")));
                empty = false;
            }
        }
        if empty {
            s.push_str(" Everything is ok");
        }

        if self.show_perfdata && !self.perfdata.is_empty() {
            s.push_str(" | ");
            s.push_str(&self.perfdata.join(" "));
        }

        s
    }

    /// Writes the status line followed by a newline and returns the exit code to use.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<i32> {
        let (exit_code, text) = self.render();
        writeln!(out, "{text}")?;
        Ok(exit_code)
    }

    /// Prints the status line to stdout and exits the process with the matching exit code.
    ///
    /// A failing stdout does not change the exit code.
    pub fn print_and_exit(&self) -> ! {
        let exit_code = self.emit(&mut io::stdout());
        debug!(exit_code, "exiting");
        process::exit(exit_code);
    }

    fn emit<W: Write>(&self, out: &mut W) -> i32 {
        self.write_to(out).unwrap_or_else(|err| {
            debug!(%err, "could not write status line");
            self.exit_code()
        })
    }
}

impl Default for StatusAggregator {
    fn default() -> Self {
        StatusAggregator::new()
    }
}

impl Display for StatusAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_nagios_string())
    }
}
