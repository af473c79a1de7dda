//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//! Everything is written to stderr; stdout is left to the caller's results.
//!
//! ## Log Levels
//!
//! - **WARN**: Searches that cannot end on their own
//! - **INFO**: Lifecycle events (solve start/end)
//! - **DEBUG**: One line per completed round
//! - **TRACE**: Rounds that ended on a repeated state

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "hillclimb=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints a one-line banner and sets up tracing. `RUST_LOG` replaces the
/// default `hillclimb=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = format!("hillclimb v{VERSION} - hill climbing with plateau moves");

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from hillclimb crates only
        if !metadata.target().starts_with("hillclimb") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    status: Option<String>,
    size: Option<u64>,
    seed: Option<u64>,
    round: Option<u64>,
    round_length: Option<u64>,
    rounds: Option<u64>,
    steps: Option<u64>,
    stuck_rounds: Option<u64>,
    heuristic: Option<u64>,
    duration_ms: Option<u64>,
    stuck: Option<bool>,
    solved: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s.trim_matches('"').to_string()),
            "status" => self.status = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = Some(value),
            "seed" => self.seed = Some(value),
            "round" => self.round = Some(value),
            "round_length" => self.round_length = Some(value),
            "rounds" => self.rounds = Some(value),
            "steps" => self.steps = Some(value),
            "stuck_rounds" => self.stuck_rounds = Some(value),
            "heuristic" => self.heuristic = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "stuck" => self.stuck = Some(value),
            "solved" => self.solved = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "round_end" => format_round_end(v),
        "stuck" => format_stuck(v, level),
        _ if level == Level::WARN => format_warning(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let size = v.size.unwrap_or(0);
    let seed = v.seed.unwrap_or(0);
    let round_length = v.round_length.unwrap_or(0);

    format!(
        "{} {} Solving │ {} queens │ {} moves/round │ seed {} │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        size.to_formatted_string(&Locale::en).bright_yellow(),
        round_length.to_formatted_string(&Locale::en).bright_yellow(),
        seed.bright_magenta(),
        format_heuristic(v.heuristic),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let solved = v.solved.unwrap_or(false);
    let status = v.status.as_deref().unwrap_or(if solved {
        "solved"
    } else {
        "terminated"
    });

    let status = if solved {
        status.to_uppercase().bright_green().bold().to_string()
    } else {
        status.to_uppercase().bright_red().bold().to_string()
    };

    format!(
        "{} {} Solving complete │ {} │ {} rounds │ {} steps │ {} stuck │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.rounds
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.stuck_rounds
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        format_heuristic(v.heuristic),
        status,
    )
}

fn format_round_end(v: &EventVisitor) -> String {
    let icon = if v.stuck.unwrap_or(false) {
        "◆".yellow().to_string()
    } else {
        "⚡".bright_cyan().to_string()
    };

    format!(
        "{} {} Round {:>10} │ {:>6} steps │ {}",
        format_elapsed(),
        icon,
        v.round
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en),
        format_heuristic(v.heuristic),
    )
}

fn format_stuck(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Round {:>10} stuck after {} steps",
        format_elapsed(),
        "✗".bright_red(),
        v.round
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en),
    )
}

fn format_warning(v: &EventVisitor) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };

    format!(
        "{} {} {}",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        message.yellow()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_heuristic(heuristic: Option<u64>) -> String {
    match heuristic {
        None => "N/A".white().to_string(),
        Some(0) => "0 conflicts".bright_green().to_string(),
        Some(1) => "1 conflict".bright_red().to_string(),
        Some(n) => format!("{} conflicts", n.to_formatted_string(&Locale::en))
            .bright_red()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_heuristic() {
        assert!(format_heuristic(Some(0)).contains("0 conflicts"));
        assert!(format_heuristic(Some(1)).contains("1 conflict"));
        assert!(format_heuristic(Some(1234)).contains("1,234 conflicts"));
        assert!(format_heuristic(None).contains("N/A"));
    }

    #[test]
    fn test_format_solve_end() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            status: Some("solved".to_string()),
            rounds: Some(12_345),
            steps: Some(7),
            heuristic: Some(0),
            solved: Some(true),
            ..EventVisitor::default()
        };

        let output = format_event(&visitor, Level::INFO);
        assert!(output.contains("Solving complete"));
        assert!(output.contains("12,345"));
        assert!(output.contains("SOLVED"));
    }

    #[test]
    fn test_stuck_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("stuck".to_string()),
            round: Some(3),
            ..EventVisitor::default()
        };

        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(format_event(&visitor, Level::TRACE).contains("stuck after"));
    }

    #[test]
    fn test_unknown_event_is_skipped() {
        let visitor = EventVisitor {
            message: Some("hello".to_string()),
            ..EventVisitor::default()
        };

        assert!(format_event(&visitor, Level::INFO).is_empty());
        assert!(format_event(&visitor, Level::WARN).contains("hello"));
    }
}
