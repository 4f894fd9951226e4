use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Target used by [`crate::terminal::print`] for undecorated output lines.
pub const PRINT_TARGET: &str = "cidrfind::print";

pub struct CidrfindFormatter;

impl<S, N> FormatEvent<S, N> for CidrfindFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut visitor = RawMessage(None);
            event.record(&mut visitor);
            if let Some(msg) = visitor.0 {
                return writeln!(writer, "{msg}");
            }
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

/// Installs the global subscriber. Everything is written to stderr so stdout
/// only ever carries match lines.
///
/// `RUST_LOG` takes precedence over the `-q`/`-v` flags.
pub fn init_logging(quiet: u8, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(quiet, verbose).as_str()));

    tracing_subscriber::fmt()
        .event_format(CidrfindFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_level(quiet: u8, verbose: u8) -> Level {
    match (quiet, verbose) {
        (_, v) if v >= 2 => Level::TRACE,
        (_, 1) => Level::DEBUG,
        (q, _) if q >= 2 => Level::WARN,
        _ => Level::INFO,
    }
}
