//! Browser console logging

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` output to the browser console.
///
/// Call once, before rendering.
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_span_events(FmtSpan::NONE)
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(fmt_layer).init();
}
