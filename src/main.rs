// SPDX-License-Identifier: MIT
//
// tint-demo: prints a color chart and a few cursor tricks through the
// process-wide formatter.
//
// Run it in a terminal to see colors; pipe it (`tint-demo | cat`) and only
// the plain text comes out. Set `RUST_LOG=tint=debug` to see the capability
// decision on stderr.
//
// Usage:
//   cargo run

use std::io::{self, Write};

use tint::{Color, Format};

/// Cell text for the chart: short enough to fit 9 columns in 80.
const SWATCH: &str = " Aa ";

/// Width of the row labels in the chart.
const LABEL_WIDTH: usize = 8;

/// Print every foreground/background pair, one row per background.
fn color_chart(f: &impl Format, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{:LABEL_WIDTH$}", "")?;
    for fore in Color::ALL {
        write!(out, "{:^width$}", &fore.to_string()[..3], width = SWATCH.len())?;
    }
    writeln!(out)?;

    for back in Color::ALL {
        write!(out, "{:<LABEL_WIDTH$}", back.to_string())?;
        for fore in Color::ALL {
            f.set_fore_and_background(fore, back);
            write!(out, "{SWATCH}")?;
        }
        f.reset_color();
        writeln!(out)?;
    }
    out.flush()
}

/// Overwrite a status line in place, the way a progress indicator would.
fn status_line(f: &impl Format, out: &mut impl Write) -> io::Result<()> {
    write!(out, "status: ")?;
    out.flush()?;
    f.cursor_save();
    f.set_foreground(Color::YELLOW);
    write!(out, "working...")?;
    out.flush()?;
    f.cursor_restore();
    f.clear_to_end_of_line();
    f.set_foreground(Color::GREEN);
    write!(out, "done")?;
    out.flush()?;
    f.reset_color();
    writeln!(out)
}

/// Write two lines, then hop back up and rewrite the first.
fn rewrite_above(f: &impl Format, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "first line (to be replaced)")?;
    writeln!(out, "second line")?;
    out.flush()?;
    f.cursor_up(2);
    f.clear_line();
    f.set_background(Color::BLUE);
    write!(out, "first line, rewritten")?;
    out.flush()?;
    f.reset_color();
    f.cursor_down(2);
    write!(out, "\r")?;
    out.flush()
}

fn run(f: &impl Format, out: &mut impl Write) -> io::Result<()> {
    color_chart(f, out)?;
    writeln!(out)?;
    status_line(f, out)?;
    rewrite_above(f, out)
}

fn main() -> io::Result<()> {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let f = tint::global::init();
    tracing::debug!(emitting = f.is_emitting(), "formatter bound");

    let mode = if f.is_emitting() { "terminal" } else { "plain" };
    tint::print(format_args!("tint-demo ({mode} output)\n\n"));
    run(f, &mut io::stdout())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
