//! Terminal renderer for ride channels
//!
//! Prints the ride header once, then appends newly arrived messages with
//! viewer-relative styling: own messages highlighted, driver messages in
//! a distinct color, everyone else plain.

use std::io::{self, Write};

use unidriver_core::{Classification, RenderFrame, RenderSink};

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

pub struct TerminalRenderer<W: Write> {
    out: W,
    printed: usize,
    header_shown: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            printed: 0,
            header_shown: false,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn print_header(&mut self, frame: &RenderFrame) {
        let ride = &frame.ride;
        let _ = writeln!(
            self.out,
            "{} · {} às {}",
            ride.driver_name,
            ride.format_departure_date(),
            ride.format_departure_time()
        );
        let _ = writeln!(
            self.out,
            "{} · {} {} · R$ {:.2}",
            ride.route(),
            ride.seats,
            if ride.seats == 1 { "lugar" } else { "lugares" },
            ride.price
        );
        let _ = writeln!(self.out);
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn render(&mut self, frame: &RenderFrame) {
        if !self.header_shown {
            self.print_header(frame);
            self.header_shown = true;
        }

        for entry in frame.entries.iter().skip(self.printed) {
            let message = &entry.message;
            let (color, label) = match entry.classification {
                Classification::Own => (GREEN, "Você".to_string()),
                Classification::Driver => {
                    (YELLOW, format!("{} (Motorista)", message.sender_name))
                }
                Classification::Other => (RESET, message.sender_name.clone()),
            };
            let _ = writeln!(
                self.out,
                "{}[{}]{} {}{}{}: {}",
                DIM,
                message.format_timestamp(),
                RESET,
                color,
                label,
                RESET,
                message.body
            );
        }
        self.printed = frame.entries.len();
    }

    fn scroll_to_latest(&mut self) {
        // The terminal tails its own output; flushing brings the newest
        // line into view.
        let _ = self.out.flush();
    }
}
