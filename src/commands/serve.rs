use crate::db::db::Db;
use crate::libs::bridge::Bridge;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use std::io::{self, BufRead, Write};

pub fn cmd() -> Result<()> {
    let bridge = Bridge::new(Db::new()?)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&bridge, stdin.lock(), stdout.lock())
}

/// Answer every non-blank line of `input` until it ends.
pub fn run<R: BufRead, W: Write>(bridge: &Bridge, input: R, mut output: W) -> Result<()> {
    msg_info!(Message::BridgeStarted);
    let mut handled = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(output, "{}", bridge.handle_line(&line)?)?;
        output.flush()?;
        handled += 1;
    }
    msg_info!(Message::BridgeStopped(handled));
    Ok(())
}
