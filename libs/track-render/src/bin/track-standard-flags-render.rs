//! Renders the flag-schema revision of `track-standard.scad`.

use track_render::{logging, run, tables::standard_flags};

fn main() -> anyhow::Result<()> {
    logging::init()?;
    run(&standard_flags::sweep())?;
    Ok(())
}
