//! Renders the straights and curves of `track-standard.scad`.

use track_render::{logging, run, tables::standard};

fn main() -> anyhow::Result<()> {
    logging::init()?;
    run(&standard::sweep())?;
    Ok(())
}
