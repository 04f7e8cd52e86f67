//! Renders every T junction of `track-t.scad` into `track-t-stl/`.

use track_render::{logging, run, tables::t_junction};

fn main() -> anyhow::Result<()> {
    logging::init()?;
    run(&t_junction::sweep())?;
    Ok(())
}
