//! Captures the rustc version at build time for the status page.

use anyhow::Result;
use vergen::{Emitter, RustcBuilder};

fn main() -> Result<()> {
    let rustc = RustcBuilder::all_rustc()?;
    Emitter::default().add_instructions(&rustc)?.emit()
}
