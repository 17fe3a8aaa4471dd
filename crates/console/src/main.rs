use std::io;

use anyhow::Context;
use kitbag_console::Session;

fn main() -> anyhow::Result<()> {
    kitbag_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    session.run().context("inventory session aborted")?;
    Ok(())
}
