use anyhow::Result;
use studio_core::ops::builtin_names;

pub fn run() -> Result<()> {
    for name in builtin_names() {
        println!("{name}");
    }
    Ok(())
}
