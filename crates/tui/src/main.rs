mod renderer;

use std::path::PathBuf;

use anyhow::Result;
use folio_core::Content;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let content = match args.get(1) {
        Some(arg) => {
            let path = PathBuf::from(arg);
            let data = std::fs::read(&path)?;
            Content::from_json(&data)?
        }
        None => Content::builtin(),
    };

    renderer::render_tui(&content)?;
    Ok(())
}
