use anyhow::Result;

fn main() -> Result<()> {
    figures_cli::main_entry()
}
