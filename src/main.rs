use pibench::app;

fn main() -> anyhow::Result<()> {
    if let Err(e) = app::run() {
        #[expect(clippy::print_stderr, reason = "fatal errors must reach the console")]
        {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
    Ok(())
}
