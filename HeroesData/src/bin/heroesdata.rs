fn main() -> anyhow::Result<()> {
    heroesdata::cli::run_cli()
}
