use tablesmith_cli::TablesmithCli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    TablesmithCli::new().parse_and_run()
}
