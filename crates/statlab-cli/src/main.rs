mod command;
mod report;
mod task;

fn main() -> anyhow::Result<()> {
    command::run()
}
