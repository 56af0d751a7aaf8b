mod command;
mod tui;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
