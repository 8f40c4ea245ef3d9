mod command;
mod play;
mod summary;
mod tui;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
