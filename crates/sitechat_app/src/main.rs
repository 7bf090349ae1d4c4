mod config;
mod logging;
mod notify;
mod session;
mod shell;

fn main() -> anyhow::Result<()> {
    shell::run_app()
}
