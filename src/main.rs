mod app;
mod canvas;
mod config;
mod domain;
mod render;
mod repository;
mod tasks;
mod views;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    app::run()
}
