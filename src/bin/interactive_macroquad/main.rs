use clap::Parser;
use macroquad::prelude::Conf;
use parabolic_viz::core::playback::PlaybackConfig;

mod app;
mod constants;
mod controls;
mod gameplay;
mod hud;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(name = "interactive_macroquad")]
#[command(about = "Animated projectile launch with live parameter controls")]
struct Args {
    /// Ground launches only, without pause or single-step controls
    #[arg(long)]
    basic: bool,
}

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = if args.basic {
        PlaybackConfig::basic()
    } else {
        PlaybackConfig::full()
    };
    app::run(config).await;
}
