mod app;
mod graph;
mod render;
mod ui;
mod util;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::app::HoloModelPlugin;
use crate::util::{config, datasets};

fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

fn main() {
    init_tracing();

    let cfg = config::load_or_default();
    let domains = datasets::catalog(cfg.datasets_path.as_deref());

    App::new()
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: ui::header::TITLE.into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(HoloModelPlugin {
            config: cfg,
            domains,
        })
        .run();
}
