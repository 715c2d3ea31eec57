//! KiraKira library crate: the deterministic garden generator and the Bevy
//! plugins that drive daily mood check-ins.
//!
//! The binary crate (`main.rs`) is a headless check-in runner. This library
//! exposes the same modules so that `tests/` integration tests and other hosts
//! can use the generator directly or mount the plugins in their own app.

pub mod shared;
pub mod data;
pub mod garden;
pub mod config;
pub mod save;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

/// Everything a host needs besides its own schedule runner and logging.
pub struct KiraKiraPlugins;

impl Plugin for KiraKiraPlugins {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }
        app.init_state::<shared::AppState>()
            .add_plugins(config::ConfigPlugin)
            .add_plugins(garden::GardenPlugin)
            .add_plugins(save::SavePlugin);
    }
}
