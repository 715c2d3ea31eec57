use bevy::prelude::*;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::config::GardenConfig;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// PUBLIC TYPES
// ═══════════════════════════════════════════════════════════════════════

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no saved garden for user '{0}'")]
    NotFound(String),

    #[error("{0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, SaveError>;

/// On-disk form of a garden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenSaveFile {
    pub version: u32,
    pub saved_at: i64,
    pub garden: Garden,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Sent to persist the current garden.
#[derive(Event, Debug, Clone, Default)]
pub struct SaveRequestEvent;

/// Sent by SavePlugin after a save completes (success or failure).
#[derive(Event, Debug, Clone)]
pub struct SaveCompleteEvent {
    pub success: bool,
    pub error_message: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════
// RESOURCES
// ═══════════════════════════════════════════════════════════════════════

/// Whose garden to load on startup, and when they registered. Inserted by the
/// host (CLI, tests) before the first update.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveUser(pub Option<UserProfile>);

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveUser>()
            .add_event::<SaveRequestEvent>()
            .add_event::<SaveCompleteEvent>()
            // Config is read in OnEnter(Loading) too; the garden needs its save_dir.
            .add_systems(
                OnEnter(AppState::Loading),
                load_active_garden.after(crate::config::load_config),
            )
            .add_systems(Update, finish_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                (autosave_on_unlock, handle_save_request)
                    .chain()
                    .after(crate::garden::checkin::handle_mood_check_in)
                    .run_if(in_state(AppState::Ready)),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// STORAGE HELPERS
// ═══════════════════════════════════════════════════════════════════════

/// File name for a user's garden. Anything outside `[A-Za-z0-9_-]` becomes
/// `_` so ids can't escape the save directory.
pub fn save_file_name(user_id: &str) -> String {
    let safe: String = user_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("garden_{safe}.json")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn garden_path(save_dir: &Path, user_id: &str) -> PathBuf {
    save_dir.join(save_file_name(user_id))
}

fn encode(garden: &Garden) -> Result<String> {
    let file = GardenSaveFile {
        version: SAVE_VERSION,
        saved_at: chrono::Utc::now().timestamp(),
        garden: garden.clone(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

fn decode(json: &str, user_id: &str) -> Result<Garden> {
    let file: GardenSaveFile = serde_json::from_str(json)?;
    // Version check; migrations hook in here once the format changes
    if file.version != SAVE_VERSION {
        warn!(
            "[Save] Garden for '{}' has version {} but current version is {}. Attempting to load anyway.",
            user_id, file.version, SAVE_VERSION
        );
    }
    Ok(file.garden)
}

/// Owner of a garden that may be written. A garden whose save could not be
/// read is refused so the original file survives.
fn writable_owner(garden: &Garden) -> Result<&str> {
    if let Some(reason) = &garden.load_error {
        return Err(SaveError::Storage(format!(
            "refusing to overwrite an unreadable save ({reason})"
        )));
    }
    garden
        .profile
        .as_ref()
        .map(|p| p.user_id.as_str())
        .ok_or_else(|| SaveError::Storage("garden has no owner".into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_garden(save_dir: &Path, garden: &Garden) -> Result<()> {
    let user_id = writable_owner(garden)?;
    fs::create_dir_all(save_dir)?;

    let json = encode(garden)?;
    let path = garden_path(save_dir, user_id);
    // Write to a temp file first, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, &path)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_garden(save_dir: &Path, user_id: &str) -> Result<Garden> {
    let path = garden_path(save_dir, user_id);
    if !path.exists() {
        return Err(SaveError::NotFound(user_id.to_string()));
    }
    let json = fs::read_to_string(&path)?;
    decode(&json, user_id)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| SaveError::Storage("localStorage unavailable".into()))
}

#[cfg(target_arch = "wasm32")]
fn storage_key(user_id: &str) -> String {
    format!("kirakira:{}", save_file_name(user_id))
}

#[cfg(target_arch = "wasm32")]
pub fn write_garden(_save_dir: &std::path::Path, garden: &Garden) -> Result<()> {
    let user_id = writable_owner(garden)?;
    let json = encode(garden)?;
    local_storage()?
        .set_item(&storage_key(user_id), &json)
        .map_err(|_| SaveError::Storage("localStorage write rejected".into()))
}

#[cfg(target_arch = "wasm32")]
pub fn read_garden(_save_dir: &std::path::Path, user_id: &str) -> Result<Garden> {
    let json = local_storage()?
        .get_item(&storage_key(user_id))
        .map_err(|_| SaveError::Storage("localStorage read rejected".into()))?
        .ok_or_else(|| SaveError::NotFound(user_id.to_string()))?;
    decode(&json, user_id)
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Loads the active user's garden, or starts an empty one for a new user.
fn load_active_garden(
    active: Res<ActiveUser>,
    config: Res<GardenConfig>,
    mut garden: ResMut<Garden>,
) {
    let Some(profile) = active.0.clone() else {
        info!("[Save] No active user; garden stays empty");
        return;
    };

    match read_garden(&config.save_dir, &profile.user_id) {
        Ok(loaded) => {
            info!(
                "[Save] Loaded garden for '{}' ({} elements)",
                profile.user_id,
                loaded.elements.len()
            );
            *garden = loaded;
            // The host's registration date is authoritative.
            garden.profile = Some(profile);
        }
        Err(SaveError::NotFound(_)) => {
            info!("[Save] Starting a new garden for '{}'", profile.user_id);
            *garden = Garden::new(profile.user_id, profile.registered_at);
        }
        Err(e) => {
            error!(
                "[Save] Could not load garden for '{}': {}. Check-ins are disabled until the save is repaired.",
                profile.user_id, e
            );
            let mut unreadable = Garden::new(profile.user_id, profile.registered_at);
            unreadable.load_error = Some(e.to_string());
            *garden = unreadable;
        }
    }
}

fn finish_loading(mut next_state: ResMut<NextState<AppState>>) {
    info!("[Save] Garden ready. Accepting check-ins.");
    next_state.set(AppState::Ready);
}

/// Every unlock is persisted immediately so the next check-in sees it.
fn autosave_on_unlock(
    mut unlocked: EventReader<ElementUnlockedEvent>,
    mut save_writer: EventWriter<SaveRequestEvent>,
) {
    for ev in unlocked.read() {
        info!("[Save] Autosaving after unlocking {}", ev.element.id);
        save_writer.send(SaveRequestEvent);
    }
}

fn handle_save_request(
    mut requests: EventReader<SaveRequestEvent>,
    mut complete: EventWriter<SaveCompleteEvent>,
    garden: Res<Garden>,
    config: Res<GardenConfig>,
) {
    // Several requests in one frame collapse into one write.
    if requests.read().count() == 0 {
        return;
    }

    match write_garden(&config.save_dir, &garden) {
        Ok(()) => {
            info!("[Save] Garden saved ({} elements).", garden.elements.len());
            complete.send(SaveCompleteEvent {
                success: true,
                error_message: None,
            });
        }
        Err(e) => {
            warn!("[Save] Save FAILED: {}", e);
            complete.send(SaveCompleteEvent {
                success: false,
                error_message: Some(e.to_string()),
            });
        }
    }
}
