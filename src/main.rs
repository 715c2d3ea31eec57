use bevy::log::LogPlugin;
use bevy::prelude::*;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use kirakira::config::ConfigPath;
use kirakira::save::ActiveUser;
use kirakira::shared::*;
use kirakira::KiraKiraPlugins;

/// Log today's mood and unlock today's garden element.
#[derive(Parser, Debug)]
#[command(name = "kirakira", version)]
struct Args {
    /// Stable user id; also names the save file.
    #[arg(long)]
    user_id: String,

    /// joy, calm, stress, sadness, anger or anxiety. Unknown values mean joy.
    #[arg(long, default_value = "joy")]
    mood: String,

    /// Registration day (YYYY-MM-DD).
    #[arg(long)]
    registered: NaiveDate,

    /// Check in as of this day instead of today (YYYY-MM-DD).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// The user owns the rare-elements pack.
    #[arg(long)]
    premium: bool,

    /// RON config file.
    #[arg(long, default_value = kirakira::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mood = Mood::parse_or_joy(&args.mood);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(KiraKiraPlugins)
        .insert_resource(ConfigPath(args.config.clone()))
        .insert_resource(ActiveUser(Some(UserProfile {
            user_id: args.user_id.clone(),
            registered_at: midnight(args.registered),
        })))
        .insert_resource(PremiumAccess(args.premium));
    if let Some(day) = args.date {
        app.insert_resource(GardenClock::fixed(midnight(day) + chrono::Duration::hours(12)));
    }

    // First update enters Loading and reads config + save; second reaches Ready.
    app.update();
    app.update();

    app.world_mut().send_event(MoodCheckInEvent { mood });
    // One frame to unlock, one for the autosave request to be written.
    app.update();
    app.update();

    let outcome = app.world().resource::<LastCheckIn>().0.clone();
    let garden = app.world().resource::<Garden>();
    let now = app.world().resource::<GardenClock>().now();
    let streak = garden.streak(now);

    match outcome {
        Some(Ok(element)) => {
            match serde_json::to_string_pretty(&element) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("[Garden] Could not print element: {}", e),
            }
            println!(
                "{} {} unlocked while feeling {} {}. Streak: {} day(s), best {}.",
                element.emoji,
                element.name,
                mood.emoji(),
                mood.label(),
                streak.current,
                streak.longest
            );
            ExitCode::SUCCESS
        }
        Some(Err(e @ CheckInError::AlreadyUnlockedToday(_))) => {
            eprintln!("Check-in rejected: {e}. Please try again tomorrow.");
            ExitCode::FAILURE
        }
        Some(Err(e)) => {
            eprintln!("Check-in rejected: {e}.");
            ExitCode::FAILURE
        }
        None => {
            eprintln!("Check-in was not processed. Please try again.");
            ExitCode::FAILURE
        }
    }
}
