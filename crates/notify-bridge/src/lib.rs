//! Bridging core for the kTVCSS desktop shell.
//!
//! Maps intercepted page notifications and audio constructions to
//! native behavior: category inference, the short-lived category
//! signal, sound-path resolution, and the bounded-retry scheduler
//! that arms page patches. No Tauri dependency; the shell binds the
//! [`NotificationGateway`] seam to the OS facility.

pub mod audio;
pub mod intent;
pub mod retry;
pub mod router;
pub mod type_state;

pub use audio::{AudioPathResolver, AudioRequest, AudioResolution};
pub use intent::NotificationIntent;
pub use retry::{Probe, RetryOutcome, RetryPolicy};
pub use router::{NotificationGateway, NotificationRouter, Permission};
pub use type_state::NotificationTypeState;

/// Category tag carried by "game found" notifications.
pub const GAME_READY: &str = "game-ready";
