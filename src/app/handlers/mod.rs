//! Feature-Handler: mutierende Operationen auf dem AppState.

pub mod playback;
