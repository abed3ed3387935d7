pub mod event;
pub mod secret;
pub mod state;
pub mod step;
