pub mod background;
pub mod chain_store;
pub mod clock;
pub mod config;
pub mod window;

pub use background::{BackgroundAdapter, SignResponse};
pub use chain_store::ChainStoreAdapter;
pub use clock::SystemClockAdapter;
pub use config::PopupConfig;
pub use window::{WindowAdapter, WindowCommand};
