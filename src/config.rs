pub mod request_timeout;
pub mod settings;
pub mod user;

pub use request_timeout::RequestTimeout;
pub use settings::BridgeSettings;
pub use user::user_config_path;
