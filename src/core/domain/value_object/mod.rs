mod base_url;
mod credentials;

pub use base_url::BaseUrl;
pub use credentials::Credentials;
