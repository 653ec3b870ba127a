pub static DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

pub static DEFAULT_BASE_URL: &str = "https://gateway.marvel.com/v1/public/";
