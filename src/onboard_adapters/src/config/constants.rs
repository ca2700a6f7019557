pub mod env {
    pub const ENV_PREFIX: &str = "ONBOARD";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_FILE: &str = "config/base";
pub const SIGNUP_PATH: &str = "/signup";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const LOG_FILTER: &str = "info";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
