// Route path constants - single source of truth for all API paths

pub const HELLO: &str = "/hello";
pub const NEW_ENDPOINT: &str = "/newEndpoint";
pub const GREETING: &str = "/greeting";
