pub mod hello;
pub mod new_endpoint;
pub mod greeting;
pub mod not_found;

pub use hello::hello_handler;
pub use new_endpoint::new_endpoint_handler;
pub use greeting::greeting_handler;
pub use not_found::not_found_handler;
