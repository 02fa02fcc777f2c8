pub const GREETING: &str = "Hello from the album shelf!";

pub async fn hello_handler() -> &'static str {
    GREETING
}
