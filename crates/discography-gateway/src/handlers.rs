mod album;
mod hello;

pub use album::{create_album_handler, list_albums_handler};
pub use hello::{hello_handler, GREETING};
