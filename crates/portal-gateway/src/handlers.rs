pub mod health;
pub mod links;
pub mod redirect;

pub use health::health_handler;
pub use links::{
    api_not_found_handler, create_link_handler, delete_link_handler, list_links_handler,
    update_link_handler,
};
pub use redirect::redirect_handler;
