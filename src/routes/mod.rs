pub mod portal;

pub use portal::configure_portal_routes;
