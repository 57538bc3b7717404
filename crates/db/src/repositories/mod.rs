//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every query touching
//! seller-owned rows filters on `seller_id`; rows owned by another seller
//! behave exactly like rows that do not exist.

pub mod listing_photo_repo;
pub mod listing_repo;
pub mod notify_request_repo;
pub mod seller_repo;
pub mod shipment_repo;
pub mod species_repo;

pub use listing_photo_repo::ListingPhotoRepo;
pub use listing_repo::ListingRepo;
pub use notify_request_repo::NotifyRequestRepo;
pub use seller_repo::SellerRepo;
pub use shipment_repo::ShipmentRepo;
pub use species_repo::SpeciesRepo;
