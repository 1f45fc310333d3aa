//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Steps that must join an
//! enclosing transaction take `&mut PgConnection` instead.

pub mod announcement_repo;
pub mod blood_request_repo;
pub mod campaign_repo;
pub mod donation_repo;
pub mod donor_repo;
pub mod inventory_repo;
pub mod profile_repo;
pub mod session_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepo;
pub use blood_request_repo::BloodRequestRepo;
pub use campaign_repo::CampaignRepo;
pub use donation_repo::DonationRepo;
pub use donor_repo::DonorRepo;
pub use inventory_repo::InventoryRepo;
pub use profile_repo::ProfileRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
