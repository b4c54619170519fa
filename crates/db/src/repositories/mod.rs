//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod camp_repo;
pub mod speaker_repo;
pub mod talk_repo;

pub use camp_repo::CampRepo;
pub use speaker_repo::SpeakerRepo;
pub use talk_repo::TalkRepo;
