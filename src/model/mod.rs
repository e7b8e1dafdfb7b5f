pub mod category;
pub mod curation;
pub mod episode;
pub mod podcast;
pub mod user;

pub use category::ItunesCategory;
pub use curation::{Curation, UNSAVED_CURATION_ID};
pub use episode::{Episode, EpisodeMetadata};
pub use podcast::Podcast;
pub use user::User;
