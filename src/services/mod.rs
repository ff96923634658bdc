pub mod diagnostics;
pub mod duration;
pub mod providers;
pub mod video_search;

pub use providers::{VideoPlatform, YouTubeProvider};
pub use video_search::VideoSearch;
