pub mod posting;
pub mod resume;

pub use posting::{JobPosting, MatchResult};
pub use resume::ResumeText;
