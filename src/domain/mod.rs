pub mod mode;
pub mod story;

pub use mode::Mode;
pub use story::{RowContent, Story, StoryId, StoryRow};
