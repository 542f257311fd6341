pub mod actions;
pub mod context;

pub use actions::ActionOutput;
pub use context::PullRequestContext;
