mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from imgfilter for tests
pub use imgfilter::{
    AppState, Command, Dispatcher, Filter, FilterBank, Notice, NoticeLevel, Outcome, Settings,
};
