use std::path::PathBuf;

use crate::filters::Filter;

#[derive(Debug, Clone)]
pub enum Message {
    OpenRequested,
    OpenPicked(Option<PathBuf>),
    SaveRequested,
    SavePicked(Option<PathBuf>),
    ApplyFilter(Filter),
    NoticeDismissed,
}
