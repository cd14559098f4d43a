// Manual completion tracking: pre-ship test checklist, proof links,
// footer flags and the derived project status.

pub mod handlers;
pub mod state;
pub mod submission;
