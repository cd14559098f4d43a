// JD analysis pipeline: skills -> company size -> rounds -> checklist -> plan
// -> questions -> score, assembled into one history record.
// Every stage is pure and synchronous. Only handlers touch the store.

pub mod assembler;
pub mod checklist;
pub mod company;
pub mod export;
pub mod handlers;
pub mod plan;
pub mod questions;
pub mod rounds;
pub mod scoring;
pub mod skills;
