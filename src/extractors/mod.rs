//! Request extractors whose rejections are [`AppError`](crate::error::AppError)s.

mod id;
mod payload;
pub use id::{parse_id, EntityId};
pub use payload::Payload;
