pub mod seeding;
pub mod stream;

pub use seeding::{seed_for, Seed, SEED_RESOLUTION};
pub use stream::RandomStream;
