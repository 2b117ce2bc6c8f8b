mod hit_testing;

pub use hit_testing::{contains, first_hit, to_local};
