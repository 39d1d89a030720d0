mod destructuring_newline;

pub use destructuring_newline::{check_object_pattern, RULE_NAME};
