#[allow(dead_code)]
pub(crate) mod utils;

mod common;


#[cfg(loom)]
mod loom_test;
