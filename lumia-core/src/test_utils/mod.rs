// File: lumia-core/src/test_utils/mod.rs

pub mod fixtures;
