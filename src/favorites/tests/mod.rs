// src/favorites/tests/mod.rs

mod validators_tests;
