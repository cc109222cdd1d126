// tests/integration/main.rs

mod amr;
