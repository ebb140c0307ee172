//! Entry point for the WASM application

pub fn main() {
    extraction_frontend::start();
}
