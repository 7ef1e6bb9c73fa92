// This binary crate is intentionally minimal.
// All perceptron logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example and_gate
fn main() {
    println!("ferrite-perceptron: from-scratch single-layer perceptrons in Rust.");
    println!("Run `cargo run --example and_gate` to see the AND-gate demo.");
}
