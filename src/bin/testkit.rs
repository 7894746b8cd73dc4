// TestKit demonstration runner
// Usage: cargo run --bin testkit -- [--detail-depth N] [--no-color] [--format json]

fn main() {
    testkit::cli::run();
}
