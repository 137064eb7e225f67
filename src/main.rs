/// Binary entrypoint for the `friday-finder` executable.
///
/// Keeps the binary thin — all logic lives in the `friday_finder_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    friday_finder_lib::run();
}
