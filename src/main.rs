/// Binary entrypoint for the `file2c` executable.
///
/// Keeps the binary thin: all logic lives in the `file2c_lib` crate so unit
/// tests can import library functions directly.
fn main() {
    file2c_lib::run();
}
