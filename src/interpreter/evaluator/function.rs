/// The native function table and the call machinery.
pub mod core;
/// The `println` native function.
///
/// Writes its arguments to standard output on one line.
pub mod print;
/// The `time` native function.
pub mod clock;
/// The `assert` native function.
///
/// Fails the program when its argument is not truthy.
pub mod assert;
