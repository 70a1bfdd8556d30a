/// Runtime value representation.
///
/// Defines [`RuntimeValue`](core::RuntimeValue), the function payloads and
/// the control-flow signals. Includes truthiness, type names and the display
/// form printed by the REPL and by `println`.
pub mod core;
/// Object property maps.
///
/// Defines [`Properties`](object::Properties), the insertion-ordered map
/// backing object values.
pub mod object;
