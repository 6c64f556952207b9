use serde::Serialize;

/// The two sides of the board. The first connection to arrive is always
/// assigned the light side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Color {
    #[serde(rename = "w")]
    Light,
    #[serde(rename = "b")]
    Dark,
}
