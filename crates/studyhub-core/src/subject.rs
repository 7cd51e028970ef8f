//! Study group subject classification.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The closed set of topics a study group can be dedicated to.
///
/// Subjects round-trip through their exact variant name: `Display` produces
/// `"Math"`, and parsing is case-sensitive, so `"PHySIcS"` or `"Phys"` are
/// rejected rather than coerced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
}
