pub mod css;
pub mod id;
pub mod layout;
pub mod lint;
pub mod model;
pub mod order;

pub use css::{DEFAULT_FONT_SIZE, Length};
pub use id::{LayerId, SlideId};
pub use layout::{LayoutConfig, auto_layout};
pub use lint::{LintDiagnostic, LintSeverity, lint_deck};
pub use model::*;
pub use order::{linear_order, linearize};
