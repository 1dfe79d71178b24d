//! Small presentational building blocks shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{FieldError, Input, Select};

mod label;
pub use label::Label;

mod card;
pub use card::{Card, StatCard};

mod spinner;
pub use spinner::{FullScreenSpinner, Spinner};
