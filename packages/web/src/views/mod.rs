mod layouts;
pub use layouts::{ProtectedLayout, PublicLayout};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod fields;
pub use fields::{FieldDetail, FieldEdit, FieldNew, Fields};

mod crop_advisor;
pub use crop_advisor::CropAdvisor;

mod disease;
pub use disease::DiseaseDetection;

mod weather;
pub use weather::Weather;

mod market;
pub use market::Market;

mod irrigation;
pub use irrigation::Irrigation;

mod advisories;
pub use advisories::Advisories;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;
