//! # Form validation
//!
//! Each form holds the raw text of its inputs, exactly as typed. `validate()`
//! either turns it into the request payload or returns [`FormErrors`] keyed by
//! input name, which the UI renders under the matching input. A form with
//! errors must not be submitted.
//!
//! | Form | Payload |
//! |------|---------|
//! | [`LoginForm`] | [`LoginRequest`] |
//! | [`RegisterForm`] | [`RegisterRequest`] |
//! | [`FieldForm`] | [`FieldInput`] |
//! | [`ProfileForm`] | [`ProfileUpdate`] |
//! | [`RecommendationForm`] | [`RecommendationRequest`] |
//! | [`YieldForm`] | [`YieldRequest`] |

use std::collections::BTreeMap;

use api::{
    Field, FieldInput, LoginRequest, ProfileUpdate, RecommendationRequest, RegisterRequest, User,
    YieldRequest,
};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Per-input messages. Keys are the input names used by the forms below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message per field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

fn required(errors: &mut FormErrors, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
    }
}

fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse a required number, recording a message when it is missing or not a
/// number.
fn number(errors: &mut FormErrors, field: &'static str, value: &str, label: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("{label} is required"));
        return None;
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            errors.add(field, format!("{label} must be a number"));
            None
        }
    }
}

/// Parse an optional number. Blank input is `None`.
fn optional_number(
    errors: &mut FormErrors,
    field: &'static str,
    value: &str,
    label: &str,
) -> Option<f64> {
    if value.trim().is_empty() {
        None
    } else {
        number(errors, field, value, label)
    }
}

fn in_range(
    errors: &mut FormErrors,
    field: &'static str,
    value: Option<f64>,
    range: std::ops::RangeInclusive<f64>,
    label: &str,
) {
    if let Some(v) = value {
        if !range.contains(&v) {
            errors.add(
                field,
                format!("{label} must be between {} and {}", range.start(), range.end()),
            );
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::new();
        required(&mut errors, "username", &self.username, "Username");
        required(&mut errors, "password", &self.password, "Password");
        errors.finish(|| LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub farm_name: String,
    pub location: String,
    pub phone: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, FormErrors> {
        let mut errors = FormErrors::new();

        required(&mut errors, "username", &self.username, "Username");
        if self.username.trim().chars().count() < MIN_USERNAME_LEN {
            errors.add(
                "username",
                format!("Username must be at least {MIN_USERNAME_LEN} characters"),
            );
        }

        required(&mut errors, "email", &self.email, "Email");
        if !looks_like_email(&self.email) {
            errors.add("email", "Enter a valid email address");
        }

        required(&mut errors, "password", &self.password, "Password");
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        if self.password != self.password_confirm {
            errors.add("password_confirm", "Passwords do not match");
        }

        errors.finish(|| RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
            farm_name: optional_text(&self.farm_name),
            location: optional_text(&self.location),
            phone: optional_text(&self.phone),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldForm {
    pub name: String,
    pub area: String,
    pub crop_type: String,
    pub soil_type: String,
    pub irrigation_type: String,
    pub latitude: String,
    pub longitude: String,
}

impl FieldForm {
    /// Pre-fill from an existing field for editing.
    pub fn from_field(field: &Field) -> Self {
        let opt_num = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            name: field.name.clone(),
            area: field.area.to_string(),
            crop_type: field.crop_type.clone(),
            soil_type: field.soil_type.clone().unwrap_or_default(),
            irrigation_type: field.irrigation_type.clone().unwrap_or_default(),
            latitude: opt_num(field.latitude),
            longitude: opt_num(field.longitude),
        }
    }

    pub fn validate(&self) -> Result<FieldInput, FormErrors> {
        let mut errors = FormErrors::new();

        required(&mut errors, "name", &self.name, "Field name");
        required(&mut errors, "crop_type", &self.crop_type, "Crop type");

        let area = number(&mut errors, "area", &self.area, "Area");
        if area.is_some_and(|a| a <= 0.0) {
            errors.add("area", "Area must be greater than zero");
        }

        let latitude = optional_number(&mut errors, "latitude", &self.latitude, "Latitude");
        in_range(&mut errors, "latitude", latitude, -90.0..=90.0, "Latitude");
        let longitude = optional_number(&mut errors, "longitude", &self.longitude, "Longitude");
        in_range(&mut errors, "longitude", longitude, -180.0..=180.0, "Longitude");
        if latitude.is_some() != longitude.is_some() {
            let missing = if latitude.is_some() { "longitude" } else { "latitude" };
            errors.add(missing, "Enter both latitude and longitude, or neither");
        }

        errors.finish(|| FieldInput {
            name: self.name.trim().to_string(),
            area: area.unwrap_or_default(),
            crop_type: self.crop_type.trim().to_string(),
            soil_type: optional_text(&self.soil_type),
            irrigation_type: optional_text(&self.irrigation_type),
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub farm_name: String,
    pub location: String,
    pub phone: String,
    pub farm_size: String,
    /// Comma separated.
    pub crops: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        let profile = &user.profile;
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            farm_name: profile.farm_name.clone().unwrap_or_default(),
            location: profile.location.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            farm_size: profile.farm_size.map(|s| s.to_string()).unwrap_or_default(),
            crops: profile.crops.join(", "),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, FormErrors> {
        let mut errors = FormErrors::new();

        if !self.email.trim().is_empty() && !looks_like_email(&self.email) {
            errors.add("email", "Enter a valid email address");
        }
        let farm_size = optional_number(&mut errors, "farm_size", &self.farm_size, "Farm size");
        if farm_size.is_some_and(|s| s < 0.0) {
            errors.add("farm_size", "Farm size cannot be negative");
        }
        if !self.phone.trim().is_empty()
            && !self
                .phone
                .trim()
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
        {
            errors.add("phone", "Enter a valid phone number");
        }

        let crops: Vec<String> = self
            .crops
            .split(',')
            .filter_map(optional_text)
            .collect();

        errors.finish(|| ProfileUpdate {
            email: optional_text(&self.email),
            first_name: optional_text(&self.first_name),
            last_name: optional_text(&self.last_name),
            farm_name: optional_text(&self.farm_name),
            location: optional_text(&self.location),
            phone: optional_text(&self.phone),
            farm_size,
            crops: Some(crops),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationForm {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub temperature: String,
    pub humidity: String,
    pub ph: String,
    pub rainfall: String,
}

impl RecommendationForm {
    pub fn validate(&self) -> Result<RecommendationRequest, FormErrors> {
        let mut errors = FormErrors::new();

        let nitrogen = number(&mut errors, "nitrogen", &self.nitrogen, "Nitrogen");
        let phosphorus = number(&mut errors, "phosphorus", &self.phosphorus, "Phosphorus");
        let potassium = number(&mut errors, "potassium", &self.potassium, "Potassium");
        for (field, value, label) in [
            ("nitrogen", nitrogen, "Nitrogen"),
            ("phosphorus", phosphorus, "Phosphorus"),
            ("potassium", potassium, "Potassium"),
        ] {
            if value.is_some_and(|v| v < 0.0) {
                errors.add(field, format!("{label} cannot be negative"));
            }
        }

        let temperature = number(&mut errors, "temperature", &self.temperature, "Temperature");
        in_range(&mut errors, "temperature", temperature, -50.0..=60.0, "Temperature");
        let humidity = number(&mut errors, "humidity", &self.humidity, "Humidity");
        in_range(&mut errors, "humidity", humidity, 0.0..=100.0, "Humidity");
        let ph = number(&mut errors, "ph", &self.ph, "pH");
        in_range(&mut errors, "ph", ph, 0.0..=14.0, "pH");
        let rainfall = number(&mut errors, "rainfall", &self.rainfall, "Rainfall");
        if rainfall.is_some_and(|v| v < 0.0) {
            errors.add("rainfall", "Rainfall cannot be negative");
        }

        errors.finish(|| RecommendationRequest {
            nitrogen: nitrogen.unwrap_or_default(),
            phosphorus: phosphorus.unwrap_or_default(),
            potassium: potassium.unwrap_or_default(),
            temperature: temperature.unwrap_or_default(),
            humidity: humidity.unwrap_or_default(),
            ph: ph.unwrap_or_default(),
            rainfall: rainfall.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct YieldForm {
    pub field_id: String,
    pub crop_type: String,
    pub area: String,
    pub season: String,
    pub soil_type: String,
}

impl YieldForm {
    /// Pre-fill from a field so only the season needs entering.
    pub fn from_field(field: &Field) -> Self {
        Self {
            field_id: field.id.clone(),
            crop_type: field.crop_type.clone(),
            area: field.area.to_string(),
            season: String::new(),
            soil_type: field.soil_type.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<YieldRequest, FormErrors> {
        let mut errors = FormErrors::new();
        required(&mut errors, "crop_type", &self.crop_type, "Crop type");
        let area = number(&mut errors, "area", &self.area, "Area");
        if area.is_some_and(|a| a <= 0.0) {
            errors.add("area", "Area must be greater than zero");
        }
        errors.finish(|| YieldRequest {
            field_id: optional_text(&self.field_id),
            crop_type: self.crop_type.trim().to_string(),
            area: area.unwrap_or_default(),
            season: optional_text(&self.season),
            soil_type: optional_text(&self.soil_type),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form() -> RegisterForm {
        RegisterForm {
            username: "newfarmer".into(),
            email: "new@farm.io".into(),
            password: "longenough".into(),
            password_confirm: "longenough".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_requires_both_inputs() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let ok = LoginForm {
            username: " farmer1 ".into(),
            password: "t".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(ok.username, "farmer1");
    }

    #[test]
    fn test_register_rules() {
        assert!(register_form().validate().is_ok());

        let mut form = register_form();
        form.username = "ab".into();
        form.email = "not-an-email".into();
        form.password = "short".into();
        form.password_confirm = "different".into();
        let errors = form.validate().unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get("username"),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(errors.get("password_confirm"), Some("Passwords do not match"));
    }

    #[test]
    fn test_register_blank_optionals_are_omitted() {
        let mut form = register_form();
        form.farm_name = "   ".into();
        form.location = "Punjab".into();
        let req = form.validate().unwrap();
        assert_eq!(req.farm_name, None);
        assert_eq!(req.location.as_deref(), Some("Punjab"));
    }

    #[test]
    fn test_field_form() {
        let form = FieldForm {
            name: "North Field".into(),
            area: "10".into(),
            crop_type: "wheat".into(),
            ..Default::default()
        };
        let input = form.validate().unwrap();
        assert_eq!(input.area, 10.0);
        assert_eq!(input.latitude, None);

        let bad = FieldForm {
            area: "ten".into(),
            latitude: "95".into(),
            ..form.clone()
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.get("area"), Some("Area must be a number"));
        assert_eq!(errors.get("latitude"), Some("Latitude must be between -90 and 90"));
        assert_eq!(
            errors.get("longitude"),
            Some("Enter both latitude and longitude, or neither")
        );

        let zero = FieldForm {
            area: "0".into(),
            ..form
        };
        assert_eq!(
            zero.validate().unwrap_err().get("area"),
            Some("Area must be greater than zero")
        );
    }

    #[test]
    fn test_field_form_round_trips_existing_field() {
        let field = Field {
            id: "f1".into(),
            name: "North Field".into(),
            area: 10.5,
            crop_type: "wheat".into(),
            latitude: Some(28.6),
            longitude: Some(77.2),
            ..Default::default()
        };
        let input = FieldForm::from_field(&field).validate().unwrap();
        assert_eq!(input, FieldInput::from(&field));
    }

    #[test]
    fn test_profile_form() {
        let form = ProfileForm {
            phone: "abc".into(),
            farm_size: "-1".into(),
            crops: "wheat, , rice".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("phone"), Some("Enter a valid phone number"));
        assert_eq!(errors.get("farm_size"), Some("Farm size cannot be negative"));

        let ok = ProfileForm {
            phone: "+91 98765 43210".into(),
            farm_size: "12.5".into(),
            ..form
        }
        .validate()
        .unwrap();
        assert_eq!(ok.crops, Some(vec!["wheat".to_string(), "rice".to_string()]));
        assert_eq!(ok.farm_size, Some(12.5));
        assert_eq!(ok.email, None);
    }

    #[test]
    fn test_recommendation_form_ranges() {
        let form = RecommendationForm {
            nitrogen: "90".into(),
            phosphorus: "42".into(),
            potassium: "43".into(),
            temperature: "20.8".into(),
            humidity: "82".into(),
            ph: "6.5".into(),
            rainfall: "202.9".into(),
        };
        assert_eq!(form.validate().unwrap().ph, 6.5);

        let bad = RecommendationForm {
            ph: "15".into(),
            humidity: "".into(),
            ..form
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.get("ph"), Some("pH must be between 0 and 14"));
        assert_eq!(errors.get("humidity"), Some("Humidity is required"));
    }

    #[test]
    fn test_yield_form_from_field() {
        let field = Field {
            id: "f1".into(),
            area: 4.0,
            crop_type: "rice".into(),
            ..Default::default()
        };
        let req = YieldForm::from_field(&field).validate().unwrap();
        assert_eq!(req.field_id.as_deref(), Some("f1"));
        assert_eq!(req.season, None);
    }
}
