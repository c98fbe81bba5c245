/// Width (px) below which the narrow profile layout is used
pub const DEFAULT_NARROW_BREAKPOINT_PX: f64 = 768.0;

/// Layout variant chosen from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }
}

/// User-editable profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    DateOfBirth,
    PermanentAddress,
    City,
    Username,
    Password,
    Country,
    PresentAddress,
    PostalCode,
}

impl ProfileField {
    pub const NARROW_ORDER: [ProfileField; 10] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::DateOfBirth,
        ProfileField::PermanentAddress,
        ProfileField::City,
        ProfileField::Username,
        ProfileField::Password,
        ProfileField::Country,
        ProfileField::PresentAddress,
        ProfileField::PostalCode,
    ];

    pub const WIDE_ORDER: [ProfileField; 10] = [
        ProfileField::Name,
        ProfileField::Username,
        ProfileField::Email,
        ProfileField::Password,
        ProfileField::DateOfBirth,
        ProfileField::Country,
        ProfileField::PermanentAddress,
        ProfileField::PresentAddress,
        ProfileField::City,
        ProfileField::PostalCode,
    ];

    pub fn order(layout: Viewport) -> &'static [ProfileField] {
        match layout {
            Viewport::Narrow => &Self::NARROW_ORDER,
            Viewport::Wide => &Self::WIDE_ORDER,
        }
    }

    pub fn label(self, layout: Viewport) -> &'static str {
        match (self, layout) {
            (ProfileField::Name, _) => "Your Name",
            (ProfileField::Email, _) => "Email",
            (ProfileField::DateOfBirth, _) => "Date of Birth",
            (ProfileField::PermanentAddress, Viewport::Narrow) => "Permanent address",
            (ProfileField::PermanentAddress, Viewport::Wide) => "Permanent Address",
            (ProfileField::City, _) => "City",
            (ProfileField::Username, Viewport::Narrow) => "Username",
            (ProfileField::Username, Viewport::Wide) => "User Name",
            (ProfileField::Password, _) => "Password",
            (ProfileField::Country, _) => "Country",
            (ProfileField::PresentAddress, Viewport::Narrow) => "Present address",
            (ProfileField::PresentAddress, Viewport::Wide) => "Present Address",
            (ProfileField::PostalCode, Viewport::Narrow) => "Postal code",
            (ProfileField::PostalCode, Viewport::Wide) => "Postal Code",
        }
    }

    /// The wide layout is pre-filled, so only its password input has a placeholder
    pub fn placeholder(self, layout: Viewport) -> &'static str {
        match (self, layout) {
            (ProfileField::Password, Viewport::Wide) => "Enter new password",
            (_, Viewport::Wide) => "",
            (ProfileField::Name, _) => "Enter your name",
            (ProfileField::Email, _) => "Enter your email",
            (ProfileField::DateOfBirth, _) => "Enter your DOB",
            (ProfileField::PermanentAddress, _) => "Enter your address",
            (ProfileField::City, _) => "Enter your city",
            (ProfileField::Username, _) => "Enter your username",
            (ProfileField::Password, _) => "Enter your password",
            (ProfileField::Country, _) => "Enter your country",
            (ProfileField::PresentAddress, _) => "Enter your present address",
            (ProfileField::PostalCode, _) => "Enter your postal code",
        }
    }

    /// HTML `type` attribute of the input
    pub fn input_type(self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::Password => "password",
            _ => "text",
        }
    }

    /// Address fields take a full row of the wide grid
    pub fn spans_row(self) -> bool {
        matches!(self, ProfileField::PermanentAddress | ProfileField::PresentAddress)
    }
}

/// Locally staged profile edits. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    pub permanent_address: String,
    pub city: String,
    pub username: String,
    pub password: String,
    pub country: String,
    pub present_address: String,
    pub postal_code: String,
}

impl ProfileFields {
    /// Example profile shown pre-filled in the wide layout
    pub fn sample() -> Self {
        Self {
            name: "Charlene Reed".to_string(),
            email: "charlenereed@gmail.com".to_string(),
            date_of_birth: "25 January 1990".to_string(),
            permanent_address: "San Jose, California, USA".to_string(),
            city: "San Jose".to_string(),
            username: "Charlene Reed".to_string(),
            password: String::new(),
            country: "USA".to_string(),
            present_address: "San Jose, California, USA".to_string(),
            postal_code: "45962".to_string(),
        }
    }

    /// Initial values for a layout variant
    pub fn initial(layout: Viewport) -> Self {
        match layout {
            Viewport::Narrow => Self::default(),
            Viewport::Wide => Self::sample(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::DateOfBirth => &self.date_of_birth,
            ProfileField::PermanentAddress => &self.permanent_address,
            ProfileField::City => &self.city,
            ProfileField::Username => &self.username,
            ProfileField::Password => &self.password,
            ProfileField::Country => &self.country,
            ProfileField::PresentAddress => &self.present_address,
            ProfileField::PostalCode => &self.postal_code,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::DateOfBirth => &mut self.date_of_birth,
            ProfileField::PermanentAddress => &mut self.permanent_address,
            ProfileField::City => &mut self.city,
            ProfileField::Username => &mut self.username,
            ProfileField::Password => &mut self.password,
            ProfileField::Country => &mut self.country,
            ProfileField::PresentAddress => &mut self.present_address,
            ProfileField::PostalCode => &mut self.postal_code,
        };
        *slot = value.into();
    }
}
