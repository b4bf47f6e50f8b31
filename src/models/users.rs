use serde::{Deserialize, Deserializer, Serialize};

/// Stored user profile. Every field is serialized, unset ones as `null`.
///
/// `name` and `phone` are optional here because update on an unknown id
/// starts from an empty record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub nationality: Option<String>,
    pub blood_type: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub hotel_name: Option<String>,
    pub hotel_address: Option<String>,
}

/// Body of `POST /api/users`. Any `id` sent by the client is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUserProfile {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub nationality: Option<String>,
    pub blood_type: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub hotel_name: Option<String>,
    pub hotel_address: Option<String>,
}

impl NewUserProfile {
    pub fn into_profile(self, id: String) -> UserProfile {
        UserProfile {
            id: Some(id),
            name: Some(self.name),
            phone: Some(self.phone),
            email: self.email,
            nationality: self.nationality,
            blood_type: self.blood_type,
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_phone: self.emergency_contact_phone,
            hotel_name: self.hotel_name,
            hotel_address: self.hotel_address,
        }
    }
}

/// Body of `PUT /api/users/:user_id`.
///
/// Outer `None` = field absent (leave as is), `Some(None)` = explicit
/// `null` (clear it).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfileUpdate {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub nationality: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub blood_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub emergency_contact_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub emergency_contact_phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub hotel_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub hotel_address: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UserProfileUpdate {
    /// Applies the supplied fields to `profile`, leaving the rest alone.
    pub fn apply_to(self, profile: &mut UserProfile) {
        fn merge(slot: &mut Option<String>, value: Option<Option<String>>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut profile.name, self.name);
        merge(&mut profile.phone, self.phone);
        merge(&mut profile.email, self.email);
        merge(&mut profile.nationality, self.nationality);
        merge(&mut profile.blood_type, self.blood_type);
        merge(&mut profile.emergency_contact_name, self.emergency_contact_name);
        merge(&mut profile.emergency_contact_phone, self.emergency_contact_phone);
        merge(&mut profile.hotel_name, self.hotel_name);
        merge(&mut profile.hotel_address, self.hotel_address);
    }
}
