use crate::database::Store;
use crate::models::{UserProfile, UserProfileUpdate};

pub async fn insert_user(store: &Store, id: &str, profile: UserProfile) -> UserProfile {
    let mut users = store.users().write().await;
    users.insert(id.to_string(), profile.clone());
    profile
}

pub async fn load_user(store: &Store, user_id: &str) -> Option<UserProfile> {
    store.users().read().await.get(user_id).cloned()
}

/// Merges `update` into the record at `user_id`, creating an empty record
/// first when the id is unknown. The stored id always equals `user_id`.
pub async fn upsert_user(store: &Store, user_id: &str, update: UserProfileUpdate) -> UserProfile {
    let mut users = store.users().write().await;
    let profile = users.entry(user_id.to_string()).or_default();
    update.apply_to(profile);
    profile.id = Some(user_id.to_string());
    profile.clone()
}
